pub mod clock;
pub mod config;
pub mod error;
pub mod expiration;
pub mod priority;
pub mod quantize;
pub mod quantizer;

pub use clock::{Clock, ManualClock, ProcessClock};
pub use config::{load_dotenv, QuantizerConfig};
pub use error::ExpiryError;
pub use expiration::{compare_urgency, ExpirationTime, PriorityTime};
pub use priority::{BucketPolicy, PriorityClass};
pub use quantize::*;
pub use quantizer::{ExpirationSnapshot, Quantizer};
