use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExpiryError;
use crate::quantize::{
    quantize_expiration, ASYNC_BUCKET_SIZE_MS, ASYNC_EXPIRATION_MS, INTERACTIVE_BUCKET_SIZE_MS,
    INTERACTIVE_EXPIRATION_MS, UNIT_SIZE_MS,
};

/// Deadline tier for a pending unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityClass {
    /// User-blocking work with a short deadline.
    Interactive,
    /// Background work with a long deadline.
    Async,
}

impl PriorityClass {
    pub const ALL: [PriorityClass; 2] = [PriorityClass::Interactive, PriorityClass::Async];

    pub fn expiration_offset_ms(self) -> i64 {
        match self {
            PriorityClass::Interactive => INTERACTIVE_EXPIRATION_MS,
            PriorityClass::Async => ASYNC_EXPIRATION_MS,
        }
    }

    pub fn bucket_size_ms(self) -> i64 {
        match self {
            PriorityClass::Interactive => INTERACTIVE_BUCKET_SIZE_MS,
            PriorityClass::Async => ASYNC_BUCKET_SIZE_MS,
        }
    }

    /// The fixed policy for this class.
    pub fn policy(self) -> BucketPolicy {
        BucketPolicy {
            expiration_offset_ms: self.expiration_offset_ms(),
            bucket_size_ms: self.bucket_size_ms(),
        }
    }

    pub fn expiration(self, current_unit_time: i64) -> i64 {
        self.policy().expiration(current_unit_time)
    }
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityClass::Interactive => write!(f, "interactive"),
            PriorityClass::Async => write!(f, "async"),
        }
    }
}

impl FromStr for PriorityClass {
    type Err = ExpiryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interactive" => Ok(PriorityClass::Interactive),
            "async" => Ok(PriorityClass::Async),
            other => Err(ExpiryError::UnknownPriorityClass(other.to_string())),
        }
    }
}

/// An (expiration offset, bucket size) pair in real milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BucketPolicy {
    pub expiration_offset_ms: i64,
    pub bucket_size_ms: i64,
}

impl BucketPolicy {
    pub fn new(expiration_offset_ms: i64, bucket_size_ms: i64) -> Result<Self, ExpiryError> {
        let policy = Self {
            expiration_offset_ms,
            bucket_size_ms,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// The bucket must hold a whole, non-zero number of units, otherwise the
    /// rounding precision would truncate.
    pub fn validate(&self) -> Result<(), ExpiryError> {
        if self.bucket_size_ms <= 0 || self.bucket_size_ms % UNIT_SIZE_MS != 0 {
            return Err(ExpiryError::InvalidBucketSize {
                bucket_size_ms: self.bucket_size_ms,
            });
        }
        if self.expiration_offset_ms < 0 {
            return Err(ExpiryError::InvalidExpirationOffset {
                expiration_offset_ms: self.expiration_offset_ms,
            });
        }
        Ok(())
    }

    /// Bucket width in units.
    pub fn precision(&self) -> i64 {
        self.bucket_size_ms / UNIT_SIZE_MS
    }

    /// Raw expiration under this policy.
    ///
    /// Unchecked like [`quantize_expiration`]: a policy built without
    /// [`BucketPolicy::validate`] (struct literal or deserialized) with
    /// `bucket_size_ms` below [`UNIT_SIZE_MS`] divides by zero.
    pub fn expiration(&self, current_unit_time: i64) -> i64 {
        quantize_expiration(current_unit_time, self.expiration_offset_ms, self.bucket_size_ms)
    }
}

impl From<PriorityClass> for BucketPolicy {
    fn from(class: PriorityClass) -> Self {
        class.policy()
    }
}
