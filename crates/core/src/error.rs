use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    #[error("bucket size must be a non-zero multiple of 10ms, got {bucket_size_ms}ms")]
    InvalidBucketSize { bucket_size_ms: i64 },

    #[error("expiration offset must be non-negative, got {expiration_offset_ms}ms")]
    InvalidExpirationOffset { expiration_offset_ms: i64 },

    #[error("elapsed time {elapsed_ms}ms is outside the 31-bit expiration budget")]
    ElapsedOutOfRange { elapsed_ms: u64 },

    #[error("computed expiration {value} collides with a reserved sentinel")]
    ExpirationOutOfRange { value: i64 },

    #[error("{0} is not a valid expiration value")]
    InvalidExpiration(i64),

    #[error("unknown priority class: '{0}'")]
    UnknownPriorityClass(String),

    #[error("Config error: {0}")]
    Config(String),
}
