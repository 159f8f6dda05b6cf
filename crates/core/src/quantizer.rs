//! Range-checked entry point over the raw expiration arithmetic.
//!
//! [`Quantizer`] holds one [`BucketPolicy`] per [`PriorityClass`] and returns
//! typed [`ExpirationTime`] values, turning the raw functions' preconditions
//! into [`ExpiryError`]s.

use serde::Serialize;
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::config::QuantizerConfig;
use crate::error::ExpiryError;
use crate::expiration::{ExpirationTime, PriorityTime};
use crate::priority::{BucketPolicy, PriorityClass};
use crate::quantize::millis_to_unit;

/// Unit time and both class expirations for a single clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpirationSnapshot {
    pub elapsed_ms: u64,
    pub current_time: PriorityTime,
    pub interactive: ExpirationTime,
    pub r#async: ExpirationTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantizer {
    interactive: BucketPolicy,
    background: BucketPolicy,
}

impl Default for Quantizer {
    fn default() -> Self {
        Self {
            interactive: PriorityClass::Interactive.policy(),
            background: PriorityClass::Async.policy(),
        }
    }
}

impl Quantizer {
    pub fn new(config: &QuantizerConfig) -> Result<Self, ExpiryError> {
        config.validate()?;
        debug!(
            profile = config.profile_label(),
            interactive_ms = config.interactive.expiration_offset_ms,
            interactive_bucket_ms = config.interactive.bucket_size_ms,
            async_ms = config.r#async.expiration_offset_ms,
            async_bucket_ms = config.r#async.bucket_size_ms,
            "quantizer configured"
        );
        Ok(Self {
            interactive: config.interactive,
            background: config.r#async,
        })
    }

    pub fn policy(&self, class: PriorityClass) -> BucketPolicy {
        match class {
            PriorityClass::Interactive => self.interactive,
            PriorityClass::Async => self.background,
        }
    }

    /// Unit time for an elapsed-ms reading, rejecting readings that would
    /// reach the `Idle` sentinel.
    pub fn unit_time(&self, elapsed_ms: u64) -> Result<PriorityTime, ExpiryError> {
        PriorityTime::new(millis_to_unit(elapsed_ms))
            .map_err(|_| ExpiryError::ElapsedOutOfRange { elapsed_ms })
    }

    pub fn expiration(
        &self,
        class: PriorityClass,
        elapsed_ms: u64,
    ) -> Result<ExpirationTime, ExpiryError> {
        self.expiration_with(self.policy(class), elapsed_ms)
    }

    /// Expiration under an arbitrary policy.
    pub fn expiration_with(
        &self,
        policy: BucketPolicy,
        elapsed_ms: u64,
    ) -> Result<ExpirationTime, ExpiryError> {
        policy.validate()?;
        let current = self.unit_time(elapsed_ms)?;
        let value = policy.expiration(current.get());
        trace!(
            elapsed_ms,
            current_time = current.get(),
            expiration_offset_ms = policy.expiration_offset_ms,
            bucket_size_ms = policy.bucket_size_ms,
            value,
            "computed expiration"
        );
        PriorityTime::new(value).map(ExpirationTime::Computed)
    }

    pub fn expiration_now(
        &self,
        class: PriorityClass,
        clock: &impl Clock,
    ) -> Result<ExpirationTime, ExpiryError> {
        self.expiration(class, clock.now_ms())
    }

    pub fn snapshot(&self, elapsed_ms: u64) -> Result<ExpirationSnapshot, ExpiryError> {
        Ok(ExpirationSnapshot {
            elapsed_ms,
            current_time: self.unit_time(elapsed_ms)?,
            interactive: self.expiration(PriorityClass::Interactive, elapsed_ms)?,
            r#async: self.expiration(PriorityClass::Async, elapsed_ms)?,
        })
    }
}
