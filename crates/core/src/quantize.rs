//! Raw expiration arithmetic.
//!
//! Wall-clock milliseconds are folded into a 31-bit "unit" space where one
//! unit is 10ms and later real time maps to a *smaller* unit value. Deadlines
//! computed from a unit time are then rounded into fixed-width buckets so that
//! work requested close together shares one expiration value.
//!
//! Everything here is unchecked integer arithmetic. Callers must keep elapsed
//! time within the 31-bit budget (use an epoch close to process start, not the
//! Unix epoch). [`crate::Quantizer`] wraps these functions with range checks.

/// Largest value representable in a signed 31-bit integer.
pub const MAX_SIGNED_31_BIT_INT: i64 = 1_073_741_823;

/// Lowest-urgency sentinel.
pub const IDLE: i64 = 2;

/// Synchronous work. Never expires; most urgent.
pub const SYNC: i64 = MAX_SIGNED_31_BIT_INT;

/// Upper bound (exclusive) of computed expirations.
pub const BATCHED: i64 = SYNC - 1;

/// Real milliseconds per unit.
pub const UNIT_SIZE_MS: i64 = 10;

/// Offset the unit space counts down from, one below [`BATCHED`] so computed
/// values never clash with it.
pub const MAGIC_NUMBER_OFFSET: i64 = BATCHED - 1;

/// Expiration budget and bucket width for user-blocking work.
pub const INTERACTIVE_EXPIRATION_MS: i64 = 500;
pub const INTERACTIVE_BUCKET_SIZE_MS: i64 = 100;

/// Expiration budget and bucket width for background work.
pub const ASYNC_EXPIRATION_MS: i64 = 5000;
pub const ASYNC_BUCKET_SIZE_MS: i64 = 250;

/// Convert elapsed milliseconds to a unit time.
///
/// The division truncates, so every 10ms window maps to the same unit. The
/// result never increases as `ms` grows.
pub fn millis_to_unit(ms: u64) -> i64 {
    MAGIC_NUMBER_OFFSET - (ms / UNIT_SIZE_MS as u64) as i64
}

/// Round `num` up to the next multiple of `precision`.
///
/// This always adds one bucket after truncating, so an exact multiple is still
/// pushed to the following boundary. Consumers depend on that alignment; do
/// not replace it with a true ceiling.
fn ceiling(num: i64, precision: i64) -> i64 {
    (num / precision + 1) * precision
}

/// Compute the bucketed expiration for work requested at `current_unit_time`.
///
/// `expiration_offset_ms` is the deadline budget and `bucket_size_ms` the
/// batching window, both in real milliseconds. Two unit times falling in the
/// same bucket window produce identical results.
///
/// `bucket_size_ms` must be at least [`UNIT_SIZE_MS`]; smaller values divide
/// by zero.
pub fn quantize_expiration(
    current_unit_time: i64,
    expiration_offset_ms: i64,
    bucket_size_ms: i64,
) -> i64 {
    MAGIC_NUMBER_OFFSET
        - ceiling(
            MAGIC_NUMBER_OFFSET - current_unit_time + expiration_offset_ms / UNIT_SIZE_MS,
            bucket_size_ms / UNIT_SIZE_MS,
        )
}

/// Expiration for user-blocking work: 500ms budget in 100ms buckets.
pub fn interactive_expiration(current_unit_time: i64) -> i64 {
    quantize_expiration(
        current_unit_time,
        INTERACTIVE_EXPIRATION_MS,
        INTERACTIVE_BUCKET_SIZE_MS,
    )
}

/// Expiration for background work: 5000ms budget in 250ms buckets.
pub fn async_expiration(current_unit_time: i64) -> i64 {
    quantize_expiration(current_unit_time, ASYNC_EXPIRATION_MS, ASYNC_BUCKET_SIZE_MS)
}
