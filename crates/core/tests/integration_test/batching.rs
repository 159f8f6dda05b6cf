use expiry_core::{
    async_expiration, interactive_expiration, millis_to_unit, quantize_expiration, BucketPolicy,
    PriorityClass, MAGIC_NUMBER_OFFSET,
};

/// Group elapsed-ms readings by the expiration they quantize to.
fn distinct_expirations(policy: BucketPolicy, readings: impl Iterator<Item = u64>) -> Vec<i64> {
    let mut values: Vec<i64> = readings
        .map(|ms| policy.expiration(millis_to_unit(ms)))
        .collect();
    values.dedup();
    values
}

#[test]
fn interactive_requests_within_100ms_share_a_key() {
    // 1_000..1_099 ms: units 100..109, plus the 50-unit budget = 150..159.
    let keys = distinct_expirations(PriorityClass::Interactive.policy(), 1_000..1_100);
    assert_eq!(keys, vec![MAGIC_NUMBER_OFFSET - 160]);
}

#[test]
fn async_requests_within_250ms_share_a_key() {
    // Units 0..=24 plus 500 stay inside one 25-unit bucket.
    let keys = distinct_expirations(PriorityClass::Async.policy(), 0..250);
    assert_eq!(keys, vec![MAGIC_NUMBER_OFFSET - 525]);
}

#[test]
fn one_key_per_bucket_over_a_second() {
    let interactive = distinct_expirations(PriorityClass::Interactive.policy(), 0..1_000);
    let background = distinct_expirations(PriorityClass::Async.policy(), 0..1_000);
    assert_eq!(interactive.len(), 10);
    assert_eq!(background.len(), 4);
}

#[test]
fn keys_step_down_by_bucket_width() {
    let keys = distinct_expirations(PriorityClass::Interactive.policy(), 0..500);
    for pair in keys.windows(2) {
        assert_eq!(pair[0] - pair[1], 10);
    }
}

#[test]
fn exact_multiple_moves_to_next_bucket() {
    // Offset 0 and bucket 100 (precision 10): elapsed units 10 and 19 share
    // ceiling 20, and exactly 20 is pushed on to 30.
    let at = |ms: u64| quantize_expiration(millis_to_unit(ms), 0, 100);
    assert_eq!(at(100), MAGIC_NUMBER_OFFSET - 20);
    assert_eq!(at(190), MAGIC_NUMBER_OFFSET - 20);
    assert_eq!(at(200), MAGIC_NUMBER_OFFSET - 30);
    assert_eq!(at(0), MAGIC_NUMBER_OFFSET - 10);
}

#[test]
fn general_function_reproduces_interactive_literal() {
    assert_eq!(quantize_expiration(0, 500, 100), interactive_expiration(0));
    assert_eq!(interactive_expiration(0), -59);
    assert_eq!(quantize_expiration(0, 5000, 250), async_expiration(0));
}

#[test]
fn non_monotonic_readings_are_tolerated() {
    // A clock stepping backwards just yields the earlier bucket again.
    let forward = interactive_expiration(millis_to_unit(2_000));
    let back = interactive_expiration(millis_to_unit(1_950));
    let again = interactive_expiration(millis_to_unit(2_000));
    assert_eq!(forward, again);
    assert!(back >= forward);
}
