use expiry_core::{
    BucketPolicy, Clock, ExpirationTime, ExpiryError, ManualClock, PriorityClass, Quantizer,
    QuantizerConfig, MAGIC_NUMBER_OFFSET,
};

#[test]
fn snapshot_at_epoch() {
    let snap = Quantizer::default().snapshot(0).unwrap();
    assert_eq!(snap.current_time.get(), MAGIC_NUMBER_OFFSET);
    assert_eq!(snap.interactive.raw(), MAGIC_NUMBER_OFFSET - 60);
    assert_eq!(snap.r#async.raw(), MAGIC_NUMBER_OFFSET - 525);
    assert!(snap.interactive.is_more_urgent_than(snap.r#async));
}

#[test]
fn configured_policy_changes_bucketing() {
    let config = QuantizerConfig {
        interactive: BucketPolicy::new(500, 1_000).unwrap(),
        ..QuantizerConfig::default()
    };
    let q = Quantizer::new(&config).unwrap();
    let first = q.expiration(PriorityClass::Interactive, 0).unwrap();
    // 1s buckets keep the first 50 units (500ms) together.
    assert_eq!(q.expiration(PriorityClass::Interactive, 490).unwrap(), first);
    assert_ne!(q.expiration(PriorityClass::Interactive, 500).unwrap(), first);
}

#[test]
fn manual_clock_drives_quantizer() {
    let q = Quantizer::default();
    let clock = ManualClock::new(10_000);
    let a = q.expiration_now(PriorityClass::Async, &clock).unwrap();
    clock.advance(clock.now_ms() % 250 + 1);
    let b = q.expiration_now(PriorityClass::Async, &clock).unwrap();
    assert!(matches!(a, ExpirationTime::Computed(_)));
    assert!(a >= b);
}

#[test]
fn budget_overflow_is_an_error() {
    let q = Quantizer::default();
    let elapsed_ms = (MAGIC_NUMBER_OFFSET as u64) * 10;
    assert_eq!(
        q.snapshot(elapsed_ms),
        Err(ExpiryError::ElapsedOutOfRange { elapsed_ms })
    );
}
