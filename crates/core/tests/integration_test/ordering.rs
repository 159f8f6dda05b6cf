use expiry_core::{
    async_expiration, compare_urgency, interactive_expiration, millis_to_unit, ExpirationTime,
    BATCHED, IDLE,
};
use std::cmp::Ordering;

fn typed(raw: i64) -> ExpirationTime {
    ExpirationTime::from_raw(raw).expect("computed expiration in range")
}

#[test]
fn unit_time_inverts_real_time() {
    let readings = [0u64, 1, 9, 10, 11, 500, 10_000, 3_600_000, 86_400_000];
    for pair in readings.windows(2) {
        assert!(millis_to_unit(pair[0]) >= millis_to_unit(pair[1]));
    }
}

#[test]
fn wrapper_outputs_are_inside_sentinels() {
    for ms in (0..7_200_000u64).step_by(61_111) {
        let now = millis_to_unit(ms);
        for raw in [interactive_expiration(now), async_expiration(now)] {
            assert!(raw > IDLE && raw < BATCHED);
        }
    }
}

#[test]
fn async_always_less_urgent_than_interactive() {
    for ms in (0..100_000u64).step_by(37) {
        let now = millis_to_unit(ms);
        let interactive = typed(interactive_expiration(now));
        let background = typed(async_expiration(now));
        assert_eq!(compare_urgency(background, interactive), Ordering::Less);
    }
}

#[test]
fn earlier_requests_outrank_later_ones() {
    let early = typed(interactive_expiration(millis_to_unit(0)));
    let late = typed(interactive_expiration(millis_to_unit(5_000)));
    assert!(early.is_more_urgent_than(late));
}

#[test]
fn sentinels_bound_every_computed_value() {
    let now = millis_to_unit(42_000);
    for raw in [interactive_expiration(now), async_expiration(now)] {
        let value = typed(raw);
        assert!(ExpirationTime::Sync.is_more_urgent_than(value));
        assert!(value.is_more_urgent_than(ExpirationTime::Idle));
    }
}

#[test]
fn pure_functions_are_idempotent() {
    for ms in [0u64, 77, 12_345_678] {
        let now = millis_to_unit(ms);
        assert_eq!(now, millis_to_unit(ms));
        assert_eq!(interactive_expiration(now), interactive_expiration(now));
        assert_eq!(async_expiration(now), async_expiration(now));
    }
}
