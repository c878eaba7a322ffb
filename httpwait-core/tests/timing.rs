use std::time::Duration;

use httpwait_core::{Clamp, TimingField, TimingPolicy};

#[test]
fn max_attempts_rounds_up() {
    let timing = TimingPolicy::from_millis(1000, 200, 300);
    assert_eq!(timing.max_attempts(), 4);
}

#[test]
fn max_attempts_exact_division() {
    let timing = TimingPolicy::from_millis(500, 200, 500);
    assert_eq!(timing.max_attempts(), 1);
    let timing = TimingPolicy::from_millis(1_800_000, 200, 200);
    assert_eq!(timing.max_attempts(), 9000);
}

#[test]
fn max_attempts_survives_zero_waiting_time() {
    let timing = TimingPolicy {
        timeout: Duration::from_millis(10),
        single_attempt_timeout: Duration::from_millis(10),
        waiting_time: Duration::ZERO,
    };
    assert_eq!(timing.max_attempts(), 10);
}

#[test]
fn clamp_raises_below_min() {
    let c = TimingField::Timeout.clamp(499);
    assert_eq!(c, Clamp::Raised { from: 499, to: 500 });
    assert_eq!(c.value(), 500);
    assert_eq!(
        TimingField::Timeout.clamp_warning(&c).as_deref(),
        Some("timeout < 500 ms, new timeout = 500 ms")
    );
}

#[test]
fn clamp_raises_negative_values() {
    let c = TimingField::WaitingTime.clamp(-5);
    assert_eq!(c.value(), 200);
    assert!(c.is_adjusted());
}

#[test]
fn clamp_lowers_above_max() {
    let c = TimingField::SingleFetchTimeout.clamp(300_001);
    assert_eq!(c, Clamp::Lowered { from: 300_001, to: 300_000 });
    assert_eq!(
        TimingField::SingleFetchTimeout.clamp_warning(&c).as_deref(),
        Some("single-fetch-timeout > 300000 ms, new single-fetch-timeout = 300000 ms")
    );
}

#[test]
fn clamp_keeps_bounds_inclusive() {
    for field in TimingField::ALL {
        let b = field.bounds();
        assert_eq!(field.clamp(b.min as i64), Clamp::Within(b.min));
        assert_eq!(field.clamp(b.max as i64), Clamp::Within(b.max));
        assert!(field.clamp_warning(&Clamp::Within(b.min)).is_none());
    }
}

#[test]
fn defaults_are_within_bounds() {
    for field in TimingField::ALL {
        let d = field.default_ms();
        assert!(!field.clamp(d as i64).is_adjusted(), "{}", field.input_name());
    }
}
