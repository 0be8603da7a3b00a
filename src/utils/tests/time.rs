use crate::utils::current_time_millis;

#[test]
fn test_current_time_millis_is_recent() {
    // Any plausible wall clock is far past 2020-01-01.
    let now = current_time_millis();
    assert!(now > 1_577_836_800_000, "clock reads {now}");
}

#[test]
fn test_current_time_millis_is_monotonic_enough() {
    let first = current_time_millis();
    let second = current_time_millis();
    assert!(second >= first);
}
