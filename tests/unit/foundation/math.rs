use super::*;

#[test]
fn clamp01_handles_nan_and_range() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-3.0), 0.0);
    assert_eq!(clamp01(3.0), 1.0);
    assert_eq!(clamp01(0.25), 0.25);
}

#[test]
fn approach_without_lag_is_immediate() {
    assert_eq!(approach(0.0, 0.7, 0.016, 0.0), 0.7);
}

#[test]
fn approach_never_overshoots_and_settles() {
    let mut v = 0.0;
    for _ in 0..2_000 {
        let next = approach(v, 1.0, 1.0 / 60.0, 1.0);
        assert!(next >= v);
        assert!(next <= 1.0);
        v = next;
    }
    assert_eq!(v, 1.0);
}
