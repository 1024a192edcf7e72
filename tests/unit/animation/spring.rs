use super::*;

fn peak(curve: SpringCurve) -> f64 {
    (0..=1000)
        .map(|i| curve.sample(f64::from(i) / 1000.0))
        .fold(f64::MIN, f64::max)
}

#[test]
fn endpoints_are_exact() {
    for curve in [
        SpringCurve::default(),
        SpringCurve::new(1.0, 0.0).unwrap(),
        SpringCurve::new(2.5, 3.0).unwrap(),
    ] {
        assert_eq!(curve.sample(0.0), 0.0);
        assert_eq!(curve.sample(-0.5), 0.0);
        assert_eq!(curve.sample(f64::NAN), 0.0);
        assert_eq!(curve.sample(1.0), 1.0);
        assert_eq!(curve.sample(4.0), 1.0);
    }
}

#[test]
fn default_spring_overshoots_only_slightly() {
    let p = peak(SpringCurve::default());
    assert!(p > 1.001, "expected a small settle overshoot, got {p}");
    assert!(p < 1.02, "overshoot too large: {p}");
}

#[test]
fn critically_damped_and_overdamped_never_overshoot_from_rest() {
    for zeta in [1.0, 1.5, 4.0] {
        let curve = SpringCurve::new(zeta, 0.0).unwrap();
        let p = peak(curve);
        assert!(p <= 1.0 + 1e-12, "zeta {zeta} peaked at {p}");
    }
}

#[test]
fn curve_is_nearly_settled_before_the_end() {
    let curve = SpringCurve::default();
    let v = curve.sample(0.999);
    assert!((v - 1.0).abs() < 0.01, "{v}");
}

#[test]
fn initial_velocity_pushes_early_progress() {
    let slow = SpringCurve::new(0.85, 0.0).unwrap();
    let fast = SpringCurve::new(0.85, 5.0).unwrap();
    assert!(fast.sample(0.05) > slow.sample(0.05));
    assert!(slow.sample(0.05) > 0.0);
}

#[test]
fn invalid_parameters_are_rejected() {
    assert!(SpringCurve::new(0.0, 0.8).is_err());
    assert!(SpringCurve::new(-1.0, 0.8).is_err());
    assert!(SpringCurve::new(f64::INFINITY, 0.8).is_err());
    assert!(SpringCurve::new(0.85, f64::NAN).is_err());
}

#[test]
fn natural_frequency_decays_envelope_by_the_end() {
    let curve = SpringCurve::default();
    let envelope = (-curve.damping_ratio * curve.natural_frequency()).exp();
    assert!((envelope - SETTLE_EPSILON).abs() < 1e-9);
}
