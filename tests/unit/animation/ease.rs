use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_fixed_and_input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        assert_eq!(ease.apply(-3.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(7.0), 1.0, "{ease:?}");
    }
}

#[test]
fn out_quad_decelerates() {
    assert!(Ease::OutQuad.apply(0.5) > 0.5);
    assert_eq!(Ease::OutQuad.apply(0.5), 0.75);
    assert_eq!(Ease::default(), Ease::OutQuad);
}

#[test]
fn parse_accepts_aliases() {
    assert_eq!(Ease::parse("linear").unwrap(), Ease::Linear);
    assert_eq!(Ease::parse(" Ease-Out ").unwrap(), Ease::OutQuad);
    assert_eq!(Ease::parse("in_out_cubic").unwrap(), Ease::InOutCubic);
    assert!(Ease::parse("").is_err());
    assert!(Ease::parse("bouncy").is_err());
}

#[test]
fn serde_uses_snake_case() {
    let s = serde_json::to_string(&Ease::InOutQuad).unwrap();
    assert_eq!(s, "\"in_out_quad\"");
    let back: Ease = serde_json::from_str("\"out_cubic\"").unwrap();
    assert_eq!(back, Ease::OutCubic);
}
