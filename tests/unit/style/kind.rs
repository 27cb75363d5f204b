use super::*;

#[test]
fn names_round_trip_through_from_str() {
    for style in ModuleStyle::ALL {
        assert_eq!(style.as_str().parse::<ModuleStyle>().unwrap(), style);
        assert_eq!(style.to_string(), style.as_str());
    }
}

#[test]
fn unknown_style_is_invalid_parameter() {
    for name in ["triangle", "Square", "", " circle"] {
        assert!(matches!(
            name.parse::<ModuleStyle>(),
            Err(QrStyleError::InvalidParameter(_))
        ));
    }
}

#[test]
fn serde_uses_lowercase_names() {
    let s: ModuleStyle = serde_json::from_str("\"hexagon\"").unwrap();
    assert_eq!(s, ModuleStyle::Hexagon);
    assert_eq!(serde_json::to_string(&ModuleStyle::Rounded).unwrap(), "\"rounded\"");
    assert!(serde_json::from_str::<ModuleStyle>("\"triangle\"").is_err());
    assert_eq!(ModuleStyle::default(), ModuleStyle::Square);
}

#[test]
fn cli_choices_match_request_names() {
    use clap::ValueEnum as _;
    let names: Vec<String> = ModuleStyle::value_variants()
        .iter()
        .filter_map(|v| v.to_possible_value())
        .map(|p| p.get_name().to_string())
        .collect();
    let expected: Vec<String> = ModuleStyle::ALL.iter().map(|s| s.to_string()).collect();
    assert_eq!(names, expected);
}
