use super::*;

#[test]
fn bounds_are_inclusive() {
    assert!(RenderConfig::new(1, 0, ModuleStyle::Square).is_ok());
    assert!(RenderConfig::new(50, 20, ModuleStyle::Heart).is_ok());
}

#[test]
fn out_of_range_values_are_invalid_parameters() {
    for (size, margin) in [(0, 4), (51, 4), (10, -1), (10, 21), (-3, 0), (i64::MAX, 0)] {
        assert!(
            matches!(
                RenderConfig::new(size, margin, ModuleStyle::Square),
                Err(QrStyleError::InvalidParameter(_))
            ),
            "size={size} margin={margin}"
        );
    }
}

#[test]
fn parse_rejects_unknown_style() {
    assert!(matches!(
        RenderConfig::parse(10, 4, "triangle"),
        Err(QrStyleError::InvalidParameter(_))
    ));
    assert_eq!(
        RenderConfig::parse(10, 4, "star").unwrap().style(),
        ModuleStyle::Star
    );
}

#[test]
fn default_matches_form_defaults() {
    let c = RenderConfig::default();
    assert_eq!(
        (c.module_size(), c.margin_modules(), c.style()),
        (10, 4, ModuleStyle::Square)
    );
}

#[test]
fn canvas_size_includes_margin_on_both_sides() {
    let c = RenderConfig::new(10, 2, ModuleStyle::Circle).unwrap();
    assert_eq!(c.canvas_size(21, 21).unwrap(), (250, 250));
    assert_eq!(c.canvas_size(21, 25).unwrap(), (290, 250));
}

#[test]
fn cell_rect_is_offset_by_margin() {
    let c = RenderConfig::new(10, 2, ModuleStyle::Square).unwrap();
    assert_eq!(c.cell_rect(0, 0), Rect::new(20.0, 20.0, 30.0, 30.0));
    assert_eq!(c.cell_rect(3, 5), Rect::new(70.0, 50.0, 80.0, 60.0));
}
