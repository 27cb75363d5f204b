use super::*;
use crate::style::kind::ModuleStyle;

#[test]
fn bezpath_conversion_keeps_every_element() {
    let prim = Primitive::Ellipse(kurbo::Ellipse::from_rect(kurbo::Rect::new(
        0.0, 0.0, 10.0, 10.0,
    )));
    let src = prim.to_path();
    let out = bezpath_to_cpu(&src);
    assert_eq!(out.elements().len(), src.elements().len());
}

#[test]
fn single_dark_module_without_margin_fills_canvas() {
    let m = ModuleMatrix::from_rows(vec![vec![true]]).unwrap();
    let cfg = RenderConfig::new(4, 0, ModuleStyle::Circle).unwrap();
    // A 1x1 matrix is entirely finder zone, so even circle draws a full square.
    let canvas = render(&m, &cfg).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (4, 4));
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(canvas.pixel(x, y), Some(FOREGROUND_RGBA));
        }
    }
}

#[test]
fn light_matrix_renders_plain_background() {
    let m = ModuleMatrix::from_fn(3, 5, |_, _| false).unwrap();
    let cfg = RenderConfig::new(2, 1, ModuleStyle::Star).unwrap();
    let canvas = render(&m, &cfg).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (14, 10));
    assert!(
        canvas
            .data()
            .chunks_exact(4)
            .all(|px| px == BACKGROUND_RGBA)
    );
}

#[test]
fn oversized_canvas_is_rejected_before_drawing() {
    let m = ModuleMatrix::from_fn(1, 1400, |_, _| true).unwrap();
    let cfg = RenderConfig::new(50, 0, ModuleStyle::Square).unwrap();
    assert!(matches!(
        render(&m, &cfg),
        Err(QrStyleError::InvalidParameter(_))
    ));
}

#[test]
fn every_style_renders_only_two_colors() {
    let m = ModuleMatrix::from_fn(21, 21, |r, c| r == 10 && c == 12).unwrap();
    for style in ModuleStyle::ALL {
        for size in [1, 3, 10, 17] {
            let cfg = RenderConfig::new(size, 0, style).unwrap();
            let canvas = render(&m, &cfg).unwrap();
            let stray = canvas
                .data()
                .chunks_exact(4)
                .filter(|px| *px != BACKGROUND_RGBA && *px != FOREGROUND_RGBA)
                .count();
            assert_eq!(stray, 0, "{style} at size {size} has {stray} grey pixels");
        }
    }
}
