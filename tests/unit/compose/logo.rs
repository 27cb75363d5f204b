use super::*;

fn png_bytes(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn max_edge_is_22_percent_of_smaller_side() {
    assert_eq!(max_logo_edge(300, 300), 66);
    assert_eq!(max_logo_edge(250, 400), 55);
    assert_eq!(max_logo_edge(4, 4), 0);
}

#[test]
fn large_square_logo_is_scaled_and_centered() {
    assert_eq!(
        logo_placement(300, 300, 1000, 1000).unwrap(),
        LogoPlacement {
            x: 117,
            y: 117,
            width: 66,
            height: 66
        }
    );
}

#[test]
fn scaling_preserves_aspect_ratio() {
    let p = logo_placement(300, 300, 1000, 500).unwrap();
    assert_eq!((p.width, p.height), (66, 33));
    assert_eq!((p.x, p.y), (117, 133));

    let p = logo_placement(300, 300, 10, 1000).unwrap();
    assert_eq!((p.width, p.height), (1, 66));
}

#[test]
fn small_logo_is_never_upscaled() {
    let p = logo_placement(300, 300, 10, 20).unwrap();
    assert_eq!(
        p,
        LogoPlacement {
            x: 145,
            y: 140,
            width: 10,
            height: 20
        }
    );
}

#[test]
fn tiny_canvas_cannot_hold_a_logo() {
    assert!(matches!(
        logo_placement(4, 4, 1, 1),
        Err(QrStyleError::LogoProcessing(_))
    ));
}

#[test]
fn extension_check_is_case_insensitive() {
    for ok in ["logo.png", "LOGO.PNG", "a.b.jpg", "photo.JPEG"] {
        assert!(check_extension(ok).is_ok(), "{ok}");
    }
    for bad in ["logo.gif", "logo", "png", "logo.png.exe"] {
        assert!(
            matches!(check_extension(bad), Err(QrStyleError::InvalidLogo(_))),
            "{bad}"
        );
    }
}

#[test]
fn non_png_jpeg_content_is_invalid_logo() {
    let mut canvas = Canvas::filled(100, 100, [255, 255, 255, 255]).unwrap();
    let gif = b"GIF89a\x01\x00\x01\x00\x00\x00\x00;";
    assert!(matches!(
        composite_logo(&mut canvas, Some(LogoAsset::from_bytes(gif))),
        Err(QrStyleError::InvalidLogo(_))
    ));
    assert!(matches!(
        composite_logo(&mut canvas, Some(LogoAsset::from_bytes(b"not an image at all"))),
        Err(QrStyleError::InvalidLogo(_))
    ));
}

#[test]
fn declared_extension_is_checked_before_content() {
    let mut canvas = Canvas::filled(100, 100, [255, 255, 255, 255]).unwrap();
    let png = png_bytes(2, 2, [0, 0, 0, 255]);
    assert!(matches!(
        composite_logo(&mut canvas, Some(LogoAsset::with_filename(&png, "logo.bmp"))),
        Err(QrStyleError::InvalidLogo(_))
    ));
}

#[test]
fn truncated_png_is_a_processing_error() {
    let mut canvas = Canvas::filled(100, 100, [255, 255, 255, 255]).unwrap();
    let before = canvas.clone();
    let png = png_bytes(8, 8, [0, 0, 0, 255]);
    let truncated = &png[..png.len() / 2];
    let err = composite_logo(
        &mut canvas,
        Some(LogoAsset::with_filename(truncated, "logo.png")),
    )
    .unwrap_err();
    assert!(matches!(err, QrStyleError::LogoProcessing(_)), "{err}");
    assert_eq!(canvas, before);
}

#[test]
fn empty_bytes_are_a_noop() {
    let mut canvas = Canvas::filled(10, 10, [255, 255, 255, 255]).unwrap();
    let before = canvas.clone();
    composite_logo(&mut canvas, Some(LogoAsset::from_bytes(&[]))).unwrap();
    composite_logo(&mut canvas, None).unwrap();
    assert_eq!(canvas, before);
}

#[test]
fn transparent_pixels_leave_canvas_untouched() {
    let mut canvas = Canvas::filled(100, 100, [255, 255, 255, 255]).unwrap();
    let before = canvas.clone();
    let png = png_bytes(5, 5, [200, 10, 10, 0]);
    composite_logo(&mut canvas, Some(LogoAsset::from_bytes(&png))).unwrap();
    assert_eq!(canvas, before);
}
