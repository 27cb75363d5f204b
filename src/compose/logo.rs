//! Centered logo overlay.
//!
//! The logo is validated and fully prepared before the canvas is written, so a failure at any
//! step leaves the caller's canvas untouched. There is no scannability check after placement;
//! the footprint cap is the only guard.

use std::io::Cursor;

use crate::compose::blend::over_region_in_place;
use crate::foundation::core::Canvas;
use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Largest accepted logo edge, in pixels, before scaling.
pub const MAX_LOGO_SOURCE_EDGE: u32 = 2000;
/// Largest logo edge as a fraction of the smaller canvas edge.
pub const LOGO_CANVAS_RATIO: f64 = 0.22;
/// Accepted logo file name extensions (lowercase).
pub const LOGO_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// Caller-supplied logo image bytes with an optional declared file name.
#[derive(Clone, Copy, Debug)]
pub struct LogoAsset<'a> {
    /// Encoded image bytes (PNG or JPEG).
    pub bytes: &'a [u8],
    /// Declared file name; when present its extension must be `.png`, `.jpg` or `.jpeg`.
    pub filename: Option<&'a str>,
}

impl<'a> LogoAsset<'a> {
    /// Logo from raw bytes without a declared file name.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            filename: None,
        }
    }

    /// Logo from raw bytes with a declared file name.
    pub fn with_filename(bytes: &'a [u8], filename: &'a str) -> Self {
        Self {
            bytes,
            filename: Some(filename),
        }
    }
}

/// Size and top-left position of a scaled logo on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoPlacement {
    /// Left edge in canvas pixels.
    pub x: u32,
    /// Top edge in canvas pixels.
    pub y: u32,
    /// Scaled logo width in pixels.
    pub width: u32,
    /// Scaled logo height in pixels.
    pub height: u32,
}

/// Largest allowed logo edge for a canvas: `floor(0.22 * min(width, height))`.
pub fn max_logo_edge(canvas_width: u32, canvas_height: u32) -> u32 {
    (f64::from(canvas_width.min(canvas_height)) * LOGO_CANVAS_RATIO).floor() as u32
}

/// Scale `logo_w` x `logo_h` to fit within `max_edge` (never upscaling) and center it.
pub fn logo_placement(
    canvas_width: u32,
    canvas_height: u32,
    logo_w: u32,
    logo_h: u32,
) -> QrStyleResult<LogoPlacement> {
    let max_edge = max_logo_edge(canvas_width, canvas_height);
    if max_edge == 0 {
        return Err(QrStyleError::logo_processing(format!(
            "canvas {canvas_width}x{canvas_height} is too small to hold a logo"
        )));
    }
    if logo_w == 0 || logo_h == 0 {
        return Err(QrStyleError::logo_processing("logo has no pixels"));
    }

    let (width, height) = fit_within(logo_w, logo_h, max_edge);
    Ok(LogoPlacement {
        x: (canvas_width - width) / 2,
        y: (canvas_height - height) / 2,
        width,
        height,
    })
}

fn fit_within(w: u32, h: u32, max_edge: u32) -> (u32, u32) {
    if w <= max_edge && h <= max_edge {
        return (w, h);
    }
    let scaled = |edge: u32, long: u32| -> u32 {
        ((u64::from(edge) * u64::from(max_edge) + u64::from(long) / 2) / u64::from(long))
            .clamp(1, u64::from(max_edge)) as u32
    };
    if w >= h {
        (max_edge, scaled(h, w))
    } else {
        (scaled(w, h), max_edge)
    }
}

/// Overlay `logo` centered on `canvas`.
///
/// `None` or an empty byte slice is a no-op. Rejections:
/// - [`QrStyleError::InvalidLogo`]: extension or sniffed content is not PNG/JPEG;
/// - [`QrStyleError::LogoTooLarge`]: either edge exceeds [`MAX_LOGO_SOURCE_EDGE`];
/// - [`QrStyleError::LogoProcessing`]: decoding, scaling or placement failed.
#[tracing::instrument(skip(canvas, logo), fields(canvas_w = canvas.width(), canvas_h = canvas.height()))]
pub fn composite_logo(canvas: &mut Canvas, logo: Option<LogoAsset<'_>>) -> QrStyleResult<()> {
    let Some(logo) = logo.filter(|l| !l.bytes.is_empty()) else {
        tracing::debug!("no logo supplied");
        return Ok(());
    };

    let (premul, placement) = prepare_logo(logo, canvas.width(), canvas.height())?;
    let (canvas_w, canvas_h) = (canvas.width(), canvas.height());
    over_region_in_place(
        canvas.data_mut(),
        canvas_w,
        canvas_h,
        &premul,
        placement.width,
        placement.height,
        (placement.x, placement.y),
    )?;
    tracing::debug!(
        x = placement.x,
        y = placement.y,
        width = placement.width,
        height = placement.height,
        "composited logo"
    );
    Ok(())
}

/// Decode, scale and premultiply a logo for `canvas_w` x `canvas_h`.
fn prepare_logo(
    logo: LogoAsset<'_>,
    canvas_w: u32,
    canvas_h: u32,
) -> QrStyleResult<(Vec<u8>, LogoPlacement)> {
    if let Some(name) = logo.filename {
        check_extension(name)?;
    }

    let format = image::guess_format(logo.bytes)
        .map_err(|e| QrStyleError::invalid_logo(format!("unrecognized image data: {e}")))?;
    if !matches!(format, image::ImageFormat::Png | image::ImageFormat::Jpeg) {
        return Err(QrStyleError::invalid_logo(format!(
            "logo must be a PNG or JPEG image, got {format:?}"
        )));
    }

    let (src_w, src_h) = image::ImageReader::with_format(Cursor::new(logo.bytes), format)
        .into_dimensions()
        .map_err(|e| QrStyleError::logo_processing(e.to_string()))?;
    if src_w > MAX_LOGO_SOURCE_EDGE || src_h > MAX_LOGO_SOURCE_EDGE {
        return Err(QrStyleError::LogoTooLarge {
            width: src_w,
            height: src_h,
            max: MAX_LOGO_SOURCE_EDGE,
        });
    }

    let decoded = image::load_from_memory_with_format(logo.bytes, format)
        .map_err(|e| QrStyleError::logo_processing(e.to_string()))?
        .to_rgba8();
    let (w, h) = decoded.dimensions();
    let placement = logo_placement(canvas_w, canvas_h, w, h)?;

    let scaled = if (placement.width, placement.height) == (w, h) {
        decoded
    } else {
        tracing::debug!(
            from_w = w,
            from_h = h,
            to_w = placement.width,
            to_h = placement.height,
            "downscaling logo"
        );
        image::imageops::resize(
            &decoded,
            placement.width,
            placement.height,
            image::imageops::FilterType::Lanczos3,
        )
    };

    let mut premul = scaled.into_raw();
    premultiply_rgba8_in_place(&mut premul);
    Ok((premul, placement))
}

fn check_extension(name: &str) -> QrStyleResult<()> {
    let lower = name.to_ascii_lowercase();
    if LOGO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        Ok(())
    } else {
        Err(QrStyleError::invalid_logo(format!(
            "logo '{name}' must be a PNG or JPG file"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/logo.rs"]
mod tests;
