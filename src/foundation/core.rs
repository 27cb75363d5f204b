use std::io::Cursor;

use anyhow::Context;

use crate::foundation::error::{QrStyleError, QrStyleResult};

pub use kurbo::{Point, Rect};

/// Opaque white, the canvas background.
pub const BACKGROUND_RGBA: [u8; 4] = [255, 255, 255, 255];
/// Opaque black, the module foreground.
pub const FOREGROUND_RGBA: [u8; 4] = [0, 0, 0, 255];

/// A rendered QR image as straight-alpha RGBA8 pixels.
///
/// Created once per render, mutated by the renderer and then the logo compositor, and finally
/// handed to the caller. The renderer only ever produces opaque pixels; canvases built with
/// [`Canvas::filled`] or [`Canvas::from_rgba8`] may carry any alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Create a canvas with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> QrStyleResult<Self> {
        let len = byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / 4 {
            data.extend_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap tightly packed, row-major RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> QrStyleResult<Self> {
        if data.len() != byte_len(width, height)? {
            return Err(QrStyleError::invalid_parameter(
                "canvas byte length must equal width*height*4",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA8 bytes, tightly packed, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Copy the pixels into an [`image::RgbaImage`] for use with other codecs.
    pub fn to_rgba_image(&self) -> QrStyleResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            QrStyleError::Other(anyhow::anyhow!(
                "canvas buffer does not match {}x{}",
                self.width,
                self.height
            ))
        })
    }

    /// Encode the canvas as PNG bytes.
    pub fn to_png(&self) -> QrStyleResult<Vec<u8>> {
        let mut buf = Vec::new();
        image::write_buffer_with_format(
            &mut Cursor::new(&mut buf),
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .context("encode canvas as png")?;
        Ok(buf)
    }
}

fn byte_len(width: u32, height: u32) -> QrStyleResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| QrStyleError::invalid_parameter("canvas size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
