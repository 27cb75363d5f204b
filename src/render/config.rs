use crate::foundation::core::Rect;
use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::style::kind::ModuleStyle;

/// Smallest accepted module size in pixels.
pub const MIN_MODULE_SIZE: u32 = 1;
/// Largest accepted module size in pixels.
pub const MAX_MODULE_SIZE: u32 = 50;
/// Largest accepted quiet-zone width in modules.
pub const MAX_MARGIN_MODULES: u32 = 20;

/// Validated rendering parameters.
///
/// Only constructed through [`RenderConfig::new`], so every instance is within range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    module_size: u32,
    margin_modules: u32,
    style: ModuleStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            module_size: 10,
            margin_modules: 4,
            style: ModuleStyle::Square,
        }
    }
}

impl RenderConfig {
    /// Validate raw parameters: `1 <= module_size <= 50` and `0 <= margin_modules <= 20`.
    pub fn new(module_size: i64, margin_modules: i64, style: ModuleStyle) -> QrStyleResult<Self> {
        if !(i64::from(MIN_MODULE_SIZE)..=i64::from(MAX_MODULE_SIZE)).contains(&module_size) {
            return Err(QrStyleError::invalid_parameter(format!(
                "module size must be between {MIN_MODULE_SIZE} and {MAX_MODULE_SIZE}, got {module_size}"
            )));
        }
        if !(0..=i64::from(MAX_MARGIN_MODULES)).contains(&margin_modules) {
            return Err(QrStyleError::invalid_parameter(format!(
                "margin must be between 0 and {MAX_MARGIN_MODULES}, got {margin_modules}"
            )));
        }
        Ok(Self {
            module_size: module_size as u32,
            margin_modules: margin_modules as u32,
            style,
        })
    }

    /// Like [`RenderConfig::new`], parsing the style from its lowercase name.
    pub fn parse(module_size: i64, margin_modules: i64, style: &str) -> QrStyleResult<Self> {
        let style = style.parse::<ModuleStyle>()?;
        Self::new(module_size, margin_modules, style)
    }

    /// Pixels per module edge.
    pub fn module_size(&self) -> u32 {
        self.module_size
    }

    /// Quiet-zone width in modules.
    pub fn margin_modules(&self) -> u32 {
        self.margin_modules
    }

    /// Shape used for non-finder modules.
    pub fn style(&self) -> ModuleStyle {
        self.style
    }

    /// Canvas size in pixels for a `rows` x `cols` matrix.
    pub fn canvas_size(&self, rows: usize, cols: usize) -> QrStyleResult<(u32, u32)> {
        let side = |modules: usize| -> Option<u32> {
            let modules = u32::try_from(modules).ok()?;
            modules
                .checked_add(2 * self.margin_modules)?
                .checked_mul(self.module_size)
        };
        match (side(cols), side(rows)) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => Err(QrStyleError::invalid_parameter(format!(
                "canvas for a {rows}x{cols} matrix overflows"
            ))),
        }
    }

    /// Pixel bounding box of the module at `(row, col)`.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let size = f64::from(self.module_size);
        let margin = f64::from(self.margin_modules);
        let x0 = (col as f64 + margin) * size;
        let y0 = (row as f64 + margin) * size;
        Rect::new(x0, y0, x0 + size, y0 + size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/config.rs"]
mod tests;
