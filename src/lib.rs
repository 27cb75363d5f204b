//! qrstyle renders QR module matrices into styled raster images.
//!
//! # Pipeline overview
//!
//! 1. **Encode**: payload + error-correction level -> [`ModuleMatrix`] (delegated to a
//!    [`SymbolEncoder`], by default the `qrcode` crate)
//! 2. **Render**: [`ModuleMatrix`] + [`RenderConfig`] -> [`Canvas`], painting each dark module
//!    as the configured [`ModuleStyle`] while finder patterns stay plain squares
//! 3. **Composite** (optional): center a logo over the canvas, capped at 22% of its smaller edge
//! 4. **Serialize** (optional): [`Canvas::to_png`]
//!
//! Every call is self-contained: no caches, no global state, no partial output on error.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod encode;
mod foundation;
mod matrix;
mod pipeline;
mod render;
mod style;

pub use crate::compose::logo::{
    LOGO_CANVAS_RATIO, LogoAsset, LogoPlacement, MAX_LOGO_SOURCE_EDGE, composite_logo,
    logo_placement, max_logo_edge,
};
pub use crate::encode::symbol::{ErrorCorrection, QrcodeEncoder, SymbolEncoder};
pub use crate::foundation::core::{BACKGROUND_RGBA, Canvas, FOREGROUND_RGBA, Point, Rect};
pub use crate::foundation::error::{QrStyleError, QrStyleResult};
pub use crate::matrix::finder::{FINDER_EDGE, in_finder_zone};
pub use crate::matrix::model::ModuleMatrix;
pub use crate::pipeline::payload::Payload;
pub use crate::pipeline::request::{
    MAX_PAYLOAD_CHARS, RenderRequest, generate, generate_png, validate_payload,
};
pub use crate::render::config::{
    MAX_MARGIN_MODULES, MAX_MODULE_SIZE, MIN_MODULE_SIZE, RenderConfig,
};
pub use crate::render::cpu::render;
pub use crate::style::kind::ModuleStyle;
pub use crate::style::shape::{Primitive, ShapeFn, finder_primitives, module_primitives};
