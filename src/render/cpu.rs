use crate::{
    foundation::core::{BACKGROUND_RGBA, Canvas, FOREGROUND_RGBA},
    foundation::error::{QrStyleError, QrStyleResult},
    matrix::model::ModuleMatrix,
    render::config::RenderConfig,
    style::shape::{Primitive, finder_primitives, module_primitives},
};

/// Coverage above which a pixel is painted; anything at or below stays background.
const ALIASING_THRESHOLD: u8 = 128;

/// Paint every dark module of `matrix` onto a fresh canvas.
///
/// The canvas is `(cols + 2*margin) * module_size` by `(rows + 2*margin) * module_size` pixels,
/// opaque white with opaque black modules. Finder-pattern cells are always full squares; all
/// other dark cells use the configured style. Rasterization runs on `vello_cpu` without
/// anti-aliasing, so every pixel is exactly [`BACKGROUND_RGBA`] or [`FOREGROUND_RGBA`].
#[tracing::instrument(
    skip(matrix, config),
    fields(rows = matrix.rows(), cols = matrix.cols(), style = %config.style())
)]
pub fn render(matrix: &ModuleMatrix, config: &RenderConfig) -> QrStyleResult<Canvas> {
    let (width, height) = config.canvas_size(matrix.rows(), matrix.cols())?;
    let width_u16: u16 = width.try_into().map_err(|_| {
        QrStyleError::invalid_parameter(format!("canvas width {width} exceeds {}", u16::MAX))
    })?;
    let height_u16: u16 = height.try_into().map_err(|_| {
        QrStyleError::invalid_parameter(format!("canvas height {height} exceeds {}", u16::MAX))
    })?;

    let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
    // Two-tone output: a pixel is either fully inked or left as background.
    ctx.set_aliasing_threshold(Some(ALIASING_THRESHOLD));
    ctx.set_paint(color_to_cpu(BACKGROUND_RGBA));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
    ));

    ctx.set_paint(color_to_cpu(FOREGROUND_RGBA));
    let style = config.style();
    let mut drawn = 0usize;
    for (row, col) in matrix.dark_modules() {
        let cell = config.cell_rect(row, col);
        // Finder cells never go through the style table.
        let primitives = if matrix.is_finder(row, col) {
            finder_primitives(cell)
        } else {
            module_primitives(style, cell)
        };
        for primitive in &primitives {
            fill_primitive(&mut ctx, primitive);
        }
        drawn += 1;
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
    ctx.render_to_pixmap(&mut pixmap);
    tracing::debug!(width, height, modules = drawn, "rendered module matrix");

    Canvas::from_rgba8(width, height, pixmap.data_as_u8_slice().to_vec())
}

fn fill_primitive(ctx: &mut vello_cpu::RenderContext, primitive: &Primitive) {
    match primitive {
        Primitive::Rect(r) => {
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1));
        }
        other => {
            let path = bezpath_to_cpu(&other.to_path());
            ctx.fill_path(&path);
        }
    }
}

fn color_to_cpu([r, g, b, a]: [u8; 4]) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
