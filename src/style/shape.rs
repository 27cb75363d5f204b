//! Module geometry: one shape function per [`ModuleStyle`].
//!
//! Every shape function receives the module's pixel bounding box and returns the filled
//! primitives that make up the module. All primitives stay inside the bounding box.

use std::f64::consts::PI;

use kurbo::{BezPath, Ellipse, Point, Rect, RoundedRect, Shape};

use crate::style::kind::ModuleStyle;

/// Flattening tolerance, in pixels, used when converting curves to paths.
pub const PATH_TOLERANCE: f64 = 0.05;

/// Corner radius of [`ModuleStyle::Rounded`] as a fraction of the module size.
pub const ROUNDED_RADIUS_RATIO: f64 = 0.25;
/// Outer star radius as a fraction of the module size.
pub const STAR_OUTER_RATIO: f64 = 0.48;
/// Inner star radius as a fraction of the outer radius.
pub const STAR_INNER_RATIO: f64 = 0.45;
/// Number of star points.
pub const STAR_POINTS: usize = 5;
/// Hexagon circumradius as a fraction of the module size.
pub const HEXAGON_RADIUS_RATIO: f64 = 0.5;
/// Heart lobe width as a fraction of the module size.
pub const HEART_LOBE_RATIO: f64 = 0.4;

/// A filled drawing primitive in canvas pixel space.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Axis-aligned rectangle with rounded corners.
    RoundedRect(RoundedRect),
    /// Axis-aligned ellipse.
    Ellipse(Ellipse),
    /// Closed polygon through the given vertices.
    Polygon(Vec<Point>),
}

impl Primitive {
    /// Outline of the primitive as a closed path.
    pub fn to_path(&self) -> BezPath {
        match self {
            Primitive::Rect(r) => r.to_path(PATH_TOLERANCE),
            Primitive::RoundedRect(r) => r.to_path(PATH_TOLERANCE),
            Primitive::Ellipse(e) => e.to_path(PATH_TOLERANCE),
            Primitive::Polygon(points) => polygon_path(points),
        }
    }

    /// Smallest axis-aligned rectangle containing the primitive.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Primitive::Rect(r) => *r,
            Primitive::RoundedRect(r) => r.rect(),
            Primitive::Ellipse(e) => e.bounding_box(),
            Primitive::Polygon(points) => polygon_path(points).bounding_box(),
        }
    }
}

/// Uniform signature of the per-style shape functions.
pub type ShapeFn = fn(Rect) -> Vec<Primitive>;

impl ModuleStyle {
    /// Shape function drawing a module in this style.
    pub fn shape_fn(self) -> ShapeFn {
        match self {
            ModuleStyle::Square => square,
            ModuleStyle::Rounded => rounded,
            ModuleStyle::Circle => circle,
            ModuleStyle::Star => star,
            ModuleStyle::Diamond => diamond,
            ModuleStyle::Heart => heart,
            ModuleStyle::Hexagon => hexagon,
        }
    }
}

/// Primitives for one module cell drawn in `style`.
pub fn module_primitives(style: ModuleStyle, cell: Rect) -> Vec<Primitive> {
    (style.shape_fn())(cell)
}

/// Primitives for a finder-pattern cell: always the full square.
pub fn finder_primitives(cell: Rect) -> Vec<Primitive> {
    square(cell)
}

fn square(cell: Rect) -> Vec<Primitive> {
    vec![Primitive::Rect(cell)]
}

fn rounded(cell: Rect) -> Vec<Primitive> {
    let radius = (cell.width() * ROUNDED_RADIUS_RATIO).floor();
    if radius <= 0.0 {
        tracing::debug!(
            module_size = cell.width(),
            "rounded corner radius is zero; drawing a square module"
        );
        return vec![Primitive::Rect(cell)];
    }
    vec![Primitive::RoundedRect(RoundedRect::from_rect(cell, radius))]
}

fn circle(cell: Rect) -> Vec<Primitive> {
    vec![Primitive::Ellipse(Ellipse::from_rect(cell))]
}

fn diamond(cell: Rect) -> Vec<Primitive> {
    let c = cell.center();
    vec![Primitive::Polygon(vec![
        Point::new(c.x, cell.y0),
        Point::new(cell.x1, c.y),
        Point::new(c.x, cell.y1),
        Point::new(cell.x0, c.y),
    ])]
}

fn star(cell: Rect) -> Vec<Primitive> {
    let outer = cell.width() * STAR_OUTER_RATIO;
    let inner = outer * STAR_INNER_RATIO;
    vec![Primitive::Polygon(star_points(
        cell.center(),
        outer,
        inner,
        STAR_POINTS,
    ))]
}

/// Vertices of a star alternating between `outer` and `inner` radius.
///
/// Angles are counter-clockwise from the positive x axis; y grows downward.
pub fn star_points(center: Point, outer: f64, inner: f64, points: usize) -> Vec<Point> {
    (0..points * 2)
        .map(|i| {
            let angle = PI * (i as f64) / (points as f64);
            let r = if i % 2 == 0 { outer } else { inner };
            Point::new(center.x + angle.cos() * r, center.y - angle.sin() * r)
        })
        .collect()
}

fn hexagon(cell: Rect) -> Vec<Primitive> {
    let c = cell.center();
    let r = cell.width() * HEXAGON_RADIUS_RATIO;
    let points = (0..6)
        .map(|i| {
            let angle = (i as f64) * PI / 3.0;
            Point::new(c.x + r * angle.cos(), c.y + r * angle.sin())
        })
        .collect();
    vec![Primitive::Polygon(points)]
}

fn heart(cell: Rect) -> Vec<Primitive> {
    let c = cell.center();
    let lobe = cell.width() * HEART_LOBE_RATIO;
    vec![
        Primitive::Ellipse(Ellipse::from_rect(Rect::new(c.x - lobe, cell.y0, c.x, c.y))),
        Primitive::Ellipse(Ellipse::from_rect(Rect::new(c.x, cell.y0, c.x + lobe, c.y))),
        Primitive::Polygon(vec![
            Point::new(c.x - lobe, c.y - lobe / 2.0),
            Point::new(c.x + lobe, c.y - lobe / 2.0),
            Point::new(c.x, cell.y1),
        ]),
    ]
}

fn polygon_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/style/shape.rs"]
mod tests;
