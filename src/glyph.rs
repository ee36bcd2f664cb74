//! The bird glyph.
//!
//! Geometry is authored on a 100×100 design grid and scaled by `size / 100`
//! at render time. Every scaled coordinate is truncated toward zero; stroke
//! widths are rounded and never drop below one pixel.

use image::Rgba;

use crate::backend::DrawingBackend;
use crate::canvas::{BLACK, Canvas, WHITE};
use crate::error::IconError;
use crate::geometry::{BoxPx, PointPx};

/// Side length of the design grid.
pub const DESIGN_GRID: f64 = 100.0;

// ============================================================================
// Design-grid constants
// ============================================================================

/// Body ellipse bounds: `(left, top, right, bottom)`.
pub const BODY: (f64, f64, f64, f64) = (20.0, 30.0, 60.0, 55.0);

/// Head circle bounds.
pub const HEAD: (f64, f64, f64, f64) = (15.0, 25.0, 27.0, 37.0);

/// Beak triangle vertices.
pub const BEAK: [(f64, f64); 3] = [(10.0, 32.0), (5.0, 30.0), (10.0, 28.0)];

/// Top-left corner of the eye.
pub const EYE: (f64, f64) = (18.0, 28.0);

/// Top tail stroke; the other two sit below it.
pub const TAIL: ((f64, f64), (f64, f64)) = ((60.0, 42.0), (80.0, 42.0));

/// Vertical gap between tail strokes.
pub const TAIL_SPACING: f64 = 3.0;

/// Number of tail strokes.
pub const TAIL_STROKES: u32 = 3;

/// Leg segments.
pub const LEGS: [((f64, f64), (f64, f64)); 2] = [
    ((35.0, 55.0), (35.0, 70.0)),
    ((45.0, 55.0), (45.0, 70.0)),
];

/// Stroke width on the design grid.
pub const DESIGN_STROKE: f64 = 2.0;

// ============================================================================
// Scaling
// ============================================================================

/// Returns the design-grid to pixel factor for an icon of `size` pixels.
pub fn scale_factor(size: u32) -> f64 {
    size as f64 / DESIGN_GRID
}

/// Scales a design coordinate and truncates it to a pixel.
pub fn scale_coord(value: f64, scale: f64) -> i32 {
    (value * scale).trunc() as i32
}

/// Stroke width in pixels for an icon of `size` pixels.
pub fn stroke_width(size: u32) -> u32 {
    ((DESIGN_STROKE * scale_factor(size)).round() as u32).max(1)
}

/// Extent of the eye's bounding box in pixels.
pub fn eye_diameter(size: u32) -> u32 {
    stroke_width(size)
}

fn scale_point((x, y): (f64, f64), scale: f64) -> PointPx {
    PointPx::new(scale_coord(x, scale), scale_coord(y, scale))
}

fn scale_box((left, top, right, bottom): (f64, f64, f64, f64), scale: f64) -> BoxPx {
    BoxPx::new(scale_point((left, top), scale), scale_point((right, bottom), scale))
}

// ============================================================================
// Glyph
// ============================================================================

/// A single resolved primitive in pixel space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Ellipse outline inscribed in a box.
    Ellipse(BoxPx),
    /// Closed polygon outline.
    Polygon(Vec<PointPx>),
    /// Straight segment.
    Line(PointPx, PointPx),
    /// Solid ellipse inscribed in a box.
    FilledEllipse(BoxPx),
}

/// The bird resolved for one icon size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub size: u32,
    pub background: Rgba<u8>,
    pub color: Rgba<u8>,
    pub stroke_width: u32,
    /// Shapes in draw order.
    pub shapes: Vec<Shape>,
}

impl Glyph {
    /// Resolves the design-grid geometry for an icon of `size` pixels.
    pub fn at_size(size: u32) -> Self {
        let scale = scale_factor(size);
        let mut shapes = Vec::with_capacity(9);

        shapes.push(Shape::Ellipse(scale_box(BODY, scale)));
        shapes.push(Shape::Ellipse(scale_box(HEAD, scale)));
        shapes.push(Shape::Polygon(
            BEAK.iter().map(|&p| scale_point(p, scale)).collect(),
        ));

        let eye = scale_point(EYE, scale);
        let d = eye_diameter(size) as i32;
        shapes.push(Shape::FilledEllipse(BoxPx::from_ltrb(eye.x, eye.y, eye.x + d, eye.y + d)));

        let (tail_from, tail_to) = (scale_point(TAIL.0, scale), scale_point(TAIL.1, scale));
        for i in 0..TAIL_STROKES {
            let dy = scale_coord(i as f64 * TAIL_SPACING, scale);
            shapes.push(Shape::Line(tail_from.offset_y(dy), tail_to.offset_y(dy)));
        }

        for (top, bottom) in LEGS {
            shapes.push(Shape::Line(scale_point(top, scale), scale_point(bottom, scale)));
        }

        Self {
            size,
            background: WHITE,
            color: BLACK,
            stroke_width: stroke_width(size),
            shapes,
        }
    }

    /// Draws every shape onto `canvas` in order.
    pub fn draw(&self, backend: &dyn DrawingBackend, canvas: &mut Canvas) {
        for shape in &self.shapes {
            log::trace!("size {}: drawing {:?}", self.size, shape);
            match shape {
                Shape::Ellipse(bounds) => {
                    backend.draw_ellipse(canvas, *bounds, self.color, self.stroke_width)
                }
                Shape::Polygon(points) => {
                    backend.draw_polygon(canvas, points, self.color, self.stroke_width)
                }
                Shape::Line(from, to) => {
                    backend.draw_line(canvas, *from, *to, self.color, self.stroke_width)
                }
                Shape::FilledEllipse(bounds) => backend.fill_ellipse(canvas, *bounds, self.color),
            }
        }
    }
}

/// Renders the bird onto a fresh `size × size` canvas.
///
/// Returns `Ok(None)` when the backend is unavailable, which is the signal
/// to fall back to a placeholder. A size the backend cannot allocate is an
/// error, checked before any geometry is resolved.
pub fn render_glyph(backend: &dyn DrawingBackend, size: u32) -> Result<Option<Canvas>, IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize { size });
    }
    let Some(mut canvas) = backend.new_canvas(size, size, WHITE)? else {
        return Ok(None);
    };
    Glyph::at_size(size).draw(backend, &mut canvas);
    Ok(Some(canvas))
}

// ============================================================================
// Tests
// ============================================================================
