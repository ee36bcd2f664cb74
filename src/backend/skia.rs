//! tiny-skia rasteriser backend.

use std::path::Path;

use image::{ImageError, ImageFormat, Rgba};
use resvg::tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, PixmapMut, Rect, Stroke, Transform,
};

use super::DrawingBackend;
use crate::canvas::Canvas;
use crate::error::IconError;
use crate::geometry::{BoxPx, PointPx};

/// Draws with tiny-skia and encodes with the `image` PNG encoder.
///
/// Pixel `(x, y)` covers the unit square from `(x, y)` to `(x + 1, y + 1)`,
/// so lines run through pixel centres and ellipse outlines stay inside their
/// inclusive bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SkiaBackend {
    anti_alias: bool,
}

impl Default for SkiaBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaBackend {
    /// Creates an anti-aliased backend.
    pub fn new() -> Self {
        Self { anti_alias: true }
    }

    /// Creates a backend that snaps every edge to whole pixels.
    pub fn aliased() -> Self {
        Self { anti_alias: false }
    }

    fn paint(&self, color: Rgba<u8>) -> Paint<'static> {
        let [r, g, b, a] = color.0;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = self.anti_alias;
        paint
    }

    fn stroke(width: u32, cap: LineCap) -> Stroke {
        Stroke {
            width: width.max(1) as f32,
            line_cap: cap,
            line_join: LineJoin::Round,
            ..Stroke::default()
        }
    }
}

/// Borrows the canvas as a tiny-skia pixmap. Fails only for zero-sized canvases.
fn borrow_pixmap(canvas: &mut Canvas) -> Option<PixmapMut<'_>> {
    let (width, height) = (canvas.width(), canvas.height());
    PixmapMut::from_bytes(canvas.premultiplied_bytes_mut(), width, height)
}

fn centre(point: PointPx) -> (f32, f32) {
    (point.x as f32 + 0.5, point.y as f32 + 0.5)
}

/// The area covered by an inclusive pixel box, shrunk by `inset` on each side.
fn box_rect(bounds: BoxPx, inset: f32) -> Option<Rect> {
    Rect::from_ltrb(
        bounds.min.x as f32 + inset,
        bounds.min.y as f32 + inset,
        (bounds.max.x + 1) as f32 - inset,
        (bounds.max.y + 1) as f32 - inset,
    )
}

impl DrawingBackend for SkiaBackend {
    fn name(&self) -> &'static str {
        "tiny-skia"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn new_canvas(
        &self,
        width: u32,
        height: u32,
        background: Rgba<u8>,
    ) -> Result<Option<Canvas>, IconError> {
        Canvas::filled(width, height, background).map(Some)
    }

    fn draw_ellipse(&self, canvas: &mut Canvas, bounds: BoxPx, stroke: Rgba<u8>, width: u32) {
        let width = width.max(1);
        // Too small to outline without the stroke crossing itself.
        if bounds.width().min(bounds.height()) <= width as i32 {
            self.fill_ellipse(canvas, bounds, stroke);
            return;
        }
        let Some(rect) = box_rect(bounds, width as f32 / 2.0) else {
            return;
        };
        let Some(path) = PathBuilder::from_oval(rect) else {
            return;
        };
        let Some(mut pixmap) = borrow_pixmap(canvas) else {
            return;
        };
        pixmap.stroke_path(
            &path,
            &self.paint(stroke),
            &Self::stroke(width, LineCap::Butt),
            Transform::identity(),
            None,
        );
    }

    fn draw_polygon(&self, canvas: &mut Canvas, points: &[PointPx], stroke: Rgba<u8>, width: u32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        let (x, y) = centre(*first);
        pb.move_to(x, y);
        for point in rest {
            let (x, y) = centre(*point);
            pb.line_to(x, y);
        }
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };
        let Some(mut pixmap) = borrow_pixmap(canvas) else {
            return;
        };
        pixmap.stroke_path(
            &path,
            &self.paint(stroke),
            &Self::stroke(width, LineCap::Butt),
            Transform::identity(),
            None,
        );
    }

    fn draw_line(&self, canvas: &mut Canvas, from: PointPx, to: PointPx, color: Rgba<u8>, width: u32) {
        let mut pb = PathBuilder::new();
        let (x0, y0) = centre(from);
        let (x1, y1) = centre(to);
        pb.move_to(x0, y0);
        pb.line_to(x1, y1);
        let Some(path) = pb.finish() else {
            return;
        };
        let Some(mut pixmap) = borrow_pixmap(canvas) else {
            return;
        };
        // Square caps so both end pixels are covered.
        pixmap.stroke_path(
            &path,
            &self.paint(color),
            &Self::stroke(width, LineCap::Square),
            Transform::identity(),
            None,
        );
    }

    fn fill_ellipse(&self, canvas: &mut Canvas, bounds: BoxPx, color: Rgba<u8>) {
        let Some(path) = box_rect(bounds, 0.0).and_then(PathBuilder::from_oval) else {
            return;
        };
        let Some(mut pixmap) = borrow_pixmap(canvas) else {
            return;
        };
        pixmap.fill_path(
            &path,
            &self.paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn save(&self, canvas: &Canvas, path: &Path) -> Result<(), IconError> {
        canvas
            .to_rgba_image()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| match e {
                ImageError::IoError(source) => IconError::Write {
                    path: path.to_path_buf(),
                    source,
                },
                source => IconError::Encode {
                    path: path.to_path_buf(),
                    source,
                },
            })?;
        log::debug!("encoded {}x{} PNG to {}", canvas.width(), canvas.height(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{BLACK, WHITE};

    fn is_dark(canvas: &Canvas, x: u32, y: u32) -> bool {
        canvas.pixel(x, y).map(|p| p.0[0] < 64).unwrap_or(false)
    }

    #[test]
    fn unusable_canvas_sizes_are_refused() {
        let backend = SkiaBackend::new();
        for (w, h) in [(0, 16), (u32::MAX, u32::MAX), (crate::canvas::MAX_CANVAS_SIDE + 1, 1)] {
            let err = backend.new_canvas(w, h, WHITE).unwrap_err();
            assert!(matches!(err, IconError::CanvasAllocation { width, height } if (width, height) == (w, h)));
        }
    }

    #[test]
    fn tiny_ellipse_is_filled_instead_of_outlined() {
        let backend = SkiaBackend::aliased();
        let mut canvas = backend.new_canvas(8, 8, WHITE).unwrap().unwrap();
        backend.draw_ellipse(&mut canvas, BoxPx::from_ltrb(2, 2, 3, 3), BLACK, 2);
        assert!(is_dark(&canvas, 2, 2) || is_dark(&canvas, 3, 3));
        assert_eq!(canvas.pixel(6, 6), Some(WHITE));
    }

    #[test]
    fn horizontal_line_covers_its_row() {
        let backend = SkiaBackend::new();
        let mut canvas = backend.new_canvas(20, 20, WHITE).unwrap().unwrap();
        backend.draw_line(&mut canvas, PointPx::new(2, 10), PointPx::new(17, 10), BLACK, 1);
        assert!(is_dark(&canvas, 2, 10));
        assert!(is_dark(&canvas, 10, 10));
        assert!(is_dark(&canvas, 17, 10));
        assert_eq!(canvas.pixel(10, 5), Some(WHITE));
        assert_eq!(canvas.pixel(10, 12), Some(WHITE));
    }

    #[test]
    fn ellipse_outline_leaves_centre_empty() {
        let backend = SkiaBackend::aliased();
        let mut canvas = backend.new_canvas(40, 40, WHITE).unwrap().unwrap();
        backend.draw_ellipse(&mut canvas, BoxPx::from_ltrb(5, 5, 34, 34), BLACK, 2);
        assert_eq!(canvas.pixel(20, 20), Some(WHITE));
        assert!(is_dark(&canvas, 5, 20));
        assert!(is_dark(&canvas, 20, 34));
        // Outline stays inside the bounding box.
        assert_eq!(canvas.pixel(4, 20), Some(WHITE));
        assert_eq!(canvas.pixel(20, 35), Some(WHITE));
    }

    #[test]
    fn filled_ellipse_covers_centre() {
        let backend = SkiaBackend::new();
        let mut canvas = backend.new_canvas(20, 20, WHITE).unwrap().unwrap();
        backend.fill_ellipse(&mut canvas, BoxPx::from_ltrb(4, 4, 15, 15), BLACK);
        assert!(is_dark(&canvas, 10, 10));
        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
    }

    #[test]
    fn polygon_outline_touches_vertices() {
        let backend = SkiaBackend::new();
        let mut canvas = backend.new_canvas(20, 20, WHITE).unwrap().unwrap();
        let points = [PointPx::new(16, 12), PointPx::new(3, 10), PointPx::new(16, 8)];
        backend.draw_polygon(&mut canvas, &points, BLACK, 1);
        assert!(is_dark(&canvas, 16, 10));
        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
    }

    #[test]
    fn later_draws_do_not_erase_earlier_ones() {
        let backend = SkiaBackend::new();
        let mut canvas = backend.new_canvas(20, 20, WHITE).unwrap().unwrap();
        backend.draw_line(&mut canvas, PointPx::new(5, 2), PointPx::new(5, 17), BLACK, 1);
        backend.draw_line(&mut canvas, PointPx::new(12, 2), PointPx::new(12, 17), BLACK, 1);
        assert!(is_dark(&canvas, 5, 10));
        assert!(is_dark(&canvas, 12, 10));
    }

    #[test]
    fn save_writes_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon-32.png");
        let backend = SkiaBackend::new();
        let canvas = backend.new_canvas(32, 32, WHITE).unwrap().unwrap();
        backend.save(&canvas, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (32, 32));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn save_into_missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icon-16.png");
        let backend = SkiaBackend::new();
        let canvas = backend.new_canvas(16, 16, WHITE).unwrap().unwrap();
        let err = backend.save(&canvas, &path).unwrap_err();
        assert!(matches!(err, IconError::Write { .. }), "unexpected error: {err:?}");
    }
}
