//! Backend used when no rasteriser is present.

use std::path::Path;

use image::Rgba;

use super::DrawingBackend;
use crate::canvas::Canvas;
use crate::error::IconError;
use crate::geometry::{BoxPx, PointPx};

/// A backend that is always unavailable.
///
/// It never allocates a canvas, so the renderer falls back to placeholders
/// before any drawing call is made. The drawing methods are no-ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl DrawingBackend for NullBackend {
    fn name(&self) -> &'static str {
        "null"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn new_canvas(
        &self,
        _width: u32,
        _height: u32,
        _background: Rgba<u8>,
    ) -> Result<Option<Canvas>, IconError> {
        Ok(None)
    }

    fn draw_ellipse(&self, _canvas: &mut Canvas, _bounds: BoxPx, _stroke: Rgba<u8>, _width: u32) {}

    fn draw_polygon(&self, _canvas: &mut Canvas, _points: &[PointPx], _stroke: Rgba<u8>, _width: u32) {}

    fn draw_line(&self, _canvas: &mut Canvas, _from: PointPx, _to: PointPx, _color: Rgba<u8>, _width: u32) {}

    fn fill_ellipse(&self, _canvas: &mut Canvas, _bounds: BoxPx, _color: Rgba<u8>) {}

    fn save(&self, _canvas: &Canvas, _path: &Path) -> Result<(), IconError> {
        Err(IconError::BackendUnavailable)
    }
}
