//! Drawing capability abstraction.
//!
//! The glyph renderer never talks to a rasteriser directly. It goes through
//! [`DrawingBackend`], which has two implementations:
//!
//! - [`SkiaBackend`] rasterises with tiny-skia (via `resvg`) and encodes PNG
//!   with `image`. Only compiled with the `skia` feature.
//! - [`NullBackend`] reports itself unavailable and draws nothing.
//!
//! [`detect`] picks one at process start. Nothing else in the crate checks
//! for the capability.

mod null;
#[cfg(feature = "skia")]
mod skia;

pub use null::NullBackend;
#[cfg(feature = "skia")]
pub use skia::SkiaBackend;

use std::path::Path;

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::IconError;
use crate::geometry::{BoxPx, PointPx};

// ============================================================================
// DrawingBackend
// ============================================================================

/// A raster drawing capability.
///
/// All drawing operations paint over what is already on the canvas; later
/// draws never erase earlier ones except where they overlap.
pub trait DrawingBackend {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Returns false if this backend cannot draw at all.
    fn is_available(&self) -> bool;

    /// Allocates a `width × height` canvas filled with `background`.
    ///
    /// Returns `Ok(None)` when the backend is unavailable, and
    /// [`IconError::CanvasAllocation`] when the canvas is too large.
    fn new_canvas(&self, width: u32, height: u32, background: Rgba<u8>)
    -> Result<Option<Canvas>, IconError>;

    /// Strokes the outline of the ellipse inscribed in `bounds`.
    fn draw_ellipse(&self, canvas: &mut Canvas, bounds: BoxPx, stroke: Rgba<u8>, width: u32);

    /// Strokes the closed polygon through `points`.
    fn draw_polygon(&self, canvas: &mut Canvas, points: &[PointPx], stroke: Rgba<u8>, width: u32);

    /// Strokes a straight segment from `from` to `to`.
    fn draw_line(&self, canvas: &mut Canvas, from: PointPx, to: PointPx, color: Rgba<u8>, width: u32);

    /// Fills the ellipse inscribed in `bounds`.
    fn fill_ellipse(&self, canvas: &mut Canvas, bounds: BoxPx, color: Rgba<u8>);

    /// Encodes `canvas` as PNG and writes it to `path`, replacing any
    /// existing file.
    fn save(&self, canvas: &Canvas, path: &Path) -> Result<(), IconError>;
}

// ============================================================================
// Detection
// ============================================================================

/// Which backend the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendPreference {
    /// Use the real rasteriser when it was compiled in.
    #[default]
    Auto,
    /// Always write placeholders.
    Placeholder,
}

/// Selects the drawing backend for this process.
pub fn detect(preference: BackendPreference) -> Box<dyn DrawingBackend> {
    let backend: Box<dyn DrawingBackend> = match preference {
        BackendPreference::Placeholder => Box::new(NullBackend),
        BackendPreference::Auto => default_backend(),
    };
    log::debug!(
        "selected drawing backend `{}` (available: {})",
        backend.name(),
        backend.is_available()
    );
    backend
}

#[cfg(feature = "skia")]
fn default_backend() -> Box<dyn DrawingBackend> {
    Box::new(SkiaBackend::new())
}

#[cfg(not(feature = "skia"))]
fn default_backend() -> Box<dyn DrawingBackend> {
    Box::new(NullBackend)
}

// ============================================================================
// Tests
// ============================================================================
