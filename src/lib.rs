//! starling-icons: procedural bird icons for the Starling add-in
//!
//! This crate draws a small bird silhouette at a handful of fixed square
//! sizes and writes each one as `icon-<size>.png`. When no drawing backend
//! is available it writes a fixed 1×1 transparent placeholder under the
//! same file names instead.
//!
//! # Example
//!
//! ```no_run
//! use starling_icons::{IconRenderer, RenderProfile};
//!
//! let profile = RenderProfile::default();
//! let sizes = profile.sizes.clone();
//! let renderer = IconRenderer::detect(profile);
//!
//! for icon in renderer.render_all(&sizes)? {
//!     println!("{icon}");
//! }
//! # Ok::<(), starling_icons::IconError>(())
//! ```
//!
//! # Drawing directly
//!
//! The glyph can be rendered to an in-memory [`Canvas`] through any
//! [`DrawingBackend`]:
//!
//! ```
//! use starling_icons::{BackendPreference, detect_backend, render_glyph};
//!
//! let backend = detect_backend(BackendPreference::Auto);
//! if let Some(canvas) = render_glyph(backend.as_ref(), 32).unwrap() {
//!     assert_eq!(canvas.width(), 32);
//! }
//! ```

mod backend;
mod canvas;
mod error;
mod geometry;
mod glyph;
mod placeholder;
mod profile;
mod renderer;

pub use backend::{BackendPreference, DrawingBackend, NullBackend, detect as detect_backend};
#[cfg(feature = "skia")]
pub use backend::SkiaBackend;
pub use canvas::{BLACK, Canvas, MAX_CANVAS_SIDE, TRANSPARENT, WHITE};
pub use error::IconError;
pub use geometry::{BoxPx, PointPx};
pub use glyph::{Glyph, Shape, render_glyph, scale_factor, stroke_width};
pub use placeholder::{PLACEHOLDER_PNG, write_placeholder};
pub use profile::{DEFAULT_SIZES, PROFILE_ENV, RenderProfile, icon_file_name};
pub use renderer::{BACKEND_UNAVAILABLE_WARNING, GeneratedIcon, IconKind, IconRenderer};
