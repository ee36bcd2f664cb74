//! Icon generation pass.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::backend::{self, DrawingBackend};
use crate::error::IconError;
use crate::glyph::render_glyph;
use crate::placeholder::write_placeholder;
use crate::profile::{RenderProfile, icon_file_name};

/// Printed once, before any icon line, when icons will be placeholders.
pub const BACKEND_UNAVAILABLE_WARNING: &str =
    "Drawing backend not available. Creating placeholder files instead.";

// ============================================================================
// GeneratedIcon
// ============================================================================

/// How an icon file was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// The bird was drawn at the requested size.
    Drawn,
    /// The fixed 1×1 placeholder was written.
    Placeholder,
}

/// One written icon file.
///
/// The `Display` form is the confirmation line shown to the user, e.g.
/// `Created icon-16.png (16x16)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    /// Nominal size. Placeholders are 1×1 whatever this says.
    pub size: u32,
    pub path: PathBuf,
    pub kind: IconKind,
}

impl fmt::Display for GeneratedIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy();
        let size = self.size;
        match self.kind {
            IconKind::Drawn => write!(f, "Created {name} ({size}x{size})"),
            IconKind::Placeholder => write!(f, "Created placeholder {name} ({size}x{size})"),
        }
    }
}

// ============================================================================
// IconRenderer
// ============================================================================

/// Writes one icon file per requested size.
///
/// Each size is handled independently: draw the bird if the backend can,
/// otherwise write the placeholder. The first write failure stops the pass;
/// files written before it are left in place.
///
/// # Example
///
/// ```no_run
/// use starling_icons::{IconRenderer, RenderProfile, DEFAULT_SIZES};
///
/// let renderer = IconRenderer::detect(RenderProfile::default());
/// renderer.report(&DEFAULT_SIZES, &mut std::io::stdout().lock())?;
/// # Ok::<(), starling_icons::IconError>(())
/// ```
pub struct IconRenderer {
    backend: Box<dyn DrawingBackend>,
    output_dir: PathBuf,
}

impl IconRenderer {
    /// Creates a renderer that writes into `output_dir` with `backend`.
    pub fn new(backend: Box<dyn DrawingBackend>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            output_dir: output_dir.into(),
        }
    }

    /// Detects the backend allowed by `profile` and writes into its output
    /// directory.
    pub fn detect(profile: RenderProfile) -> Self {
        Self::new(backend::detect(profile.backend), profile.output_dir)
    }

    /// Returns true if icons will be drawn rather than replaced by placeholders.
    pub fn backend_available(&self) -> bool {
        self.backend.is_available()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generates a single icon file.
    pub fn render_one(&self, size: u32) -> Result<GeneratedIcon, IconError> {
        if size == 0 {
            return Err(IconError::InvalidSize { size });
        }
        let path = self.output_dir.join(icon_file_name(size));

        let kind = if self.draw_and_save(size, &path)? {
            IconKind::Drawn
        } else {
            write_placeholder(size, &path)?;
            IconKind::Placeholder
        };

        Ok(GeneratedIcon { size, path, kind })
    }

    /// Returns false if nothing was drawn and the caller must fall back.
    fn draw_and_save(&self, size: u32, path: &Path) -> Result<bool, IconError> {
        if !self.backend.is_available() {
            return Ok(false);
        }
        match render_glyph(self.backend.as_ref(), size)? {
            Some(canvas) => {
                self.backend.save(&canvas, path)?;
                Ok(true)
            }
            None => {
                log::warn!(
                    "backend `{}` produced no canvas for size {size}, writing placeholder",
                    self.backend.name()
                );
                Ok(false)
            }
        }
    }

    /// Generates every size in order, calling `on_icon` as each file lands.
    pub fn render_all_with<F>(&self, sizes: &[u32], mut on_icon: F) -> Result<Vec<GeneratedIcon>, IconError>
    where
        F: FnMut(&GeneratedIcon),
    {
        let mut generated = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let icon = self.render_one(size)?;
            on_icon(&icon);
            generated.push(icon);
        }
        Ok(generated)
    }

    /// Generates every size in order.
    pub fn render_all(&self, sizes: &[u32]) -> Result<Vec<GeneratedIcon>, IconError> {
        self.render_all_with(sizes, |_| {})
    }

    /// Generates every size in order and writes the progress lines to `out`.
    ///
    /// [`BACKEND_UNAVAILABLE_WARNING`] comes first when the backend cannot
    /// draw, then one confirmation line per icon as its file lands. A render
    /// error stops the pass after the lines already written.
    pub fn report<W: Write>(&self, sizes: &[u32], out: &mut W) -> Result<Vec<GeneratedIcon>, IconError> {
        if !self.backend_available() {
            writeln!(out, "{BACKEND_UNAVAILABLE_WARNING}").map_err(IconError::Console)?;
        }
        let mut generated = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let icon = self.render_one(size)?;
            writeln!(out, "{icon}").map_err(IconError::Console)?;
            generated.push(icon);
        }
        out.flush().map_err(IconError::Console)?;
        Ok(generated)
    }
}

// ============================================================================
// Tests
// ============================================================================
