//! Fallback image written when no drawing backend is available.

use std::fs;
use std::path::Path;

use crate::error::IconError;

/// A 1×1 fully transparent RGBA PNG.
///
/// The same bytes are written for every icon size; only the file name
/// carries the intended size.
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, //
    0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, //
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1f, 0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, //
    0x0b, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x60, 0x00, 0x02, 0x00, //
    0x00, 0x05, 0x00, 0x01, 0xe9, 0xfa, 0xdc, 0xd8, 0x00, 0x00, 0x00, 0x00, //
    0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// Writes [`PLACEHOLDER_PNG`] to `path`, replacing any existing file.
///
/// `size` is only used for logging; it does not change the bytes written.
pub fn write_placeholder(size: u32, path: &Path) -> Result<(), IconError> {
    fs::write(path, PLACEHOLDER_PNG).map_err(|source| IconError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {size}x{size} placeholder to {}", path.display());
    Ok(())
}
