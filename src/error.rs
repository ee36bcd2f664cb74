//! Error type shared by every fallible operation in the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while rendering or writing icons.
///
/// A missing drawing backend is not an error: the renderer falls back to
/// the placeholder image instead. `BackendUnavailable` is only returned when
/// a caller asks the null backend to encode a canvas directly.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon size must be positive, got {size}")]
    InvalidSize { size: u32 },

    #[error("no drawing backend is available")]
    BackendUnavailable,

    #[error("failed to allocate a {width}x{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read profile {path}")]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile")]
    ProfileParse(#[from] serde_json::Error),

    #[error("failed to write progress output")]
    Console(#[source] std::io::Error),
}
