//! Serializable run configuration.
//!
//! A [`RenderProfile`] says which sizes to generate, where to put them, and
//! whether the real drawing backend may be used. The defaults reproduce the
//! standard run: four icons in the current directory.
//!
//! # Example
//!
//! ```
//! use starling_icons::{BackendPreference, RenderProfile};
//!
//! let profile = RenderProfile::new()
//!     .with_sizes(vec![16, 32])
//!     .with_backend(BackendPreference::Placeholder);
//!
//! let json = profile.to_json().unwrap();
//! let restored = RenderProfile::from_json(&json).unwrap();
//! assert_eq!(restored, profile);
//! ```
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "sizes": [16, 32, 64, 80],
//!   "outputDir": ".",
//!   "backend": "auto"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::backend::BackendPreference;
use crate::error::IconError;

/// Icon sizes generated by a default run, in order.
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 64, 80];

/// Environment variable naming a JSON profile to load instead of the defaults.
pub const PROFILE_ENV: &str = "STARLING_ICONS_PROFILE";

/// Output file name for an icon of `size` pixels.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

// ============================================================================
// RenderProfile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderProfile {
    /// Sizes to render, processed in order.
    pub sizes: Vec<u32>,

    /// Directory the icons are written into.
    pub output_dir: PathBuf,

    /// Backend selection.
    pub backend: BackendPreference,
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            output_dir: PathBuf::from("."),
            backend: BackendPreference::Auto,
        }
    }
}

impl RenderProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sizes(mut self, sizes: Vec<u32>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_backend(mut self, backend: BackendPreference) -> Self {
        self.backend = backend;
        self
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a profile from a JSON string. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads a profile from a JSON file.
    pub fn load(path: &Path) -> Result<Self, IconError> {
        let json = fs::read_to_string(path).map_err(|source| IconError::ProfileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }

    /// Loads the profile named by [`PROFILE_ENV`], or the default profile
    /// when the variable is unset.
    pub fn from_env() -> Result<Self, IconError> {
        match std::env::var_os(PROFILE_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                log::debug!("loading profile from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_matches_standard_run() {
        let profile = RenderProfile::default();
        assert_eq!(profile.sizes, vec![16, 32, 64, 80]);
        assert_eq!(profile.output_dir, PathBuf::from("."));
        assert_eq!(profile.backend, BackendPreference::Auto);
    }

    #[test]
    fn file_names_follow_convention() {
        assert_eq!(icon_file_name(16), "icon-16.png");
        assert_eq!(icon_file_name(80), "icon-80.png");
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let profile = RenderProfile::new()
            .with_output_dir("out")
            .with_backend(BackendPreference::Placeholder);
        let json = profile.to_json().unwrap();
        assert!(json.contains("\"outputDir\":\"out\""));
        assert!(json.contains("\"backend\":\"placeholder\""));
        assert_eq!(RenderProfile::from_json(&json).unwrap(), profile);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let profile = RenderProfile::from_json(r#"{ "sizes": [48] }"#).unwrap();
        assert_eq!(profile.sizes, vec![48]);
        assert_eq!(profile.output_dir, PathBuf::from("."));
        assert_eq!(profile.backend, BackendPreference::Auto);

        assert_eq!(RenderProfile::from_json("{}").unwrap(), RenderProfile::default());
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(RenderProfile::from_json(r#"{ "backend": "cairo" }"#).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, r#"{ "sizes": [32, 16], "backend": "placeholder" }"#).unwrap();

        let profile = RenderProfile::load(&path).unwrap();
        assert_eq!(profile.sizes, vec![32, 16]);
        assert_eq!(profile.backend, BackendPreference::Placeholder);
    }

    #[test]
    fn load_reports_missing_file_and_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let missing = RenderProfile::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(missing, IconError::ProfileRead { .. }));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "not json").unwrap();
        let err = RenderProfile::load(&bad).unwrap_err();
        assert!(matches!(err, IconError::ProfileParse(_)));
    }
}
