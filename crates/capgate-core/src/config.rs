//! # Capture Configuration
//!
//! The immutable snapshot of which names have captures disabled.
//!
//! JSON shape (all keys optional, unknown keys ignored):
//!
//! ```json
//! {
//!   "recordVideo": true,
//!   "disable_screenshots": ["Verify Login"],
//!   "disable_screen_recording": ["Checkout Suite"]
//! }
//! ```
//!
//! A missing list and an explicit `null` list both mean "nothing disabled".
//! A `null` *entry* inside a list makes the document malformed.

use crate::{CaptureError, CaptureKind, primitives};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Path label used in parse errors for documents that did not come from a file.
const INLINE_SOURCE: &str = "<inline>";

// =============================================================================
// CAPTURE CONFIG
// =============================================================================

/// Which captures are disabled, and whether recording is wanted at all.
///
/// Names are stored in `BTreeSet`s: duplicates collapse and iteration order is
/// deterministic. There are no setters; a loaded value is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConfig {
    #[serde(
        rename = "recordVideo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    record_video: Option<bool>,

    #[serde(
        rename = "disable_screenshots",
        default,
        deserialize_with = "null_as_empty"
    )]
    disabled_screenshots: BTreeSet<String>,

    #[serde(
        rename = "disable_screen_recording",
        default,
        deserialize_with = "null_as_empty"
    )]
    disabled_recordings: BTreeSet<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<BTreeSet<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CaptureConfig {
    /// Create an empty configuration: every capture enabled, recording
    /// default left to the host framework.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the global recording switch.
    #[must_use]
    pub fn with_record_video(mut self, enabled: bool) -> Self {
        self.record_video = Some(enabled);
        self
    }

    /// Add names whose screenshots are suppressed.
    #[must_use]
    pub fn with_disabled_screenshots<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled_screenshots
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Add names whose recordings are suppressed.
    #[must_use]
    pub fn with_disabled_recordings<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled_recordings
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// The `recordVideo` value, if the document set one.
    #[must_use]
    pub fn record_video(&self) -> Option<bool> {
        self.record_video
    }

    /// Names whose screenshots are suppressed.
    #[must_use]
    pub fn disabled_screenshots(&self) -> &BTreeSet<String> {
        &self.disabled_screenshots
    }

    /// Names whose recordings are suppressed.
    #[must_use]
    pub fn disabled_recordings(&self) -> &BTreeSet<String> {
        &self.disabled_recordings
    }

    /// The disabled set for a capture kind.
    #[must_use]
    pub fn disabled(&self, kind: CaptureKind) -> &BTreeSet<String> {
        match kind {
            CaptureKind::Screenshot => &self.disabled_screenshots,
            CaptureKind::Recording => &self.disabled_recordings,
        }
    }

    /// True if no name is disabled and `recordVideo` is unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record_video.is_none()
            && self.disabled_screenshots.is_empty()
            && self.disabled_recordings.is_empty()
    }

    // =========================================================================
    // PARSING
    // =========================================================================

    /// Parse a configuration from a JSON string.
    ///
    /// This is a pure transformation - no file I/O.
    pub fn from_json_str(text: &str) -> Result<Self, CaptureError> {
        Self::parse(text, Path::new(INLINE_SOURCE))
    }

    /// Read and parse a configuration file, returning every failure.
    ///
    /// This is the strict loader. Test runs should use [`crate::load_config`],
    /// which falls back to an empty configuration instead.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CaptureError> {
        let path = path.as_ref();

        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CaptureError::ConfigNotFound(path.to_path_buf()),
            _ => CaptureError::ConfigUnreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        if !metadata.is_file() {
            return Err(CaptureError::ConfigUnreadable {
                path: path.to_path_buf(),
                message: "not a regular file".to_string(),
            });
        }

        // Size is validated before reading anything
        if metadata.len() > primitives::MAX_CONFIG_FILE_SIZE {
            return Err(CaptureError::ConfigTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max: primitives::MAX_CONFIG_FILE_SIZE,
            });
        }

        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => CaptureError::ConfigParseError {
                path: path.to_path_buf(),
                message: format!("not valid UTF-8: {}", e),
            },
            _ => CaptureError::ConfigUnreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, CaptureError> {
        serde_json::from_str(text).map_err(|e| CaptureError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
