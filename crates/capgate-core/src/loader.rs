//! # Fail-Open Loader
//!
//! Loads a [`CaptureConfig`] for a test run. A missing, unreadable, oversized
//! or malformed file never aborts the run: the loader logs a warning and
//! returns the empty configuration, so every capture stays enabled.

use crate::{CaptureConfig, CaptureError};
use std::path::Path;

/// Result of a fail-open load.
///
/// `warning` holds the recovered error when the loader fell back to the empty
/// configuration.
#[derive(Debug)]
pub struct LoadReport {
    /// The configuration to use for this run.
    pub config: CaptureConfig,
    /// Why the loader fell back, if it did.
    pub warning: Option<CaptureError>,
}

impl LoadReport {
    /// True if the file was read and parsed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warning.is_none()
    }

    /// Discard the warning and keep the configuration.
    #[must_use]
    pub fn into_config(self) -> CaptureConfig {
        self.config
    }
}

/// Load a configuration, falling back to the empty one on any config error.
///
/// The fallback is logged at `warn` level.
pub fn load_config(path: impl AsRef<Path>) -> CaptureConfig {
    load_config_report(path).into_config()
}

/// Like [`load_config`], but also hands back the recovered error.
pub fn load_config_report(path: impl AsRef<Path>) -> LoadReport {
    let path = path.as_ref();

    match CaptureConfig::from_path(path) {
        Ok(config) => {
            tracing::info!(
                path = %path.display(),
                disabled_screenshots = config.disabled_screenshots().len(),
                disabled_recordings = config.disabled_recordings().len(),
                record_video = ?config.record_video(),
                "Loaded capture config"
            );
            LoadReport {
                config,
                warning: None,
            }
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Capture config unavailable, all captures enabled"
            );
            LoadReport {
                config: CaptureConfig::new(),
                warning: Some(e),
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = load_config_report(dir.path().join("absent.json"));

        assert!(report.config.is_empty());
        assert!(matches!(report.warning, Some(CaptureError::ConfigNotFound(_))));
    }

    #[test]
    fn directory_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = load_config_report(dir.path());

        assert!(report.config.is_empty());
        assert!(matches!(
            report.warning,
            Some(CaptureError::ConfigUnreadable { .. })
        ));
    }

    #[test]
    fn valid_file_is_clean() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("capture_config.json");
        std::fs::write(&path, r#"{"disable_screenshots": ["A"]}"#).expect("write");

        let report = load_config_report(&path);
        assert!(report.is_clean());
        assert!(report.config.disabled_screenshots().contains("A"));
    }
}
