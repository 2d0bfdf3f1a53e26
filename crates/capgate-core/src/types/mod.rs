//! # Core Type Definitions
//!
//! - Capture kinds (`CaptureKind`)
//! - Error types (`CaptureError`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// CAPTURE KIND
// =============================================================================

/// The kind of capture a host framework is about to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureKind {
    /// A still image taken after a test or step completes.
    Screenshot,
    /// A video recording of a test or suite.
    Recording,
}

impl CaptureKind {
    /// All capture kinds, in declaration order.
    pub const ALL: [CaptureKind; 2] = [CaptureKind::Screenshot, CaptureKind::Recording];

    /// Lower-case wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CaptureKind::Screenshot => "screenshot",
            CaptureKind::Recording => "recording",
        }
    }
}

impl fmt::Display for CaptureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaptureKind {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "screenshot" => Ok(CaptureKind::Screenshot),
            "recording" => Ok(CaptureKind::Recording),
            other => Err(CaptureError::UnknownKind(other.to_string())),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in capgate.
///
/// The `Config*` variants are non-fatal under [`crate::load_config`]: the
/// loader recovers with an empty configuration and logs a warning. Only the
/// strict APIs hand them back to the caller.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The configuration file does not exist.
    #[error("Config not found: {0:?}")]
    ConfigNotFound(PathBuf),

    /// The configuration file exists but is not a valid capture config.
    #[error("Config parse error in {path:?}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The configuration file exists but could not be read.
    #[error("Config unreadable {path:?}: {message}")]
    ConfigUnreadable { path: PathBuf, message: String },

    /// The configuration file exceeds the size limit.
    #[error("Config {path:?} is {size} bytes, maximum is {max}")]
    ConfigTooLarge { path: PathBuf, size: u64, max: u64 },

    /// A capture kind string was not recognized.
    #[error("Unknown capture kind: {0}. Use: screenshot, recording")]
    UnknownKind(String),

    /// A test or suite name was empty.
    #[error("Name must not be empty")]
    EmptyName,

    /// An I/O error occurred outside of config loading.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl CaptureError {
    /// Whether this error is one the fail-open loader recovers from.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CaptureError::ConfigNotFound(_)
                | CaptureError::ConfigParseError { .. }
                | CaptureError::ConfigUnreadable { .. }
                | CaptureError::ConfigTooLarge { .. }
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
