//! # Capture Policy
//!
//! The predicate host frameworks consult before capturing. Stateless and
//! deterministic: the answer depends only on the name, the kind and the
//! configuration passed in.
//!
//! Matching is exact and case-sensitive. Names are not trimmed or normalised,
//! so `"Verify Login"` does not match `"verify login"`.

use crate::{CaptureConfig, CaptureKind};
use serde::{Deserialize, Serialize};

/// Outcome of a policy query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// The host should perform the capture.
    Capture,
    /// The host should skip the capture.
    Suppress,
}

impl Decision {
    /// Lower-case wire name of this decision.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Decision::Capture => "capture",
            Decision::Suppress => "suppress",
        }
    }

    /// True for [`Decision::Suppress`].
    #[must_use]
    pub const fn is_suppress(self) -> bool {
        matches!(self, Decision::Suppress)
    }
}

/// Whether capture of `kind` should be suppressed for `name`.
///
/// Unknown names, and kinds whose disabled set is empty, yield `false`.
#[must_use]
pub fn should_suppress(name: &str, kind: CaptureKind, config: &CaptureConfig) -> bool {
    config.disabled(kind).contains(name)
}

/// [`should_suppress`] expressed as a [`Decision`].
#[must_use]
pub fn decide(name: &str, kind: CaptureKind, config: &CaptureConfig) -> Decision {
    let decision = if should_suppress(name, kind, config) {
        Decision::Suppress
    } else {
        Decision::Capture
    };
    tracing::debug!(test = name, %kind, decision = decision.as_str(), "Capture policy evaluated");
    decision
}

/// Whether a recording should be started for `name`.
///
/// `recordVideo` from the config wins over `framework_default`; a name in the
/// recording disabled set is never recorded.
#[must_use]
pub fn should_record(name: &str, config: &CaptureConfig, framework_default: bool) -> bool {
    config.record_video().unwrap_or(framework_default)
        && !should_suppress(name, CaptureKind::Recording, config)
}

// =============================================================================
// TESTS
// =============================================================================
