//! # Capture Gate
//!
//! The collaborator interface between the policy and a host test framework.
//!
//! A host adapts its native hook (listener callback, fixture, lifecycle hook)
//! by implementing [`CaptureHost`] and calling the matching [`CaptureGate`]
//! method. The gate consults the policy and only then invokes the host.
//!
//! Capture failures belong to the host. The gate logs them and reports
//! [`CaptureOutcome::Failed`], but never returns an error, so a broken
//! screenshot cannot change a test's pass/fail result.

use crate::{CaptureConfig, CaptureKind, policy};
use std::fmt;

// =============================================================================
// HOST TRAIT
// =============================================================================

/// Capture actions a host test framework performs.
///
/// Both calls are opaque and may block; they are owned entirely by the host.
pub trait CaptureHost {
    /// Error reported by the host's capture facility.
    type Error: fmt::Display;

    /// Take a screenshot for a finished test or step.
    fn take_screenshot(&mut self, name: &str) -> Result<(), Self::Error>;

    /// Start a recording for a test or suite.
    fn start_recording(&mut self, name: &str) -> Result<(), Self::Error>;
}

// =============================================================================
// OUTCOME
// =============================================================================

/// What the gate did for one hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The host captured successfully.
    Captured,
    /// The name is in the disabled set; the host was not called.
    Suppressed,
    /// Recording is switched off globally; the host was not called.
    Skipped,
    /// The host was called and reported an error.
    Failed(String),
}

impl CaptureOutcome {
    /// True if the host was asked to capture.
    #[must_use]
    pub fn host_invoked(&self) -> bool {
        matches!(self, CaptureOutcome::Captured | CaptureOutcome::Failed(_))
    }
}

// =============================================================================
// GATE
// =============================================================================

/// Hook adapter bound to one configuration snapshot.
#[derive(Debug, Clone, Copy)]
pub struct CaptureGate<'a> {
    config: &'a CaptureConfig,
}

impl<'a> CaptureGate<'a> {
    /// Create a gate over a loaded configuration.
    #[must_use]
    pub fn new(config: &'a CaptureConfig) -> Self {
        Self { config }
    }

    /// The configuration this gate consults.
    #[must_use]
    pub fn config(&self) -> &'a CaptureConfig {
        self.config
    }

    /// Screenshot hook, called after a test or step completes.
    pub fn after_test<H: CaptureHost>(&self, name: &str, host: &mut H) -> CaptureOutcome {
        if policy::should_suppress(name, CaptureKind::Screenshot, self.config) {
            tracing::debug!(test = name, "Screenshot suppressed");
            return CaptureOutcome::Suppressed;
        }
        settle(name, CaptureKind::Screenshot, host.take_screenshot(name))
    }

    /// Recording hook, called before a recording context is created.
    ///
    /// `framework_default` is what the host would do if the config had no
    /// `recordVideo` key.
    pub fn before_recording<H: CaptureHost>(
        &self,
        name: &str,
        host: &mut H,
        framework_default: bool,
    ) -> CaptureOutcome {
        if !self.config.record_video().unwrap_or(framework_default) {
            return CaptureOutcome::Skipped;
        }
        if !policy::should_record(name, self.config, framework_default) {
            tracing::debug!(test = name, "Recording suppressed");
            return CaptureOutcome::Suppressed;
        }
        settle(name, CaptureKind::Recording, host.start_recording(name))
    }
}

fn settle<E: fmt::Display>(name: &str, kind: CaptureKind, result: Result<(), E>) -> CaptureOutcome {
    match result {
        Ok(()) => CaptureOutcome::Captured,
        Err(e) => {
            tracing::warn!(test = name, %kind, error = %e, "Capture failed, test outcome unaffected");
            CaptureOutcome::Failed(e.to_string())
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
