//! # capgate-core
//!
//! Configuration-driven capture suppression for automated test runs.
//!
//! Host test frameworks take screenshots after tests and record videos of
//! tests or suites. A shared JSON file names the tests whose captures should
//! be skipped. This crate loads that file once and answers one question:
//! should capture of this kind be suppressed for this name?
//!
//! ## Architectural Constraints
//!
//! - The configuration is an explicit, immutable value passed by reference.
//!   There is no global state.
//! - Loading is fail-open: a missing or malformed file yields the empty
//!   configuration and a warning, never an aborted run.
//! - The policy is a pure predicate. No async, no network.
//!
//! ## Example
//!
//! ```
//! use capgate_core::{CaptureConfig, CaptureKind, should_suppress};
//!
//! let config = CaptureConfig::from_json_str(
//!     r#"{"disable_screenshots": ["Verify Login"]}"#,
//! ).expect("valid config");
//!
//! assert!(should_suppress("Verify Login", CaptureKind::Screenshot, &config));
//! assert!(!should_suppress("verify login", CaptureKind::Screenshot, &config));
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod config;
pub mod gate;
pub mod loader;
pub mod policy;
pub mod primitives;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use config::CaptureConfig;
pub use gate::{CaptureGate, CaptureHost, CaptureOutcome};
pub use loader::{LoadReport, load_config, load_config_report};
pub use policy::{Decision, decide, should_record, should_suppress};
pub use types::{CaptureError, CaptureKind};
