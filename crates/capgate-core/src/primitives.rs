//! # Innate Primitives
//!
//! Fixed constants for capgate. These are compiled into the binary and are
//! immutable at runtime.

/// File name looked up when no configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "capture_config.json";

/// JSON key holding the global recording switch.
pub const KEY_RECORD_VIDEO: &str = "recordVideo";

/// JSON key holding names whose screenshots are suppressed.
pub const KEY_DISABLE_SCREENSHOTS: &str = "disable_screenshots";

/// JSON key holding names whose recordings are suppressed.
pub const KEY_DISABLE_RECORDING: &str = "disable_screen_recording";

/// Maximum configuration file size (1 MiB).
///
/// Checked against file metadata before the file is read.
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;
