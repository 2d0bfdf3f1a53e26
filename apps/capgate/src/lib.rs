//! # capgate Library
//!
//! Exposes the CLI and protocol modules for testing and integration.
//!
//! The binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod protocol;

// Re-export capgate_core for convenience
pub use capgate_core;
