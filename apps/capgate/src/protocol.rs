//! # JSON-Lines Protocol
//!
//! Request/response types exchanged with `capgate serve` and printed by
//! `capgate check --json-mode`. One JSON object per line in each direction.

use capgate_core::{CaptureConfig, CaptureError, CaptureKind, Decision, decide};
use serde::{Deserialize, Serialize};

// =============================================================================
// CHECK REQUEST/RESPONSE
// =============================================================================

/// A single policy query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    pub name: String,
    pub kind: CaptureKind,
}

impl CheckRequest {
    /// Parse one request line.
    pub fn from_line(line: &str) -> Result<Self, String> {
        serde_json::from_str(line).map_err(|e| format!("Invalid request: {}", e))
    }

    /// Answer this request against a configuration.
    pub fn evaluate(&self, config: &CaptureConfig) -> Result<CheckResponse, CaptureError> {
        if self.name.is_empty() {
            return Err(CaptureError::EmptyName);
        }
        let decision = decide(&self.name, self.kind, config);
        Ok(CheckResponse {
            name: self.name.clone(),
            kind: self.kind,
            suppress: decision.is_suppress(),
            decision,
        })
    }
}

/// Answer to a [`CheckRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResponse {
    pub name: String,
    pub kind: CaptureKind,
    pub suppress: bool,
    pub decision: Decision,
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Written in place of a [`CheckResponse`] when a request line is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
