//! # CLI Command Implementations

use crate::protocol::{CheckRequest, CheckResponse, ErrorResponse};
use capgate_core::{
    CaptureConfig, CaptureError, CaptureKind, LoadReport, load_config, load_config_report,
    primitives::{KEY_DISABLE_RECORDING, KEY_DISABLE_SCREENSHOTS, KEY_RECORD_VIDEO},
};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::Path;

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Answer one query against a configuration.
pub fn evaluate_check(
    config: &CaptureConfig,
    name: &str,
    kind: &str,
) -> Result<CheckResponse, CaptureError> {
    let kind: CaptureKind = kind.parse()?;
    CheckRequest {
        name: name.to_string(),
        kind,
    }
    .evaluate(config)
}

/// Print whether a capture should be suppressed.
///
/// Loads fail-open: a missing config answers `capture`.
pub fn cmd_check(
    config_path: &Path,
    json_mode: bool,
    name: &str,
    kind: &str,
) -> Result<(), CaptureError> {
    let config = load_config(config_path);
    let response = evaluate_check(&config, name, kind)?;
    println!("{}", render_check(&response, json_mode)?);
    Ok(())
}

/// Format a check answer: `suppress`/`capture`, or one JSON line.
pub fn render_check(response: &CheckResponse, json_mode: bool) -> Result<String, CaptureError> {
    if json_mode {
        to_json(response)
    } else {
        Ok(response.decision.as_str().to_string())
    }
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Print the effective configuration.
///
/// Loads fail-open; a fallback is reported alongside the empty config.
pub fn cmd_show(config_path: &Path, json_mode: bool) -> Result<(), CaptureError> {
    let report = load_config_report(config_path);
    println!("{}", render_show(&report, config_path, json_mode)?);
    Ok(())
}

/// Format the effective configuration and any fail-open warning.
pub fn render_show(
    report: &LoadReport,
    config_path: &Path,
    json_mode: bool,
) -> Result<String, CaptureError> {
    let config = &report.config;
    let warning = report.warning.as_ref().map(|w| w.to_string());

    if json_mode {
        let output = serde_json::json!({
            "path": config_path.to_string_lossy(),
            "clean": report.is_clean(),
            "warning": warning,
            "config": config,
        });
        return to_json_pretty(&output);
    }

    let mut lines = vec![
        "Capture Config".to_string(),
        "==============".to_string(),
        format!("File: {}", config_path.display()),
    ];
    if let Some(warning) = warning {
        lines.push(format!("Warning: {} (all captures enabled)", warning));
    }
    lines.push(String::new());
    match config.record_video() {
        Some(enabled) => lines.push(format!("{}: {}", KEY_RECORD_VIDEO, enabled)),
        None => lines.push(format!("{}: (framework default)", KEY_RECORD_VIDEO)),
    }
    push_names(&mut lines, KEY_DISABLE_SCREENSHOTS, config.disabled_screenshots().iter());
    push_names(&mut lines, KEY_DISABLE_RECORDING, config.disabled_recordings().iter());
    Ok(lines.join("\n"))
}

fn push_names<'a>(
    lines: &mut Vec<String>,
    label: &str,
    names: impl ExactSizeIterator<Item = &'a String>,
) {
    lines.push(format!("{} ({}):", label, names.len()));
    lines.extend(names.map(|name| format!("  {}", name)));
}

// =============================================================================
// VALIDATE COMMAND
// =============================================================================

/// Strictly load the configuration, returning any error.
///
/// This is the only command that does not fail open.
pub fn cmd_validate(config_path: &Path, json_mode: bool) -> Result<(), CaptureError> {
    let config = CaptureConfig::from_path(config_path)?;

    if json_mode {
        let output = serde_json::json!({
            "valid": true,
            "path": config_path.to_string_lossy(),
            "disabled_screenshots": config.disabled_screenshots().len(),
            "disabled_recordings": config.disabled_recordings().len(),
        });
        println!("{}", to_json(&output)?);
    } else {
        println!(
            "{} is valid: {} screenshot and {} recording names disabled",
            config_path.display(),
            config.disabled_screenshots().len(),
            config.disabled_recordings().len()
        );
    }
    Ok(())
}

// =============================================================================
// SERVE COMMAND
// =============================================================================

/// Counters for one `serve` session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServeStats {
    pub answered: usize,
    pub rejected: usize,
}

/// Load the config once, then answer stdin queries until EOF.
pub fn cmd_serve(config_path: &Path) -> Result<(), CaptureError> {
    let config = load_config(config_path);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let stats = serve_lines(&config, stdin.lock(), stdout.lock())?;
    tracing::info!(
        answered = stats.answered,
        rejected = stats.rejected,
        "Serve session finished"
    );
    Ok(())
}

/// Answer one JSON response per non-empty request line.
///
/// A bad line gets an `{"error": ...}` reply and the loop continues. Only
/// I/O failures on the streams end the session early.
pub fn serve_lines<R: BufRead, W: Write>(
    config: &CaptureConfig,
    mut reader: R,
    mut writer: W,
) -> Result<ServeStats, CaptureError> {
    let mut stats = ServeStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| CaptureError::IoError(format!("Read request: {}", e)))?;
        if read == 0 {
            break;
        }

        // Undecodable bytes are a bad request, not a broken stream
        let decoded = std::str::from_utf8(&buf)
            .map(str::trim)
            .map_err(|e| format!("Invalid request: not valid UTF-8: {}", e));
        if decoded.as_ref().is_ok_and(|line| line.is_empty()) {
            continue;
        }

        let reply = match decoded
            .and_then(CheckRequest::from_line)
            .and_then(|req| req.evaluate(config).map_err(|e| e.to_string()))
        {
            Ok(response) => {
                stats.answered += 1;
                to_json(&response)?
            }
            Err(message) => {
                stats.rejected += 1;
                tracing::warn!(error = %message, "Rejected request line");
                to_json(&ErrorResponse::new(message))?
            }
        };

        writeln!(writer, "{}", reply)
            .and_then(|()| writer.flush())
            .map_err(|e| CaptureError::IoError(format!("Write response: {}", e)))?;
    }

    Ok(stats)
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn to_json<T: Serialize>(value: &T) -> Result<String, CaptureError> {
    serde_json::to_string(value).map_err(|e| CaptureError::IoError(format!("Encode JSON: {}", e)))
}

fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, CaptureError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CaptureError::IoError(format!("Encode JSON: {}", e)))
}
