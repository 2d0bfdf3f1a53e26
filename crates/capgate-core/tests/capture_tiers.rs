//! # Capture Policy Tier Tests (T0-T3)
//!
//! ## Tiers
//! - T0: Config Parsing
//! - T1: Fail-Open Loading
//! - T2: Suppression Predicate
//! - T3: Hook Adapter

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use capgate_core::{
    CaptureConfig, CaptureError, CaptureKind, load_config, load_config_report, should_suppress,
};
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a config file into a fresh temporary directory.
fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("capture_config.json");
    std::fs::write(&path, content).expect("write config");
    (dir, path)
}

// =============================================================================
// TIER T0: CONFIG PARSING
// =============================================================================

mod t0_config_parsing {
    use super::*;

    /// T0.1: All three keys are optional.
    #[test]
    fn all_keys_optional() {
        let (_dir, path) = write_config("{}");
        let config = CaptureConfig::from_path(&path).expect("parse");

        assert_eq!(config.record_video(), None);
        assert!(config.disabled_screenshots().is_empty());
        assert!(config.disabled_recordings().is_empty());
    }

    /// T0.2: Strict loader reports a missing file.
    #[test]
    fn strict_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = CaptureConfig::from_path(dir.path().join("nope.json"));
        assert!(matches!(result, Err(CaptureError::ConfigNotFound(_))));
    }

    /// T0.3: Strict loader reports malformed JSON with the file path.
    #[test]
    fn strict_malformed_file() {
        let (_dir, path) = write_config("{ this is not json");
        match CaptureConfig::from_path(&path) {
            Err(CaptureError::ConfigParseError { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    /// T0.4: Oversized files are rejected before parsing.
    #[test]
    fn strict_oversized_file() {
        let padding = " ".repeat(2 * 1024 * 1024);
        let (_dir, path) = write_config(&format!("{{}}{}", padding));
        let result = CaptureConfig::from_path(&path);
        assert!(matches!(result, Err(CaptureError::ConfigTooLarge { .. })));
    }
}

// =============================================================================
// TIER T1: FAIL-OPEN LOADING
// =============================================================================

mod t1_fail_open {
    use super::*;

    /// T1.1: Missing file yields the empty config and a warning.
    #[test]
    fn missing_file_is_empty_with_warning() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = load_config_report(dir.path().join("missing.json"));

        assert_eq!(report.config, CaptureConfig::new());
        assert!(report.warning.as_ref().is_some_and(|w| w.is_config_error()));
    }

    /// T1.2: Malformed file yields the same fail-open result.
    #[test]
    fn malformed_file_is_empty_with_warning() {
        let (_dir, path) = write_config("<xml/>");
        let report = load_config_report(&path);

        assert_eq!(report.config, CaptureConfig::new());
        assert!(matches!(
            report.warning,
            Some(CaptureError::ConfigParseError { .. })
        ));
    }

    /// T1.3: Null entries make the file malformed, which fails open.
    #[test]
    fn null_entry_fails_open() {
        let (_dir, path) = write_config(r#"{"disable_screenshots": [null]}"#);
        let config = load_config(&path);
        assert!(config.is_empty());
    }

    /// T1.4: Loading the same valid file twice yields equal configs.
    #[test]
    fn load_is_idempotent() {
        let (_dir, path) = write_config(
            r#"{"recordVideo": true, "disable_screenshots": ["A", "B"], "disable_screen_recording": ["S"]}"#,
        );
        assert_eq!(load_config(&path), load_config(&path));
    }

    /// T1.5: Fail-open never disables captures.
    #[test]
    fn fallback_enables_everything() {
        let (_dir, path) = write_config("[1, 2, 3]");
        let config = load_config(&path);

        for kind in CaptureKind::ALL {
            assert!(!should_suppress("Any Test", kind, &config));
        }
    }
}

// =============================================================================
// TIER T2: SUPPRESSION PREDICATE
// =============================================================================

mod t2_predicate {
    use super::*;

    /// T2.1: The reference scenario.
    #[test]
    fn reference_scenario() {
        let (_dir, path) =
            write_config(r#"{"disable_screenshots": ["A"], "disable_screen_recording": ["B"]}"#);
        let config = load_config(&path);

        assert!(should_suppress("A", CaptureKind::Screenshot, &config));
        assert!(!should_suppress("A", CaptureKind::Recording, &config));
        assert!(should_suppress("B", CaptureKind::Recording, &config));
        assert!(!should_suppress("C", CaptureKind::Screenshot, &config));
    }

    /// T2.2: Case-sensitive, exact matching.
    #[test]
    fn case_sensitive() {
        let config = CaptureConfig::new().with_disabled_screenshots(["Verify Login"]);
        assert!(!should_suppress("verify login", CaptureKind::Screenshot, &config));
        assert!(!should_suppress("VERIFY LOGIN", CaptureKind::Screenshot, &config));
    }

    /// T2.3: Names with spaces and unicode match verbatim.
    #[test]
    fn verbatim_names() {
        let (_dir, path) = write_config(r#"{"disable_screenshots": ["Überprüfe Anmeldung Nr. 2"]}"#);
        let config = load_config(&path);
        assert!(should_suppress(
            "Überprüfe Anmeldung Nr. 2",
            CaptureKind::Screenshot,
            &config
        ));
    }
}

// =============================================================================
// TIER T3: HOOK ADAPTER
// =============================================================================

mod t3_hooks {
    use super::*;
    use capgate_core::{CaptureGate, CaptureHost, CaptureOutcome};

    #[derive(Default)]
    struct CountingHost {
        calls: usize,
    }

    impl CaptureHost for CountingHost {
        type Error = std::io::Error;

        fn take_screenshot(&mut self, _name: &str) -> Result<(), Self::Error> {
            self.calls += 1;
            Ok(())
        }

        fn start_recording(&mut self, _name: &str) -> Result<(), Self::Error> {
            self.calls += 1;
            Err(std::io::Error::other("recorder offline"))
        }
    }

    /// T3.1: One config drives screenshot hooks for a whole run.
    #[test]
    fn run_of_tests() {
        let (_dir, path) = write_config(r#"{"disable_screenshots": ["Flaky Banner"]}"#);
        let config = load_config(&path);
        let gate = CaptureGate::new(&config);
        let mut host = CountingHost::default();

        let outcomes: Vec<_> = ["Login", "Flaky Banner", "Logout"]
            .iter()
            .map(|name| gate.after_test(name, &mut host))
            .collect();

        assert_eq!(
            outcomes,
            vec![
                CaptureOutcome::Captured,
                CaptureOutcome::Suppressed,
                CaptureOutcome::Captured
            ]
        );
        assert_eq!(host.calls, 2);
    }

    /// T3.2: Recorder errors surface as `Failed` only.
    #[test]
    fn recorder_error_contained() {
        let config = CaptureConfig::new().with_record_video(true);
        let mut host = CountingHost::default();

        let outcome = CaptureGate::new(&config).before_recording("Suite", &mut host, false);
        assert!(matches!(outcome, CaptureOutcome::Failed(msg) if msg.contains("offline")));
    }
}
