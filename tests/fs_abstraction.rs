// tests/fs_abstraction.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use scriptstamp::clock::FixedClock;
use scriptstamp::engine::{ScanSettings, Scanner};
use scriptstamp::fs::mock::MockFileSystem;
use scriptstamp::types::ScriptDialect;
use scriptstamp_test_utils::builders::ext_dialect;
use scriptstamp_test_utils::recording::RecordingNotifier;

fn mock_scanner(fs: &MockFileSystem, now: f64, dialect: ScriptDialect) -> (Scanner, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let scanner = Scanner::new(
        ScanSettings {
            root: PathBuf::from("."),
            install_dir: PathBuf::from("addons/scriptstamp"),
            dialect,
        },
        Arc::new(fs.clone()),
        Arc::new(FixedClock::at_secs(now)),
        Arc::new(notifier.clone()),
    )
    .unwrap();
    (scanner, notifier)
}

#[test]
fn editor_stub_written_in_two_steps_is_stamped() {
    let fs = MockFileSystem::new();
    // The editor creates an empty file first...
    fs.add_file_at("./scripts/power_up.ext", "", 1_000);
    let (mut scanner, notifier) = mock_scanner(&fs, 1_000.2, ext_dialect());
    scanner.initialize();

    // ...and fills in the template a moment later.
    fs.add_file_at("./scripts/power_up.ext", "inherits Area2D\n", 1_001);
    let report = scanner.scan();

    assert_eq!(report.stamped.len(), 1);
    assert_eq!(
        fs.contents("./scripts/power_up.ext").as_deref(),
        Some("declare PowerUp\ninherits Area2D\n")
    );
    assert_eq!(notifier.refreshed(), vec![PathBuf::from("./scripts/power_up.ext")]);
}

#[test]
fn old_files_are_ignored_even_on_first_sight() {
    let fs = MockFileSystem::new();
    fs.add_file_at("./legacy.gd", "extends Node\n", 10);
    let (mut scanner, notifier) = mock_scanner(&fs, 1_000.0, ScriptDialect::gdscript());

    let report = scanner.scan();

    assert_eq!(report.visited, 1);
    assert!(report.stamped.is_empty());
    assert!(notifier.refreshed().is_empty());
    assert!(scanner.registry().lookup(Path::new("./legacy.gd")).is_some());
}

#[test]
fn unwritable_file_does_not_stop_the_scan() {
    let fs = MockFileSystem::new();
    fs.add_file_at("./ok.gd", "", 1_000);
    fs.add_file_at("./locked.gd", "extends Node\n", 1_000);
    fs.set_read_only("./locked.gd");
    let (mut scanner, _) = mock_scanner(&fs, 1_000.0, ScriptDialect::gdscript());

    let report = scanner.scan();

    assert_eq!(report.visited, 2);
    assert_eq!(report.stamped, vec![(PathBuf::from("./ok.gd"), "Ok".to_string())]);
    assert_eq!(fs.contents("./locked.gd").as_deref(), Some("extends Node\n"));
}
