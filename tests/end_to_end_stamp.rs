// tests/end_to_end_stamp.rs

mod common;
use crate::common::{ext_dialect, init_tracing, ProjectBuilder, RecordingNotifier};

use std::error::Error;

use scriptstamp::types::ScriptDialect;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn new_script_gets_declaration_and_rescan_is_stable() -> TestResult {
    init_tracing();
    let project = ProjectBuilder::new().build();
    let notifier = RecordingNotifier::new();
    let mut scanner = project.scanner(ext_dialect(), notifier.clone());
    scanner.initialize();

    let path = project.write("foo_bar.ext", "inherits Node\n");
    let report = scanner.scan();

    assert_eq!(report.stamped, vec![(path.clone(), "FooBar".to_string())]);
    assert_eq!(project.read("foo_bar.ext"), "declare FooBar\ninherits Node\n");
    assert_eq!(notifier.refreshed(), vec![path]);

    let again = scanner.scan();
    assert!(again.stamped.is_empty());
    assert_eq!(project.read("foo_bar.ext"), "declare FooBar\ninherits Node\n");
    assert_eq!(notifier.refreshed().len(), 1);

    Ok(())
}

#[test]
fn gdscript_files_in_subdirectories_are_stamped() -> TestResult {
    init_tracing();
    let project = ProjectBuilder::new()
        .with_file("scripts/enemies/goblin_king.gd", "extends CharacterBody2D\n")
        .with_file("scenes/level.tscn", "[gd_scene format=3]\n")
        .build();
    let mut scanner = project.scanner(ScriptDialect::gdscript(), RecordingNotifier::new());

    // No initialize: everything is seen for the first time.
    let report = scanner.scan();

    assert_eq!(report.visited, 1);
    assert_eq!(
        project.read("scripts/enemies/goblin_king.gd"),
        "class_name GoblinKing\nextends CharacterBody2D\n"
    );
    assert_eq!(project.read("scenes/level.tscn"), "[gd_scene format=3]\n");

    Ok(())
}

#[test]
fn existing_scripts_are_left_alone_after_initialize() -> TestResult {
    init_tracing();
    let body = "extends Node\n\nvar speed = 10\nvar jump = 4\n\nfunc _ready():\n\tpass\n";
    let project = ProjectBuilder::new().with_file("player.gd", body).build();
    let mut scanner = project.scanner(ScriptDialect::gdscript(), RecordingNotifier::new());
    assert_eq!(scanner.initialize(), 1);

    // Touch without changing the size.
    project.write("player.gd", body);
    let report = scanner.scan();

    assert!(report.stamped.is_empty());
    assert_eq!(project.read("player.gd"), body);
    Ok(())
}

#[test]
fn edited_script_with_declaration_is_not_restamped() -> TestResult {
    init_tracing();
    let project = ProjectBuilder::new()
        .with_file("hud.gd", "class_name Hud\nextends Control\n")
        .build();
    let mut scanner = project.scanner(ScriptDialect::gdscript(), RecordingNotifier::new());
    scanner.initialize();

    project.write("hud.gd", "class_name Hud\nextends CanvasLayer\n");
    let report = scanner.scan();

    assert!(report.stamped.is_empty());
    assert_eq!(project.read("hud.gd"), "class_name Hud\nextends CanvasLayer\n");
    Ok(())
}

#[test]
fn every_watched_file_is_registered_after_a_scan() -> TestResult {
    init_tracing();
    let project = ProjectBuilder::new()
        .with_file("a.gd", "")
        .with_file("nested/b.gd", "extends Node\n")
        .build();
    let mut scanner = project.scanner(ScriptDialect::gdscript(), RecordingNotifier::new());

    // The first pass records the pre-stamp sizes; the second records the
    // stamped files.
    scanner.scan();
    scanner.scan();

    for rel in ["a.gd", "nested/b.gd"] {
        let path = project.path(rel);
        let info = scanner
            .registry()
            .lookup(&path)
            .ok_or_else(|| format!("{rel} missing from registry"))?;
        assert_eq!(info.size_bytes, std::fs::metadata(&path)?.len());
    }
    Ok(())
}
