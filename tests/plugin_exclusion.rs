// tests/plugin_exclusion.rs

mod common;
use crate::common::{init_tracing, ProjectBuilder, RecordingNotifier, INSTALL_DIR};

use scriptstamp::types::ScriptDialect;

#[test]
fn plugin_scripts_are_never_stamped() {
    init_tracing();
    let own = format!("{INSTALL_DIR}/plugin.gd");
    let project = ProjectBuilder::new()
        .with_file(&own, "@tool\nextends EditorPlugin\n")
        .with_file("addons/other_plugin/tool.gd", "extends Node\n")
        .build();
    let notifier = RecordingNotifier::new();
    let mut scanner = project.scanner(ScriptDialect::gdscript(), notifier.clone());

    let report = scanner.scan();

    assert_eq!(report.visited, 2);
    assert_eq!(project.read(&own), "@tool\nextends EditorPlugin\n");
    assert_eq!(
        project.read("addons/other_plugin/tool.gd"),
        "class_name Tool\nextends Node\n"
    );
    assert_eq!(notifier.refreshed(), vec![project.path("addons/other_plugin/tool.gd")]);
    assert!(scanner.registry().lookup(&project.path(&own)).is_some());
}
