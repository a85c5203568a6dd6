//! `aligner scan` output.

mod common;

use common::*;

#[test]
fn json_scan_streams_facts_in_name_order() {
    let env = TestEnv::with_files(&[
        ("src/orchestrator.js", ORCHESTRATOR_JS),
        ("monitor.py", MONITOR_PY),
        ("README.md", README_MD),
        ("logo.png", "not really a png"),
    ]);
    let root = env.root().display().to_string();

    let result = env.run(&["--json", "scan", &root]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let events = result.json_lines();
    let files: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "fact")
        .map(|e| e["relative_path"].as_str().unwrap())
        .collect();
    assert_eq!(files, vec!["README.md", "monitor.py", "src/orchestrator.js"]);

    let orchestrator = &events[2];
    assert_eq!(
        orchestrator["imported_modules"],
        serde_json::json!(["events", "axios"])
    );
    assert_eq!(orchestrator["declared_symbols"][0]["name"], "runOrchestration");
    assert_eq!(orchestrator["declared_symbols"][1]["kind"], "class");
    assert_eq!(
        orchestrator["purpose_statements"][0]["text"],
        "coordinate agent workflows"
    );
    assert_eq!(orchestrator["purpose_statements"][0]["line_number"], 1);

    let monitor = &events[1];
    // `from datetime import datetime` yields the module and the imported name
    assert_eq!(
        monitor["imported_modules"],
        serde_json::json!(["os", "datetime", "datetime"])
    );
    assert_eq!(monitor["declared_symbols"][0]["name"], "collect_metrics");

    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["total_files"], 4);
    assert_eq!(complete["analysed_files"], 3);
    assert_eq!(complete["code_files"], 2);
}

#[test]
fn text_scan_lists_purpose_statements() {
    let env = TestEnv::with_files(&[("src/booking.js", BOOKING_JS)]);
    let root = env.root().display().to_string();

    let result = env.run(&["scan", &root]);

    assert!(result.success);
    assert!(result.stdout.contains("src/booking.js (7 lines)"));
    assert!(result.stdout.contains("purpose (line 2): Flight booking helpers"));
    assert!(result.stdout.contains("Scan complete"));
}

#[test]
fn scan_of_missing_directory_fails() {
    let env = TestEnv::new();
    let missing = env.project_path("nope").display().to_string();

    let result = env.run(&["scan", &missing]);

    assert!(!result.success);
    assert!(result.stderr.contains("cannot read project root"));
}

#[test]
fn json_scan_of_missing_directory_emits_error_event() {
    let env = TestEnv::new();
    let missing = env.project_path("nope").display().to_string();

    let result = env.run(&["--json", "scan", &missing]);

    assert_eq!(result.exit_code, 1);
    let event = result.json();
    assert_eq!(event["event"], "error");
    assert_eq!(event["command"], "scan");
}
