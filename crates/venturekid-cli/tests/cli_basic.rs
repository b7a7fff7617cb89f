//! Basic CLI E2E tests for the pure, network-free subcommands.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "venturekid-cli", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn guide_questions_prints_steps_and_teasers() {
    let (stdout, stderr, code) = run_cli(&["guide", "questions"]);
    assert_eq!(code, 0, "stderr: {stderr}");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("JSON output");
    let steps = parsed["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 10);
    assert_eq!(parsed["brain_teasers"].as_array().unwrap().len(), 4);
}

#[test]
fn enroll_questions_prints_five_steps() {
    let (stdout, stderr, code) = run_cli(&["enroll", "questions"]);
    assert_eq!(code, 0, "stderr: {stderr}");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("JSON output");
    assert_eq!(parsed.as_array().unwrap().len(), 5);
}

#[test]
fn guide_score_dry_runs_an_answer_file() {
    let dir = std::env::temp_dir();
    let path = dir.join("venturekid-cli-test-answers.json");
    std::fs::write(
        &path,
        r#"{
            "child_name": "Ada",
            "child_age": 11,
            "parent_name": "Sam",
            "parent_email": "sam@example.com",
            "parent_phone": "5551234567",
            "interests": ["selling"],
            "novelty_preference": "loves_new_things"
        }"#,
    )
    .unwrap();

    let (stdout, stderr, code) =
        run_cli(&["guide", "score", "--answers", path.to_str().unwrap()]);
    let _ = std::fs::remove_file(&path);

    assert_eq!(code, 0, "stderr: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("JSON output");
    let score = parsed["guide"]["venture_score"].as_u64().expect("score");
    assert!(score <= 100);
    assert!(parsed["guide"]["top_careers"].as_array().unwrap().len() <= 3);
}

#[test]
fn rejected_answer_file_exits_nonzero() {
    let dir = std::env::temp_dir();
    let path = dir.join("venturekid-cli-test-bad-answers.json");
    std::fs::write(&path, r#"{"child_name": "Ada"}"#).unwrap();

    let (_, stderr, code) = run_cli(&["guide", "score", "--answers", path.to_str().unwrap()]);
    let _ = std::fs::remove_file(&path);

    assert_ne!(code, 0);
    assert!(stderr.contains("incomplete"), "stderr: {stderr}");
}
