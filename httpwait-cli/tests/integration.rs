use assert_cmd::Command;
use axum::routing::get;
use axum::{Json, Router};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const INPUT_VARS: &[&str] = &[
    "INPUT_URL",
    "INPUT_METHOD",
    "INPUT_HEADERS",
    "INPUT_BODY",
    "INPUT_BODY-READING-METHOD",
    "INPUT_HTML-TO-TEXT",
    "INPUT_HTTP-STATUS",
    "INPUT_STOP-ON-ERROR",
    "INPUT_TIMEOUT",
    "INPUT_SINGLE-FETCH-TIMEOUT",
    "INPUT_WAITING-TIME",
];

/// A command with no inherited action inputs, writing outputs to `output_file`.
fn httpwait(output_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("httpwait").unwrap();
    for var in INPUT_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("HTTPWAIT_LOG").env_remove("RUST_LOG");
    cmd.env("GITHUB_OUTPUT", output_file);
    cmd
}

fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/health")
}

fn spawn_server() -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let app = Router::new()
                .route("/json", get(|| async { Json(serde_json::json!({"actor": "john"})) }))
                .route("/lines", get(|| async { "line one\nline two" }));
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}", rx.recv().unwrap())
}

#[test]
fn test_missing_url_is_a_config_error() {
    let tmp_dir = TempDir::new().unwrap();
    let output_file = tmp_dir.path().join("output");

    let assert = httpwait(&output_file).assert().failure().code(2); // VALIDATION_FAILED

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("::error::Input required and not supplied: url"));
    assert!(!output_file.exists());
}

#[test]
fn test_invalid_boolean_is_a_config_error() {
    let tmp_dir = TempDir::new().unwrap();
    let output_file = tmp_dir.path().join("output");

    httpwait(&output_file)
        .args(["--url", "http://127.0.0.1:1", "--stop-on-error", "yes"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_stop_on_error_fails_the_run() {
    let tmp_dir = TempDir::new().unwrap();
    let output_file = tmp_dir.path().join("output");

    let assert = httpwait(&output_file)
        .args(["--url", &closed_port_url()])
        .args(["--timeout", "500", "--waiting-time", "500"])
        .args(["--stop-on-error", "true"])
        .assert()
        .failure()
        .code(3); // RUN_FAILED

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains(
        "::error::Action failed because of stop-on-error is set and result is not OK: maxLoop"
    ));
    assert!(stdout.contains("::error::Network error:"));

    let outputs = fs::read_to_string(&output_file).unwrap();
    assert!(outputs.contains("result=maxLoop\n"));
    assert!(outputs.contains("http-status=\n"));
}

#[test]
fn test_non_ok_result_succeeds_without_stop_on_error() {
    let tmp_dir = TempDir::new().unwrap();
    let output_file = tmp_dir.path().join("output");

    httpwait(&output_file)
        .args(["--url", &closed_port_url()])
        .args(["--timeout", "500", "--waiting-time", "500"])
        .assert()
        .success();

    let outputs = fs::read_to_string(&output_file).unwrap();
    let names: Vec<&str> = outputs
        .lines()
        .filter_map(|l| l.split('=').next())
        .collect();
    assert_eq!(names, vec!["response", "duration", "result", "http-status"]);
}

#[test]
fn test_inputs_are_read_from_action_env() {
    let tmp_dir = TempDir::new().unwrap();
    let output_file = tmp_dir.path().join("output");

    httpwait(&output_file)
        .env("INPUT_URL", closed_port_url())
        .env("INPUT_TIMEOUT", "500")
        .env("INPUT_WAITING-TIME", "500")
        .env("INPUT_STOP-ON-ERROR", "TRUE")
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_clamped_timing_is_warned() {
    let tmp_dir = TempDir::new().unwrap();
    let output_file = tmp_dir.path().join("output");

    let assert = httpwait(&output_file)
        .args(["--url", &closed_port_url()])
        .args(["--timeout", "100", "--waiting-time", "500"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("::warning::timeout < 500 ms, new timeout = 500 ms"));
    assert!(stdout.contains("timeout: 500 ms"));
}

#[test]
fn test_success_with_json_summary() {
    let base = spawn_server();
    let tmp_dir = TempDir::new().unwrap();
    let output_file = tmp_dir.path().join("output");

    let assert = httpwait(&output_file)
        .args(["--url", &format!("{base}/json")])
        .args(["--body-reading-method", "JSON", "--stop-on-error", "true"])
        .args(["--format", "json", "--quiet"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let summary: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(summary["result"], "OK");
    assert_eq!(summary["http_status"], 200);
    assert_eq!(summary["response"], serde_json::json!({"actor": "john"}));
    assert_eq!(summary["attempts"], 1);

    let outputs = fs::read_to_string(&output_file).unwrap();
    assert!(outputs.starts_with("response={\"actor\":\"john\"}\n"));
    assert!(outputs.contains("result=OK\n"));
    assert!(outputs.contains("http-status=200\n"));
}

#[test]
fn test_multiline_response_uses_heredoc_output() {
    let base = spawn_server();
    let tmp_dir = TempDir::new().unwrap();
    let output_file = tmp_dir.path().join("output");

    httpwait(&output_file)
        .args(["--url", &format!("{base}/lines")])
        .args(["--body-reading-method", "TEXT"])
        .assert()
        .success();

    let outputs = fs::read_to_string(&output_file).unwrap();
    let mut lines = outputs.lines();
    let header = lines.next().unwrap();
    let delimiter = header.strip_prefix("response<<").unwrap();
    assert_eq!(lines.next(), Some("line one"));
    assert_eq!(lines.next(), Some("line two"));
    assert_eq!(lines.next(), Some(delimiter));
}
