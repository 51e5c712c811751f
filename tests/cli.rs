use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".sensor-dashboard").join("config.json")
}

const BINARY_NAME: &str = "sensor-dashboard";

/// Command with an isolated $HOME and no endpoint in the environment.
fn dashboard_cmd(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()).env_remove("DASHBOARD_API_URL");
    cmd
}

/// A URL on which nothing is listening.
fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api/v1/analytics", port)
}

/// Serves `body` as JSON to the first request, on a background thread.
fn serve_json_once(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://127.0.0.1:{}/api/v1/analytics", port)
}

#[test]
/// Help command should list the subcommands.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("start"))
        .stdout(contains("fetch"))
        .stdout(contains("config"));
}

#[test]
/// A fetch against a dead backend prints the fixed message and exits non-zero.
fn fetch_reports_unreachable_backend() {
    let tmp = temp_config_dir();
    dashboard_cmd(&tmp)
        .arg("fetch")
        .arg("--api-url")
        .arg(unreachable_url())
        .assert()
        .failure()
        .stdout(contains("Could not connect to the backend"))
        .stdout(contains("error sending request").not())
        .stdout(contains("127.0.0.1").not())
        .stderr(contains("Could not connect to the backend"));
}

#[test]
/// A successful fetch prints the summary values as received.
fn fetch_prints_summary() {
    let tmp = temp_config_dir();
    let url = serve_json_once(
        r#"{"total_records":42,"average_temp":21.5,"max_temp":25.0,"min_temp":18.0,"average_humidity":40.0,"records_per_sensor":{"s1":42},"raw_data":[]}"#,
    );
    dashboard_cmd(&tmp)
        .arg("fetch")
        .arg("--api-url")
        .arg(url)
        .assert()
        .success()
        .stdout(contains("Total Records: 42"))
        .stdout(contains("Average Temp: 21.5°C"));
}

#[test]
/// The endpoint can also come from the environment.
fn fetch_uses_environment_url() {
    let tmp = temp_config_dir();
    dashboard_cmd(&tmp)
        .env("DASHBOARD_API_URL", unreachable_url())
        .arg("fetch")
        .assert()
        .failure()
        .stderr(contains("Could not connect to the backend"));
}

#[test]
fn fetch_rejects_invalid_url() {
    let tmp = temp_config_dir();
    dashboard_cmd(&tmp)
        .arg("fetch")
        .arg("--api-url")
        .arg("not-a-url")
        .assert()
        .failure()
        .stderr(contains("Invalid API URL"));
}

#[test]
/// set-url writes the config file and show reads it back.
fn config_set_url_then_show() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    dashboard_cmd(&tmp)
        .args(["config", "set-url", "http://10.0.0.5:9000/api/v1/analytics"])
        .assert()
        .success()
        .stdout(contains("Saved API URL"));
    assert!(config_path.exists());
    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("http://10.0.0.5:9000/api/v1/analytics"));

    dashboard_cmd(&tmp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("Effective API URL"))
        .stdout(contains("http://10.0.0.5:9000/api/v1/analytics"));
}

#[test]
fn config_show_defaults_to_local_backend() {
    let tmp = temp_config_dir();
    dashboard_cmd(&tmp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("(not set)"))
        .stdout(contains("http://127.0.0.1:8000/api/v1/analytics"));
}

#[test]
/// Clear should delete an existing config file.
fn config_clear_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    dashboard_cmd(&tmp)
        .args(["config", "clear"])
        .assert()
        .success()
        .stdout(contains("Clearing"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}
