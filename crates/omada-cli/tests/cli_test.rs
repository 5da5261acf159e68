//! Integration tests for the `omada` CLI binary.
//!
//! Argument parsing, help output, and completions run without a controller;
//! the end-to-end cases point the binary at a wiremock server.
#![allow(clippy::unwrap_used)]

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

const TOKEN: &str = "cli-test-token";

/// Build a [`Command`] for the `omada` binary with env isolation.
///
/// Clears all `OMADA_*` env vars and runs from a directory without a
/// `config.yml` so tests never touch a real configuration.
fn omada_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("omada");
    cmd.current_dir(std::env::temp_dir())
        .env("HOME", "/tmp/omada-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/omada-cli-test-nonexistent")
        .env_remove("OMADA_CONFIG")
        .env_remove("OMADA_BASEURL")
        .env_remove("OMADA_SITE")
        .env_remove("OMADA_VERIFY")
        .env_remove("OMADA_USERNAME")
        .env_remove("OMADA_PASSWORD")
        .env_remove("OMADA_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

fn ok(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "errorCode": 0,
        "msg": "Success.",
        "result": result
    }))
}

fn write_config(server: &MockServer, extra: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "baseurl: {}\nsite: Default\nverify: false\n{extra}",
        server.uri()
    )
    .unwrap();
    file
}

async fn mount_session(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v2/login"))
        .respond_with(ok(json!({ "roleType": 0, "token": TOKEN })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v2/logout"))
        .respond_with(ok(json!({})))
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = omada_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    omada_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Omada")
            .and(predicate::str::contains("devices"))
            .and(predicate::str::contains("radios"))
            .and(predicate::str::contains("sites")),
    );
}

#[test]
fn test_version_flag() {
    omada_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("omada"));
}

#[test]
fn test_completions_zsh() {
    omada_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_invalid_led_value() {
    omada_cmd()
        .args(["devices", "led", "AA-BB-CC-DD-EE-FF", "blink"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

// ── Configuration errors ────────────────────────────────────────────

#[test]
fn test_missing_config_file() {
    omada_cmd()
        .args(["--config", "/nonexistent/omada.yml", "devices", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_credentials_without_terminal() {
    let server = MockServer::start().await;
    let config = write_config(&server, "");

    omada_cmd()
        .arg("--config")
        .arg(config.path())
        .args(["devices", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No credentials configured"));
}

// ── Against a mock controller ───────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_login_rejected_exit_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errorCode": -30109,
            "msg": "Invalid username or password."
        })))
        .mount(&server)
        .await;

    let config = write_config(&server, "username: admin\npassword: wrong\n");

    omada_cmd()
        .arg("--config")
        .arg(config.path())
        .args(["devices", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Authentication failed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_devices_list_json() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/sites/Default/devices"))
        .and(query_param("token", TOKEN))
        .respond_with(ok(json!([
            { "type": "ap", "mac": "AA-BB-CC-DD-EE-01", "name": "Lobby", "status": 14 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let config = write_config(&server, "username: admin\npassword: pw\n");

    let output = omada_cmd()
        .arg("--config")
        .arg(config.path())
        .args(["devices", "list", "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["name"], json!("Lobby"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_radios_disable_skips_non_ap_devices() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/sites/Default/devices"))
        .respond_with(ok(json!([
            { "type": "ap", "mac": "AA-BB-CC-DD-EE-01", "name": "Lobby" },
            { "type": "ap", "mac": "AA-BB-CC-DD-EE-02", "name": "Warehouse" },
            { "type": "switch", "mac": "AA-BB-CC-DD-EE-03", "name": "Core" }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(body_json(json!({ "radioSetting2g": { "radioEnable": false } })))
        .respond_with(ok(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(body_json(json!({ "ledSetting": 0 })))
        .respond_with(ok(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let config = write_config(&server, "username: admin\npassword: pw\n");

    omada_cmd()
        .arg("--config")
        .arg(config.path())
        .args(["radios", "--disable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("radios disabled on 2 access point(s)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_radios_no_leds() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/sites/Default/devices"))
        .respond_with(ok(json!([{ "type": "ap", "mac": "AA-BB-CC-DD-EE-01" }])))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/v2/sites/Default/eaps/AA-BB-CC-DD-EE-01"))
        .and(body_json(json!({ "radioSetting2g": { "radioEnable": true } })))
        .respond_with(ok(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(body_json(json!({ "ledSetting": 1 })))
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let config = write_config(&server, "username: admin\npassword: pw\n");

    omada_cmd()
        .arg("--config")
        .arg(config.path())
        .args(["radios", "--no-leds"])
        .assert()
        .success();
}
