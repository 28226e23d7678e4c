//! End-to-end tests of the binz binary: real process, real index file,
//! mock remote server where a remote is needed.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::Path;
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn binz(dir: &Path, index: &Path) -> Command {
    let mut cmd = Command::cargo_bin("binz").unwrap();
    cmd.current_dir(dir)
        .env("BINZ_KEY", "test-secret")
        .env("BINZ_INDEX", index);
    cmd
}

fn seed_index(index: &Path, bins: serde_json::Value) {
    std::fs::write(
        index,
        serde_json::to_string_pretty(&json!({ "bins": bins })).unwrap(),
    )
    .unwrap();
}

#[test]
fn missing_credential_is_fatal() {
    let temp = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("binz").unwrap();
    cmd.current_dir(temp.path())
        .env_remove("BINZ_KEY")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("BINZ_KEY"));
}

#[test]
fn list_without_an_index_reports_no_bins_and_succeeds() {
    let temp = tempfile::tempdir().unwrap();
    let index = temp.path().join("bins.json");

    binz(temp.path(), &index)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bins in the index yet."));
}

#[test]
fn list_shows_seeded_records_in_stored_order() {
    let temp = tempfile::tempdir().unwrap();
    let index = temp.path().join("bins.json");
    seed_index(
        &index,
        json!([
            {"id": "bin-2", "private": false, "createdAt": "2024-01-10T12:00:00Z", "name": "second"},
            {"id": "bin-1", "private": true, "createdAt": "2024-01-09T12:00:00Z", "name": "first"}
        ]),
    );

    let output = binz(temp.path(), &index).arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let second = stdout.find("second").expect("second listed");
    let first = stdout.find("first").expect("first listed");
    assert!(second < first, "stored order not preserved:\n{stdout}");
}

#[test]
fn a_non_json_index_path_fails() {
    let temp = tempfile::tempdir().unwrap();
    let index = temp.path().join("bins.txt");
    std::fs::write(&index, r#"{"bins": []}"#).unwrap();

    binz(temp.path(), &index)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains(".json extension"));
}

#[test]
fn create_then_list_round_trips_through_the_index_file() {
    let temp = tempfile::tempdir().unwrap();
    let index = temp.path().join("bins.json");
    let doc = temp.path().join("doc.json");
    std::fs::write(&doc, r#"{"greeting": "hello"}"#).unwrap();

    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("X-Master-Key", "test-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "metadata": {
                    "id": "bin-123",
                    "private": true,
                    "createdAt": "2024-01-10T12:00:00Z",
                    "name": "my-bin"
                }
            })))
            .mount(&server),
    );

    binz(temp.path(), &index)
        .env("BINZ_API_URL", server.uri())
        .args(["create", doc.to_str().unwrap(), "--name", "my-bin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bin created (bin-123): my-bin"));

    let raw = std::fs::read_to_string(&index).unwrap();
    assert!(raw.contains("bin-123"));

    binz(temp.path(), &index)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("my-bin"));
}

#[test]
fn delete_empties_the_index() {
    let temp = tempfile::tempdir().unwrap();
    let index = temp.path().join("bins.json");
    seed_index(
        &index,
        json!([
            {"id": "bin-123", "private": true, "createdAt": "2024-01-10T12:00:00Z", "name": "my-bin"}
        ]),
    );

    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("DELETE"))
            .and(path("/bin-123"))
            .and(header("X-Master-Key", "test-secret"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server),
    );

    binz(temp.path(), &index)
        .env("BINZ_API_URL", server.uri())
        .args(["delete", "bin-123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bin deleted: bin-123"));

    let list: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&index).unwrap()).unwrap();
    assert_eq!(list["bins"], json!([]));
}

#[test]
fn invalid_content_fails_without_touching_the_index() {
    let temp = tempfile::tempdir().unwrap();
    let index = temp.path().join("bins.json");
    let doc = temp.path().join("doc.json");
    std::fs::write(&doc, "definitely not json").unwrap();

    binz(temp.path(), &index)
        // Unroutable without a server: the command must fail before any call.
        .env("BINZ_API_URL", "http://127.0.0.1:9")
        .args(["create", doc.to_str().unwrap(), "--name", "my-bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid JSON"));

    assert!(!index.exists());
}

#[test]
fn get_prints_the_fetched_record() {
    let temp = tempfile::tempdir().unwrap();
    let index = temp.path().join("bins.json");

    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/bin-123"))
            .and(header("X-Master-Key", "test-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "record": {"greeting": "hello"},
                "metadata": {
                    "id": "bin-123",
                    "private": true,
                    "createdAt": "2024-01-10T12:00:00Z",
                    "name": "my-bin"
                }
            })))
            .mount(&server),
    );

    binz(temp.path(), &index)
        .env("BINZ_API_URL", server.uri())
        .args(["get", "bin-123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-bin"))
        .stdout(predicate::str::contains("\"greeting\": \"hello\""));

    // Get bypasses the index entirely.
    assert!(!index.exists());
}
