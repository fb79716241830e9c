use std::io::Write;

use assert_cmd::Command;
use chrono::{Duration, Local};
use predicates::prelude::*;
use tempfile::NamedTempFile;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

/// Config pointing the provider at a port nothing listens on.
fn offline_config() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
excluded_flags = ["--trace-warnings", "-c"]

[provider]
base_url = "http://127.0.0.1:9"
request_timeout_secs = 5
"#
    )
    .unwrap();
    file
}

fn config_for(base_url: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[provider]
base_url = "{base_url}"
request_timeout_secs = 10
"#
    )
    .unwrap();
    file
}

/// A week of 20° days starting yesterday, so both weekend days are covered.
fn warm_week() -> String {
    let today = Local::now().date_naive();
    let days: Vec<_> = (-1..=7)
        .map(|offset| {
            serde_json::json!({
                "datetime": (today + Duration::days(offset)).format("%Y-%m-%d").to_string(),
                "temp": 20.0,
            })
        })
        .collect();
    serde_json::json!({ "resolvedAddress": "Nairobi, Kenya", "days": days }).to_string()
}

/// Answer a single request with `body`, returning the base URL to reach it.
async fn serve_once(body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    base_url
}

fn picnic(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("picnic").unwrap();
    cmd.env("PICNIC_CONFIG", config.path())
        .env_remove("RUST_LOG")
        .env("VISUAL_CROSSING_WEATHER_DATA", "TEST_KEY");
    cmd
}

#[test]
fn help_mentions_city() {
    let config = offline_config();
    picnic(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("City to check"));
}

#[test]
fn missing_city_fails() {
    let config = offline_config();
    picnic(&config)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to get an argument from the command line"));
}

#[test]
fn excluded_flags_alone_do_not_count_as_city() {
    let config = offline_config();
    picnic(&config)
        .args(["--trace-warnings", "-c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to get an argument from the command line"));
}

#[test]
fn invalid_city_fails_validation() {
    let config = offline_config();
    picnic(&config)
        .args(["--trace-warnings", "N3w York"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid argument or value provided for validation. [arg]: city [value]: N3w York",
        ));
}

#[test]
fn empty_city_is_reported_as_empty() {
    let config = offline_config();
    picnic(&config)
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[value]: (empty)"));
}

#[test]
fn unreachable_provider_fails_with_context() {
    let config = offline_config();
    picnic(&config)
        .arg("nairobi")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unable to get weather data"));
}

#[test]
fn unreadable_config_fails() {
    Command::cargo_bin("picnic")
        .unwrap()
        .env("PICNIC_CONFIG", "/nonexistent/picnic.toml")
        .arg("nairobi")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[tokio::test(flavor = "multi_thread")]
async fn successful_run_prints_one_line() {
    let base_url = serve_once(warm_week()).await;
    let config = config_for(&base_url);

    let assert = tokio::task::spawn_blocking(move || {
        picnic(&config).args(["nairobi", "extra"]).assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout("This weekend looks nice for a picnic, Sunday is best because it's hotter!.\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn unknown_flag_reaches_the_validator() {
    let config = offline_config();
    picnic(&config)
        .args(["-x", "nairobi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[arg]: city [value]: -x"));
}
