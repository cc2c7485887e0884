//! Integration tests for the riftline binary

use assert_cmd::Command;
use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use std::process::Output;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEATURED: &str = r#"{"gameList":[{"gameId":5,"gameMode":"ARAM","gameLength":120,"participants":[{"summonerName":"Alpha","teamId":100}]}],"clientRefreshInterval":300}"#;

fn riftline() -> Command {
    let mut cmd = Command::cargo_bin("riftline").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("RIFTLINE_API_KEY")
        .env_remove("RIFTLINE_REGION")
        .env_remove("RIFTLINE_BASE_URL")
        .env("NO_COLOR", "1");
    cmd
}

/// Runs the binary against `server` off the async runtime.
async fn run(server: &MockServer, args: &[&str]) -> Output {
    let mut cmd = riftline();
    cmd.args(["--api-key", "API_KEY", "--base-url", server.uri().as_str()])
        .args(args);
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

async fn serve(server: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("X-Riot-Token", "API_KEY"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

fn featured_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(FEATURED, "application/json")
}

#[test]
fn test_help_command() {
    riftline()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("match"))
        .stdout(predicate::str::contains("spectator"));
}

#[test]
fn test_missing_api_key() {
    riftline()
        .args(["spectator", "featured"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing API key"));
}

#[test]
fn test_invalid_region() {
    riftline()
        .args(["--api-key", "KEY", "-r", "mars", "spectator", "featured"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid region: mars"));
}

#[tokio::test]
async fn test_json_output() {
    let server = MockServer::start().await;
    serve(&server, "/lol/spectator/v4/featured-games", featured_response()).await;

    let output = run(&server, &["-o", "json", "spectator", "featured"]).await;
    output.clone().assert().success();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "compact JSON is one line: {stdout}");
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["clientRefreshInterval"], 300);
    assert_eq!(value["gameList"][0]["gameId"], 5);
    assert_eq!(value["gameList"][0]["participants"][0]["summonerName"], "Alpha");
}

#[tokio::test]
async fn test_json_pretty_output() {
    let server = MockServer::start().await;
    serve(&server, "/lol/spectator/v4/featured-games", featured_response()).await;

    run(&server, &["-o", "json-pretty", "spectator", "featured"])
        .await
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n  \"gameList\": ["))
        .stdout(predicate::str::contains("\"gameMode\": \"ARAM\""));
}

#[tokio::test]
async fn test_text_output() {
    let server = MockServer::start().await;
    serve(&server, "/lol/spectator/v4/featured-games", featured_response()).await;

    run(&server, &["spectator", "featured"])
        .await
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 featured games (refresh in 300s)"))
        .stdout(predicate::str::contains("ARAM"))
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[tokio::test]
async fn test_not_in_game_exits_successfully() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/lol/spectator/v4/active-games/by-summoner/sid",
        ResponseTemplate::new(404),
    )
    .await;

    run(&server, &["spectator", "current", "sid"])
        .await
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Summoner sid is not in a game"));
}

#[tokio::test]
async fn test_unknown_status_fails_with_context() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/lol/match/v4/matches/1",
        ResponseTemplate::new(999),
    )
    .await;

    run(&server, &["match", "get", "1"])
        .await
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to fetch match 1"))
        .stderr(predicate::str::contains("unknown error reason (status 999)"));
}

#[tokio::test]
async fn test_tournament_ids_text() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/lol/match/v4/matches/by-tournament-code/CODE/ids",
        ResponseTemplate::new(200).set_body_raw("[11,12]", "application/json"),
    )
    .await;

    run(&server, &["match", "tournament-ids", "CODE"])
        .await
        .assert()
        .success()
        .stdout("11\n12\n");
}
