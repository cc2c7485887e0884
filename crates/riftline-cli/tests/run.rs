//! End-to-end command runs against a mock API.
#![allow(clippy::expect_used)]

use clap::Parser;
use riftline_cli::{Cli, commands};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cli(server: &MockServer, args: &[&str]) -> Cli {
    let uri = server.uri();
    let mut argv = vec!["riftline", "--api-key", "API_KEY", "--base-url", uri.as_str()];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("Operation should succeed")
}

#[tokio::test]
async fn test_featured_games_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lol/spectator/v4/featured-games"))
        .and(header("X-Riot-Token", "API_KEY"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"gameList":[],"clientRefreshInterval":300}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    commands::run(cli(&server, &["-o", "json", "spectator", "featured"]))
        .await
        .expect("Operation should succeed");
}

#[tokio::test]
async fn test_not_in_game_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lol/spectator/v4/active-games/by-summoner/sid"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    commands::run(cli(&server, &["spectator", "current", "sid"]))
        .await
        .expect("Operation should succeed");
}

#[tokio::test]
async fn test_match_all_respects_limit() {
    let server = MockServer::start().await;
    let page: Vec<String> = (0..100).map(|i| format!(r#"{{"gameId":{i}}}"#)).collect();
    Mock::given(method("GET"))
        .and(path("/lol/match/v4/matchlists/by-account/acc"))
        .and(query_param("beginIndex", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!(r#"{{"matches":[{}]}}"#, page.join(",")),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    commands::run(cli(&server, &["match", "all", "acc", "--limit", "5"]))
        .await
        .expect("Operation should succeed");
}

#[tokio::test]
async fn test_unknown_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lol/match/v4/matches/1"))
        .respond_with(ResponseTemplate::new(999))
        .expect(1)
        .mount(&server)
        .await;

    let err = commands::run(cli(&server, &["match", "get", "1"]))
        .await
        .expect_err("Test operation should fail");
    let message = format!("{err:#}");
    assert!(message.contains("Failed to fetch match 1"), "{message}");
    assert!(message.contains("unknown error reason (status 999)"), "{message}");
}
