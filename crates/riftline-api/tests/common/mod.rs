//! Shared wiremock fixtures for endpoint tests.
#![allow(dead_code, clippy::expect_used, clippy::panic)]

use riftline_api::{ApiError, ClientConfig, Region, Result, RetryPolicy, RiotClient};
use serde::Serialize;
use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at `server`, with retries fast enough for tests.
pub fn client_for(server: &MockServer) -> RiotClient {
    let policy = RetryPolicy {
        max_rate_limit_retries: 3,
        default_retry_after: Duration::from_millis(1),
        max_unavailable_retries: 1,
        unavailable_backoff: Duration::from_millis(1),
        jitter: false,
    };
    let config = ClientConfig::new("API_KEY", Region::EUW1)
        .with_base_url(server.uri())
        .with_retry_policy(policy);
    RiotClient::new(config).expect("Operation should succeed")
}

fn json_response<T: Serialize>(body: &T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Authenticated GET on `route` answering `template` every time.
pub async fn mount(server: &MockServer, route: &str, template: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("X-Riot-Token", "API_KEY"))
        .respond_with(template)
        .expect(times)
        .mount(server)
        .await;
}

/// Authenticated GET on `route` answering `first` once, then `body`.
pub async fn mount_once_then<T: Serialize>(
    server: &MockServer,
    route: &str,
    first: ResponseTemplate,
    body: &T,
) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(first)
        .up_to_n_times(1)
        .expect(1)
        .mount(server)
        .await;
    mount(server, route, json_response(body), 1).await;
}

/// Drives one endpoint through the status table:
///
/// | scenario           | server                       | outcome              |
/// |--------------------|------------------------------|----------------------|
/// | get response       | 200 + body                   | decoded body         |
/// | unknown status     | 999                          | `Unknown`            |
/// | not found          | 404                          | `NotFound`           |
/// | rate limited       | 429, then 200                | decoded body         |
/// | unavailable once   | 503, then 200                | decoded body         |
/// | unavailable twice  | 503, 503                     | `ServiceUnavailable` |
pub async fn assert_status_table<T, F, Fut>(route: &str, body: T, call: F)
where
    T: Serialize + PartialEq + Debug,
    F: Fn(RiotClient) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    // get response
    let server = MockServer::start().await;
    mount(&server, route, json_response(&body), 1).await;
    let got = call(client_for(&server)).await.expect("get response");
    assert_eq!(got, body, "get response");

    // unknown error status
    let server = MockServer::start().await;
    mount(&server, route, ResponseTemplate::new(999), 1).await;
    match call(client_for(&server)).await {
        Err(ApiError::Unknown { status, message }) => {
            assert_eq!(status, 999);
            assert_eq!(message, "unknown error reason");
        }
        other => panic!("unknown error status: unexpected {other:?}"),
    }

    // not found
    let server = MockServer::start().await;
    mount(&server, route, ResponseTemplate::new(404), 1).await;
    let err = call(client_for(&server)).await.expect_err("not found");
    assert!(matches!(err, ApiError::NotFound), "not found: {err:?}");

    // rate limited
    let server = MockServer::start().await;
    let limited = ResponseTemplate::new(429).insert_header("Retry-After", "0");
    mount_once_then(&server, route, limited, &body).await;
    let got = call(client_for(&server)).await.expect("rate limited");
    assert_eq!(got, body, "rate limited");

    // unavailable once
    let server = MockServer::start().await;
    mount_once_then(&server, route, ResponseTemplate::new(503), &body).await;
    let got = call(client_for(&server)).await.expect("unavailable once");
    assert_eq!(got, body, "unavailable once");

    // unavailable twice
    let server = MockServer::start().await;
    mount(&server, route, ResponseTemplate::new(503), 2).await;
    let err = call(client_for(&server))
        .await
        .expect_err("unavailable twice");
    assert!(
        matches!(err, ApiError::ServiceUnavailable),
        "unavailable twice: {err:?}"
    );
}
