//! Integration tests for `OverpassClient` mirror failover using wiremock.

use std::time::{Duration, Instant};

use cafehop_core::Coordinate;
use cafehop_overpass::{OverpassClient, OverpassError, RetryPolicy, SearchParams};
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn params() -> SearchParams {
    SearchParams {
        center: Coordinate::new(37.8715, -122.273),
        radius_km: 2.0,
        name_filter: None,
        restrict_amenity: true,
    }
}

/// A zero-delay policy so failover tests run fast.
fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 2,
        base_delay_ms: 0,
        step_ms: 0,
    }
}

fn client(mirrors: Vec<String>, retry: RetryPolicy) -> OverpassClient {
    OverpassClient::new(mirrors, Duration::from_secs(8), retry)
        .expect("client construction should not fail")
}

fn elements_body() -> serde_json::Value {
    serde_json::json!({
        "elements": [
            {
                "id": 100,
                "lat": 37.87,
                "lon": -122.27,
                "tags": { "name": "Victory Point", "cuisine": "coffee_shop" }
            }
        ]
    })
}

async fn mount_status(server: &MockServer, status: u16, expected_hits: u64) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_hits)
        .mount(server)
        .await;
}

#[tokio::test]
async fn transient_failure_retries_then_fails_over() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;

    // Primary always 503s; it should see exactly two attempts.
    mount_status(&primary, 503, 2).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(elements_body()))
        .expect(1)
        .mount(&secondary)
        .await;

    let client = client(vec![primary.uri(), secondary.uri()], fast_retry());
    let places = client.search(&params()).await.expect("secondary succeeds");

    assert_eq!(places.len(), 1);
    assert_eq!(places[0].title, "Victory Point");
    primary.verify().await;
    secondary.verify().await;
}

#[tokio::test]
async fn backoff_delay_separates_attempts_on_one_mirror() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    mount_status(&primary, 503, 2).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(elements_body()))
        .mount(&secondary)
        .await;

    let retry = RetryPolicy {
        max_attempts: 2,
        base_delay_ms: 150,
        step_ms: 0,
    };
    let client = client(vec![primary.uri(), secondary.uri()], retry);

    let started = Instant::now();
    client.search(&params()).await.expect("secondary succeeds");
    assert!(
        started.elapsed() >= Duration::from_millis(150),
        "retry should wait out the backoff before the second attempt"
    );
}

#[tokio::test]
async fn non_transient_failure_skips_retry() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;

    // 400 is not in the transient set: exactly one attempt, then fail over.
    mount_status(&primary, 400, 1).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(elements_body()))
        .expect(1)
        .mount(&secondary)
        .await;

    let client = client(vec![primary.uri(), secondary.uri()], fast_retry());
    let places = client.search(&params()).await.expect("secondary succeeds");

    assert_eq!(places.len(), 1);
    primary.verify().await;
    secondary.verify().await;
}

#[tokio::test]
async fn exhaustion_surfaces_last_error_after_six_attempts() {
    let mirrors = [
        MockServer::start().await,
        MockServer::start().await,
        MockServer::start().await,
    ];
    for mirror in &mirrors {
        mount_status(mirror, 503, 2).await;
    }

    let client = client(mirrors.iter().map(MockServer::uri).collect(), fast_retry());
    let err = client.search(&params()).await.expect_err("all mirrors down");

    match err {
        OverpassError::Http(e) => {
            assert_eq!(e.status().map(|s| s.as_u16()), Some(503));
        }
        other => panic!("expected the last HTTP error, got: {other}"),
    }
    for mirror in &mirrors {
        mirror.verify().await;
    }
}

#[tokio::test]
async fn rate_limited_mirror_counts_as_transient() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    mount_status(&primary, 429, 2).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(elements_body()))
        .mount(&secondary)
        .await;

    let client = client(vec![primary.uri(), secondary.uri()], fast_retry());
    client.search(&params()).await.expect("secondary succeeds");
    primary.verify().await;
}

#[tokio::test]
async fn query_is_posted_as_form_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("data="))
        .and(body_string_contains("around%3A2000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(elements_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(vec![server.uri()], fast_retry());
    client.search(&params()).await.expect("should succeed");
    server.verify().await;
}

#[tokio::test]
async fn malformed_payload_degrades_to_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client(vec![server.uri()], fast_retry());
    let places = client.search(&params()).await.expect("not an error");
    assert!(places.is_empty());
}

#[tokio::test]
async fn results_are_normalized() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "elements": [
            {
                "id": 1,
                "lat": 37.87,
                "lon": -122.27,
                "tags": {
                    "name": "Café Strada",
                    "internet_access": "wlan",
                    "addr:housenumber": "2300",
                    "addr:street": "College Ave",
                    "addr:city": "Berkeley"
                }
            },
            { "id": 2 }
        ]
    });
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = client(vec![server.uri()], fast_retry());
    let places = client.search(&params()).await.expect("should succeed");

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].title, "Café Strada");
    assert_eq!(places[0].description, "Wi-Fi: wlan");
    assert_eq!(places[0].address, "2300 College Ave Berkeley");
    assert_eq!(places[0].external_id, "1");
    assert_eq!(places[0].source, "openstreetmap");
    assert_eq!(places[1].title, "Unnamed Place");
    assert_eq!(places[1].description, "Food & drink");
}
