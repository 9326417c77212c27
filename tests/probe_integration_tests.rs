use atrium::api::{HttpStatusProbe, ProbeError, StatusProbe};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Health Probe Tests
// ============================================================================

#[tokio::test]
async fn test_successful_ping_parses_ack() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "pong",
            "timestamp": "2025-06-01T12:34:56Z"
        })))
        .mount(&mock_server)
        .await;

    let probe = HttpStatusProbe::new(mock_server.uri());
    let ack = probe.ping().await.expect("ping should succeed");

    assert_eq!(ack.message, "pong");
    assert_eq!(ack.timestamp.to_rfc3339(), "2025-06-01T12:34:56+00:00");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_tolerated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "pong",
            "timestamp": "2025-06-01T12:34:56Z"
        })))
        .mount(&mock_server)
        .await;

    let probe = HttpStatusProbe::new(format!("{}/", mock_server.uri()));
    assert!(probe.ping().await.is_ok());
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let probe = HttpStatusProbe::new(mock_server.uri());
    match probe.ping().await {
        Err(ProbeError::Status(code)) => assert_eq!(code, 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_parse() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let probe = HttpStatusProbe::new(mock_server.uri());
    match probe.ping().await {
        Err(ProbeError::Parse(_)) => {}
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_server_maps_to_network() {
    // Port 1 is virtually guaranteed to have no listener
    let probe = HttpStatusProbe::new(String::from("http://127.0.0.1:1"));
    match probe.ping().await {
        Err(ProbeError::Network(_)) => {}
        other => panic!("expected network error, got {:?}", other),
    }
}
