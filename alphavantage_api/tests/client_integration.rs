use std::time::Duration;

use alphavantage_api::{Client, DailyAdjustedQuery, Error, OutputSize};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_daily_adjusted_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("daily_adjusted.json");

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "TIME_SERIES_DAILY_ADJUSTED"))
        .and(query_param("symbol", "AAPL"))
        .and(query_param("apikey", "test-key"))
        .and(header("user-agent", "stock-api-project"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key");
    let envelope = client
        .get_daily_adjusted(&DailyAdjustedQuery::new("AAPL"))
        .await
        .unwrap();
    assert_eq!(
        envelope.record("2024-01-02").unwrap().adjusted_close,
        "185.64"
    );
}

#[tokio::test]
async fn get_daily_adjusted_forwards_output_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("outputsize", "full"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key");
    let query = DailyAdjustedQuery::new("AAPL").with_output_size(OutputSize::Full);
    let envelope = client.get_daily_adjusted(&query).await.unwrap();
    assert!(envelope.time_series().is_none());
}

#[tokio::test]
async fn get_daily_adjusted_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key");
    let err = client
        .get_daily_adjusted(&DailyAdjustedQuery::new("AAPL"))
        .await
        .unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "Service Unavailable");
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn get_daily_adjusted_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key");
    let err = client
        .get_daily_adjusted(&DailyAdjustedQuery::new("AAPL"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn get_daily_adjusted_notice_body_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("note_rate_limited.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key");
    let envelope = client
        .get_daily_adjusted(&DailyAdjustedQuery::new("AAPL"))
        .await
        .unwrap();
    assert!(envelope.notice().is_some());
}

#[tokio::test]
async fn get_daily_adjusted_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key")
        .with_timeout(Duration::from_millis(200));
    let err = client
        .get_daily_adjusted(&DailyAdjustedQuery::new("AAPL"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout), "got {:?}", err);
}

#[tokio::test]
async fn get_daily_adjusted_connection_refused() {
    // Bind then drop to get a port with nothing listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = Client::with_base_url(&format!("http://127.0.0.1:{}", port), "test-key");
    let err = client
        .get_daily_adjusted(&DailyAdjustedQuery::new("AAPL"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Connect(_)), "got {:?}", err);
    assert!(err.is_transport());
}

#[tokio::test]
async fn get_daily_adjusted_unresolvable_host() {
    let client = Client::with_base_url("http://quotes.invalid", "test-key")
        .with_timeout(Duration::from_secs(5));
    let err = client
        .get_daily_adjusted(&DailyAdjustedQuery::new("AAPL"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Dns(_)), "got {:?}", err);
    assert!(err.is_transport());
}
