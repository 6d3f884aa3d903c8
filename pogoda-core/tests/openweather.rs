use std::sync::Arc;

use pogoda_core::{
    FetchError, OpenWeatherClient, Session, ViewState, WeatherFetcher, WeatherQuery, decode, icon,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const GOMEL_BODY: &str = r#"{"name":"Gomel","main":{"temp":5.0,"feels_like":2.0,"humidity":80},"weather":[{"description":"clear sky","icon":"01d"}]}"#;

fn client_for(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::with_endpoint(
        "test-key".to_string(),
        "ru".to_string(),
        format!("{}/data/2.5/weather", server.uri()),
    )
}

#[tokio::test]
async fn fetch_sends_expected_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Gomel"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "ru"))
        .respond_with(ResponseTemplate::new(200).set_body_string(GOMEL_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = WeatherQuery::new("Gomel").unwrap();
    let body = client.fetch(&query).await.expect("stubbed fetch succeeds");
    assert_eq!(body, GOMEL_BODY);
}

#[tokio::test]
async fn fetched_body_decodes_with_humidity_in_range() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(GOMEL_BODY))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = WeatherQuery::new("Gomel").unwrap();
    let record = decode::decode(&client.fetch(&query).await.unwrap()).unwrap();
    assert!(record.humidity_pct <= 100);
}

#[tokio::test]
async fn non_success_status_maps_to_not_found_regardless_of_code() {
    for status in [404u16, 401, 500, 503] {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status).set_body_string("{}"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = WeatherQuery::new("Nowhere").unwrap();
        let err = client.fetch(&query).await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound), "status {status} must map to NotFound");
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Nothing listens here; the connection itself fails.
    let client = OpenWeatherClient::with_endpoint(
        "test-key".to_string(),
        "ru".to_string(),
        "http://127.0.0.1:1/data/2.5/weather".to_string(),
    );

    let query = WeatherQuery::new("Gomel").unwrap();
    match client.fetch(&query).await {
        Err(FetchError::Transport(_)) => {}
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn end_to_end_gomel_reaches_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Gomel"))
        .respond_with(ResponseTemplate::new(200).set_body_string(GOMEL_BODY))
        .mount(&server)
        .await;

    let mut session = Session::new(Arc::new(client_for(&server)));
    assert!(session.submit("Gomel"));

    match session.next_transition().await {
        ViewState::Success(record) => {
            assert_eq!(record.location_name, "Gomel");
            assert_eq!(record.temperature_c as i64, 5);
            let condition = record.primary_condition().expect("one condition");
            assert_eq!(icon::emoji_for(&condition.icon_code), "☀️");
        }
        other => panic!("expected Success, got {other:?}"),
    }
}

#[tokio::test]
async fn upstream_error_status_surfaces_city_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let mut session = Session::new(Arc::new(client_for(&server)));
    session.submit("Gomel");
    assert_eq!(
        *session.next_transition().await,
        ViewState::Failure("Город не найден".to_string())
    );
}

#[tokio::test]
async fn malformed_upstream_body_surfaces_decode_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"name":"Gomel"}"#))
        .mount(&server)
        .await;

    let mut session = Session::new(Arc::new(client_for(&server)));
    session.submit("Gomel");
    match session.next_transition().await {
        ViewState::Failure(message) => {
            assert!(message.starts_with("Ошибка: "), "got message {message:?}");
        }
        other => panic!("expected Failure, got {other:?}"),
    }
}
