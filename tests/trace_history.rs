//! End-to-end tests for the in-memory exchange history.

use reqwest::StatusCode;
use simple_service::admin::handlers::{HealthStatus, ServiceInfo, TraceHistory};
use simple_service::config::ServiceConfig;

mod common;

async fn history(client: &reqwest::Client, service: &common::RunningService) -> TraceHistory {
    let res = client
        .get(service.url("/actuator/httptrace"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn records_exchange_details() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    client
        .get(service.url("/api/private"))
        .header("x-credential-identifier", "alice")
        .header("authorization", "Bearer token")
        .send()
        .await
        .unwrap();

    let traces = history(&client, &service).await.traces;
    assert_eq!(traces.len(), 1);

    let entry = &traces[0];
    assert_eq!(entry.request.method, "GET");
    assert_eq!(entry.request.path, "/api/private");
    assert_eq!(entry.request.headers["x-credential-identifier"], vec!["alice"]);
    assert!(!entry.request.headers.contains_key("authorization"));
    assert!(entry.request.headers.contains_key("x-request-id"));
    assert!(entry.request.remote_address.is_some());
    assert_eq!(entry.response.status, 200);
    assert!(entry.response.headers.contains_key("content-type"));
    assert!(entry.timestamp_ms > 0);

    service.stop().await;
}

#[tokio::test]
async fn evicts_oldest_beyond_capacity() {
    let mut config = ServiceConfig::default();
    config.trace.capacity = 3;
    let service = common::start_service(config).await;
    let client = common::client();

    for identity in ["a", "b", "c", "d"] {
        client
            .get(service.url("/api/private"))
            .header("x-credential-identifier", identity)
            .send()
            .await
            .unwrap();
    }

    let identities: Vec<String> = history(&client, &service)
        .await
        .traces
        .into_iter()
        .map(|e| e.request.headers["x-credential-identifier"][0].clone())
        .collect();
    assert_eq!(identities, vec!["b", "c", "d"]);

    service.stop().await;
}

#[tokio::test]
async fn not_found_and_diagnostics_are_recorded() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    client.get(service.url("/api/Public")).send().await.unwrap();
    // The history request itself is recorded once its response is ready.
    history(&client, &service).await;

    let traces = history(&client, &service).await.traces;
    let summary: Vec<(&str, u16)> = traces
        .iter()
        .map(|e| (e.request.path.as_str(), e.response.status))
        .collect();
    assert_eq!(
        summary,
        vec![("/api/Public", 404), ("/actuator/httptrace", 200)]
    );

    service.stop().await;
}

#[tokio::test]
async fn disabled_history_is_not_exposed() {
    let mut config = ServiceConfig::default();
    config.trace.enabled = false;
    let service = common::start_service(config).await;
    let client = common::client();

    let res = client
        .get(service.url("/actuator/httptrace"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    service.stop().await;
}

#[tokio::test]
async fn health_and_info() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    let health: HealthStatus = client
        .get(service.url("/actuator/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health.status, "UP");

    let info: ServiceInfo = client
        .get(service.url("/actuator/info"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(info.name, "simple-service");

    service.stop().await;
}
