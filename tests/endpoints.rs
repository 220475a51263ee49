//! End-to-end tests for the `/api` routes over real HTTP.

use std::time::Duration;

use futures_util::future::join_all;
use reqwest::StatusCode;
use simple_service::config::{MissingCredentialPolicy, ServiceConfig};

mod common;

#[tokio::test]
async fn public_endpoint_returns_fixed_text() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    let res = client.get(service.url("/api/public")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(res.text().await.unwrap(), "It is public.");

    service.stop().await;
}

#[tokio::test]
async fn private_endpoint_echoes_credential() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    let res = client
        .get(service.url("/api/private"))
        .header("x-credential-identifier", "alice")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "alice, it is private.");

    service.stop().await;
}

#[tokio::test]
async fn missing_credential_renders_null() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    let res = client.get(service.url("/api/private")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "null, it is private.");

    service.stop().await;
}

#[tokio::test]
async fn missing_credential_rejected_when_configured() {
    let mut config = ServiceConfig::default();
    config.credential.on_missing = MissingCredentialPolicy::Reject;
    let service = common::start_service(config).await;
    let client = common::client();

    let res = client.get(service.url("/api/private")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    service.stop().await;
}

#[tokio::test]
async fn username_variant_with_newlines() {
    let mut config = ServiceConfig::default();
    config.credential.header = "X-Credential-Username".into();
    config.credential.trailing_newline = true;
    let service = common::start_service(config).await;
    let client = common::client();

    let res = client.get(service.url("/api/public")).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "It is public.\n");

    let res = client
        .get(service.url("/api/private"))
        .header("X-Credential-Username", "bob")
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "bob, it is private.\n");

    // The identifier header means nothing to this variant.
    let res = client
        .get(service.url("/api/private"))
        .header("X-Credential-Identifier", "bob")
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "null, it is private.\n");

    service.stop().await;
}

#[tokio::test]
async fn routes_match_exactly() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    for (path, expected) in [
        ("/api/public", StatusCode::OK),
        ("/api/private", StatusCode::OK),
        ("/api/public/", StatusCode::NOT_FOUND),
        ("/api/Public", StatusCode::NOT_FOUND),
        ("/api/PRIVATE", StatusCode::NOT_FOUND),
        ("/api/private/", StatusCode::NOT_FOUND),
    ] {
        let res = client.get(service.url(path)).send().await.unwrap();
        assert_eq!(res.status(), expected, "path {path}");
    }

    service.stop().await;
}

#[tokio::test]
async fn query_string_is_ignored() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    let res = client
        .get(service.url("/api/private?user=mallory"))
        .header("x-credential-identifier", "alice")
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "alice, it is private.");

    service.stop().await;
}

#[tokio::test]
async fn concurrent_requests_do_not_leak_identities() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    let requests = (0..100).map(|i| {
        let client = client.clone();
        let url = service.url("/api/private");
        async move {
            let identity = format!("user-{i}");
            let res = client
                .get(url)
                .header("x-credential-identifier", &identity)
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK);
            (identity, res.text().await.unwrap())
        }
    });

    for (identity, body) in join_all(requests).await {
        assert_eq!(body, format!("{identity}, it is private."));
    }

    service.stop().await;
}

#[tokio::test]
async fn reload_switches_credential_header() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    let mut update = ServiceConfig::default();
    update.credential.header = "X-Credential-Username".into();
    service.config_updates.send(update).unwrap();

    // The update is applied by a background task.
    let mut body = String::new();
    for _ in 0..50 {
        body = client
            .get(service.url("/api/private"))
            .header("x-credential-username", "carol")
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        if body.starts_with("carol") {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(body, "carol, it is private.");

    service.stop().await;
}

#[tokio::test]
async fn server_stops_on_shutdown() {
    let service = common::start_service(ServiceConfig::default()).await;
    let addr = service.addr;
    service.stop().await;

    let res = common::client()
        .get(format!("http://{addr}/api/public"))
        .timeout(Duration::from_secs(2))
        .send()
        .await;
    assert!(res.is_err());
}
