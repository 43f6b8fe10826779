//! Integration tests for the HTTP surface
//!
//! Drives the full application router with `oneshot` requests: health
//! checks, GraphQL over HTTP, and the IDE pages.

mod common;

use axum::http::StatusCode;
use common::{get_request, graphql_request, json_body, test_app, text_body};
use graphql_demo_api::config::Config;
use tower::ServiceExt;

#[tokio::test]
async fn test_root_endpoint() {
    let (app, _) = test_app(&Config::default());

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(text_body(response).await.contains("/graphql"));
}

#[tokio::test]
async fn test_simple_health_check() {
    let (app, _) = test_app(&Config::default());

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text_body(response).await, "OK");
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let (app, _) = test_app(&Config::default());

    let response = app.oneshot(get_request("/health/live")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert!(content_type.unwrap().contains("application/json"));

    let json = json_body(response).await;
    assert_eq!(json["status"], "alive");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_readiness_counts_customers() {
    let (app, repository) = test_app(&Config::default());
    repository.create("John Doe").await.unwrap();
    repository.create("Jane Roe").await.unwrap();

    let response = app.oneshot(get_request("/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "ready");
    assert_eq!(json["customers"], 2);
}

#[tokio::test]
async fn test_graphql_over_http() {
    let (app, repository) = test_app(&Config::default());

    let response = app
        .oneshot(graphql_request(
            r#"mutation { addCustomer(name: "John Doe") { id name account { id } } }"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["data"]["addCustomer"]["id"], 1);
    assert_eq!(json["data"]["addCustomer"]["name"], "John Doe");
    assert_eq!(json["data"]["addCustomer"]["account"]["id"], 1);
    assert_eq!(repository.count().await, 1);
}

#[tokio::test]
async fn test_graphql_not_found_error_over_http() {
    let (app, _) = test_app(&Config::default());

    let response = app
        .oneshot(graphql_request("mutation { deleteCustomer(id: 3) { id } }"))
        .await
        .unwrap();

    let json = json_body(response).await;
    assert!(json["data"].is_null());
    assert_eq!(json["errors"][0]["message"], "customer not found: 3");
    assert_eq!(json["errors"][0]["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_ide_pages_served_when_enabled() {
    for uri in ["/graphiql", "/graphql/playground"] {
        let (app, _) = test_app(&Config::default());

        let response = app.oneshot(get_request(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert!(text_body(response).await.contains("/graphql"));
    }
}

#[tokio::test]
async fn test_ide_pages_hidden_when_disabled() {
    let config = Config {
        graphiql_enabled: false,
        ..Config::default()
    };

    for uri in ["/graphiql", "/graphql/playground"] {
        let (app, _) = test_app(&config);

        let response = app.oneshot(get_request(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let (app, _) = test_app(&Config::default());

    let response = app.oneshot(get_request("/nonexistent")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
