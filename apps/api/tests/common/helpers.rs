//! Test helper functions for API integration tests
//!
//! Provides utilities for executing GraphQL documents and reading
//! HTTP response bodies.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use graphql_demo_api::DemoSchema;
use serde_json::Value;

/// Execute a document and return its data, panicking on GraphQL errors
pub async fn execute_ok(schema: &DemoSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

/// Execute a document and return the error list as JSON
pub async fn execute_err(schema: &DemoSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(!response.errors.is_empty(), "expected errors for {}", query);
    serde_json::to_value(&response.errors).unwrap()
}

/// Build a POST /graphql request with a JSON body
pub fn graphql_request(query: &str) -> Request<Body> {
    let body = serde_json::json!({ "query": query });
    Request::builder()
        .method("POST")
        .uri("/graphql")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET request for `uri`
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Read a response body as JSON
pub async fn json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Read a response body as text
pub async fn text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
