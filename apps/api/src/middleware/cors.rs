//! CORS layer construction

use axum::http::{header, Method};
use tower_http::cors::CorsLayer;

use crate::config::Config;

/// Build the CORS layer based on configuration.
///
/// In production mode:
/// - If `CORS_ORIGINS` is set, only those origins are allowed
/// - If `CORS_ORIGINS` is not set, CORS requests are rejected (no origins allowed)
///
/// In development mode:
/// - If `CORS_ORIGINS` is set, those origins are used
/// - If `CORS_ORIGINS` is not set, permissive CORS is used for convenience
pub fn build_cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(origins) if !origins.is_empty() => {
            let allowed_origins: Vec<_> = origins
                .iter()
                .filter_map(|origin| {
                    origin.parse().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin '{}', skipping", origin);
                        None
                    })
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::error!("No valid CORS origins configured, CORS requests will be rejected");
                CorsLayer::new()
            } else {
                tracing::info!(
                    "CORS configured with {} allowed origin(s): {:?}",
                    allowed_origins.len(),
                    origins
                );
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
                    .max_age(std::time::Duration::from_secs(3600))
            }
        }
        _ if config.is_production() => {
            tracing::warn!(
                "CORS_ORIGINS not configured in production mode. \
                 CORS requests will be rejected. Set CORS_ORIGINS to allow cross-origin requests."
            );
            CorsLayer::new()
        }
        _ => {
            tracing::warn!(
                "Using permissive CORS in development mode. \
                 Set CORS_ORIGINS for production-like behavior."
            );
            CorsLayer::permissive()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::post, Router};
    use graphql_demo_shared_config::{CommonConfig, Environment};
    use tower::ServiceExt;

    const ALLOWED: &str = "https://app.example.com";

    fn app(config: &Config) -> Router {
        Router::new()
            .route("/graphql", post(|| async { "ok" }))
            .layer(build_cors_layer(config))
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/graphql")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    }

    async fn allowed_origin(config: &Config, origin: &str) -> Option<String> {
        let response = app(config).oneshot(preflight(origin)).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    fn production() -> CommonConfig {
        CommonConfig {
            environment: Environment::Production,
            ..CommonConfig::default()
        }
    }

    #[tokio::test]
    async fn test_configured_origins_allow_listed_and_reject_others() {
        let config = Config {
            common: production(),
            cors_allowed_origins: Some(vec![ALLOWED.to_string()]),
            ..Config::default()
        };

        assert_eq!(allowed_origin(&config, ALLOWED).await.as_deref(), Some(ALLOWED));
        assert_eq!(allowed_origin(&config, "https://evil.example.com").await, None);
    }

    #[tokio::test]
    async fn test_production_without_origins_rejects_all() {
        let config = Config {
            common: production(),
            cors_allowed_origins: None,
            ..Config::default()
        };

        assert_eq!(allowed_origin(&config, ALLOWED).await, None);
    }

    #[tokio::test]
    async fn test_development_without_origins_is_permissive() {
        let config = Config::default();

        assert_eq!(allowed_origin(&config, ALLOWED).await.as_deref(), Some("*"));
    }
}
