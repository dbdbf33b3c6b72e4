//! Assemble the HTTP application: routes plus CORS, body limit and request tracing.

use crate::config::HttpConfig;
use crate::error::ConfigError;
use crate::routes::api_routes;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build(state: AppState, http: &HttpConfig) -> Result<Router, ConfigError> {
    let origins = http
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_LENGTH, header::CONTENT_TYPE]);

    Ok(api_routes(state)
        .layer(DefaultBodyLimit::max(http.max_body_size))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn rejects_unparsable_origin() {
        let http = HttpConfig {
            cors_origins: vec!["http://ok.test".into(), "bad\norigin".into()],
            ..HttpConfig::default()
        };
        let err = build(AppState::new(MemoryStore::new()), &http).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOrigin(o) if o == "bad\norigin"));
    }
}
