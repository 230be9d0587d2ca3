//! Cross-origin policy: a decorating [`CorsLayer`] plus an enforcement
//! middleware that rejects origins outside the allow-list.
//!
//! `CorsLayer` only adds response headers; it never refuses a request. The
//! deny path therefore lives in [`enforce_origin`], which surfaces blocked
//! origins as [`AppError::OriginBlocked`] so the central error mapping turns
//! them into the generic failure response.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{error::AppError, AppState};

/// Exact-match membership test. Requests without an `Origin` header
/// (same-origin, server-to-server) are always allowed.
pub fn origin_allowed(allowed: &[String], origin: Option<&str>) -> bool {
    match origin {
        None => true,
        Some(origin) => allowed.iter().any(|candidate| candidate == origin),
    }
}

/// Middleware that denies requests whose `Origin` is not in the allow-list.
pub async fn enforce_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    if !origin_allowed(&state.config.allowed_origins(), origin.as_deref()) {
        return Err(AppError::OriginBlocked(origin.unwrap_or_default()));
    }

    Ok(next.run(request).await)
}

/// Build the CORS layer advertising the allowed origins, credentials support,
/// and the fixed method/header lists.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

#[cfg(test)]
mod tests {
    use super::origin_allowed;

    fn allow_list() -> Vec<String> {
        vec![
            "http://localhost:5173".to_string(),
            "https://hrapp.onrender.com".to_string(),
        ]
    }

    #[test]
    fn requests_without_origin_are_always_allowed() {
        assert!(origin_allowed(&allow_list(), None));
        assert!(origin_allowed(&[], None));
    }

    #[test]
    fn listed_origins_are_allowed() {
        assert!(origin_allowed(&allow_list(), Some("http://localhost:5173")));
        assert!(origin_allowed(
            &allow_list(),
            Some("https://hrapp.onrender.com")
        ));
    }

    #[test]
    fn unlisted_origins_are_denied() {
        assert!(!origin_allowed(&allow_list(), Some("https://evil.example")));
        // Matching is exact, not prefix or case-insensitive.
        assert!(!origin_allowed(
            &allow_list(),
            Some("http://localhost:51730")
        ));
        assert!(!origin_allowed(
            &allow_list(),
            Some("HTTP://LOCALHOST:5173")
        ));
    }
}
