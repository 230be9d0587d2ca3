//! Static API metadata.

use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::{routes::PREFIXES, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(info))
}

async fn info() -> Json<serde_json::Value> {
    Json(json!({
        "name": "HR Management API",
        "version": env!("CARGO_PKG_VERSION"),
        "prefixes": PREFIXES,
    }))
}
