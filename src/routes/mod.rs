//! HTTP route modules, one per mounted prefix.

pub mod api_info;
pub mod attendance;
pub mod auth;
pub mod daily_attendance;
pub mod departments;
pub mod employees;
pub mod leaves;
pub mod notifications;
pub mod payroll;
pub mod reports;
pub mod tasks;
pub mod users;

use axum::{http::StatusCode, Json, Router};
use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::{error::AppError, AppState};

/// Prefix table. Static and exhaustive; [`api_router`] mounts exactly these.
pub const PREFIXES: [&str; 12] = [
    "/api/auth",
    "/api/users",
    "/api/employees",
    "/api/departments",
    "/api/attendance",
    "/api/leaves",
    "/api/payroll",
    "/api/notifications",
    "/api/reports",
    "/api/info",
    "/api/tasks",
    "/api/daily-attendance",
];

/// Assemble every route module under its fixed prefix.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth::router())
        .nest("/api/users", users::router())
        .nest("/api/employees", employees::router())
        .nest("/api/departments", departments::router())
        .nest("/api/attendance", attendance::router())
        .nest("/api/leaves", leaves::router())
        .nest("/api/payroll", payroll::router())
        .nest("/api/notifications", notifications::router())
        .nest("/api/reports", reports::router())
        .nest("/api/info", api_info::router())
        .nest("/api/tasks", tasks::router())
        .nest("/api/daily-attendance", daily_attendance::router())
}

/// `GET /api/health`. Liveness only: never probes the database, so it answers
/// identically whether or not the connection is healthy.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "message": "HR Management API is running" }))
}

/// JSON 404 for unknown paths.
pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" })))
}

/// Parse a path or payload id, mapping failures to a client error.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::BadRequest(format!("Invalid id: {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_table_is_exhaustive_and_distinct() {
        assert_eq!(PREFIXES.len(), 12);
        let mut sorted = PREFIXES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 12);
        assert!(PREFIXES.iter().all(|p| p.starts_with("/api/")));
    }

    #[test]
    fn object_id_parsing_rejects_garbage() {
        assert!(parse_object_id("not-an-id").is_err());
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }
}
