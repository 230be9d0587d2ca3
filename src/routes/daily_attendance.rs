//! Daily-attendance records and a manual trigger for the scheduled job body.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use futures::TryStreamExt;
use mongodb::bson::doc;
use serde_json::json;

use crate::{
    error::AppError,
    jobs::daily_attendance::mark_absentees,
    models::attendance::{today, AttendanceRecord},
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/run", post(run))
        .route("/:date", get(by_date))
}

async fn by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let records: Vec<AttendanceRecord> = state
        .store
        .attendance()
        .find(doc! { "date": &date })
        .await?
        .try_collect()
        .await?;
    Ok(Json(records))
}

/// Run the absent-marking pass for today on demand, outside the schedule.
async fn run(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let date = today();
    let marked = mark_absentees(&state.store, &date).await?;
    Ok(Json(json!({ "date": date, "marked_absent": marked })))
}
