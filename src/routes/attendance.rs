//! Attendance listing plus check-in/check-out.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use futures::TryStreamExt;
use mongodb::bson::{doc, DateTime};

use crate::{
    error::AppError,
    models::attendance::{today, AttendanceRecord, CheckRequest, ListAttendanceQuery},
    routes::parse_object_id,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/check-in", post(check_in))
        .route("/check-out", post(check_out))
}

async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListAttendanceQuery>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let mut filter = doc! {};
    if let Some(employee) = query.employee {
        filter.insert("employee_id", parse_object_id(&employee)?);
    }
    if let Some(date) = query.date {
        filter.insert("date", date);
    }

    let records: Vec<AttendanceRecord> = state
        .store
        .attendance()
        .find(filter)
        .await?
        .try_collect()
        .await?;
    Ok(Json(records))
}

async fn check_in(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<AttendanceRecord>, AppError> {
    let employee_id = parse_object_id(&req.employee_id)?;
    let date = today();

    let existing = state
        .store
        .attendance()
        .find_one(doc! { "employee_id": employee_id, "date": &date })
        .await?;
    if existing.is_some() {
        return Err(AppError::BadRequest(
            "Already checked in for today".to_string(),
        ));
    }

    let mut record = AttendanceRecord::checked_in(employee_id, date);
    let result = state.store.attendance().insert_one(&record).await?;
    record.id = result.inserted_id.as_object_id();
    Ok(Json(record))
}

async fn check_out(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<AttendanceRecord>, AppError> {
    let employee_id = parse_object_id(&req.employee_id)?;
    let date = today();
    let filter = doc! {
        "employee_id": employee_id,
        "date": &date,
        "check_in": { "$ne": null },
        "check_out": null,
    };

    let result = state
        .store
        .attendance()
        .update_one(filter, doc! { "$set": { "check_out": DateTime::now() } })
        .await?;
    if result.matched_count == 0 {
        return Err(AppError::BadRequest(
            "No open attendance record for today".to_string(),
        ));
    }

    state
        .store
        .attendance()
        .find_one(doc! { "employee_id": employee_id, "date": &date })
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}
