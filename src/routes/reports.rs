//! Aggregated reporting endpoints.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use serde::Deserialize;

use crate::{error::AppError, models::attendance::today, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/headcount", get(headcount))
        .route("/attendance-summary", get(attendance_summary))
}

/// Active headcount grouped by department, with the department name joined in.
async fn headcount(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let pipeline = vec![
        doc! { "$match": { "active": true } },
        doc! { "$group": { "_id": "$department_id", "count": { "$sum": 1 } } },
        doc! { "$lookup": {
            "from": "departments",
            "localField": "_id",
            "foreignField": "_id",
            "as": "department",
        }},
        doc! { "$project": {
            "count": 1,
            "department": { "$arrayElemAt": ["$department.name", 0] },
        }},
        doc! { "$sort": { "count": -1 } },
    ];

    let rows: Vec<Document> = state
        .store
        .employees()
        .aggregate(pipeline)
        .await?
        .try_collect()
        .await?;
    Ok(Json(rows))
}

#[derive(Debug, Deserialize)]
struct SummaryQuery {
    /// Day to summarize, `YYYY-MM-DD`. Defaults to today.
    date: Option<String>,
}

/// Attendance record counts by status for one day.
async fn attendance_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<Vec<Document>>, AppError> {
    let date = query.date.unwrap_or_else(today);
    let pipeline = vec![
        doc! { "$match": { "date": &date } },
        doc! { "$group": { "_id": "$status", "count": { "$sum": 1 } } },
        doc! { "$project": { "_id": 0, "status": "$_id", "count": 1 } },
    ];

    let rows: Vec<Document> = state
        .store
        .attendance()
        .aggregate(pipeline)
        .await?
        .try_collect()
        .await?;
    Ok(Json(rows))
}
