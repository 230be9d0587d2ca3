//! Leave request endpoints and the approve/reject workflow.

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};
use futures::TryStreamExt;
use mongodb::bson::{doc, to_bson};

use crate::{
    error::AppError,
    models::leave::{CreateLeaveRequest, LeaveRequest, ListLeavesQuery, UpdateLeaveStatusRequest},
    routes::parse_object_id,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id/status", patch(update_status))
}

async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListLeavesQuery>,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    let mut filter = doc! {};
    if let Some(employee) = query.employee {
        filter.insert("employee_id", parse_object_id(&employee)?);
    }
    if let Some(status) = query.status {
        let status = to_bson(&status)
            .map_err(|err| AppError::Internal(format!("status encoding failed: {err}")))?;
        filter.insert("status", status);
    }

    let leaves: Vec<LeaveRequest> = state
        .store
        .leaves()
        .find(filter)
        .await?
        .try_collect()
        .await?;
    Ok(Json(leaves))
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateLeaveRequest>,
) -> Result<Json<LeaveRequest>, AppError> {
    if req.to_date < req.from_date {
        return Err(AppError::BadRequest(
            "to_date precedes from_date".to_string(),
        ));
    }

    let employee_id = parse_object_id(&req.employee_id)?;
    let mut leave = LeaveRequest::new(employee_id, req);
    let result = state.store.leaves().insert_one(&leave).await?;
    leave.id = result.inserted_id.as_object_id();
    Ok(Json(leave))
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateLeaveStatusRequest>,
) -> Result<Json<LeaveRequest>, AppError> {
    let id = parse_object_id(&id)?;
    let status = to_bson(&req.status)
        .map_err(|err| AppError::Internal(format!("status encoding failed: {err}")))?;

    let result = state
        .store
        .leaves()
        .update_one(doc! { "_id": id }, doc! { "$set": { "status": status } })
        .await?;
    if result.matched_count == 0 {
        return Err(AppError::NotFound);
    }

    state
        .store
        .leaves()
        .find_one(doc! { "_id": id })
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}
