//! Task endpoints.

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};
use futures::TryStreamExt;
use mongodb::bson::{doc, to_bson};

use crate::{
    error::AppError,
    models::task::{CreateTaskRequest, ListTasksQuery, TaskItem, UpdateTaskStatusRequest},
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
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<TaskItem>>, AppError> {
    let mut filter = doc! {};
    if let Some(assignee) = query.assignee {
        filter.insert("assignee_id", parse_object_id(&assignee)?);
    }
    if let Some(status) = query.status {
        let status = to_bson(&status)
            .map_err(|err| AppError::Internal(format!("status encoding failed: {err}")))?;
        filter.insert("status", status);
    }

    let tasks: Vec<TaskItem> = state
        .store
        .tasks()
        .find(filter)
        .await?
        .try_collect()
        .await?;
    Ok(Json(tasks))
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<TaskItem>, AppError> {
    let assignee_id = req
        .assignee_id
        .as_deref()
        .map(parse_object_id)
        .transpose()?;

    let mut task = TaskItem::new(req, assignee_id);
    let result = state.store.tasks().insert_one(&task).await?;
    task.id = result.inserted_id.as_object_id();
    Ok(Json(task))
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskStatusRequest>,
) -> Result<Json<TaskItem>, AppError> {
    let id = parse_object_id(&id)?;
    let status = to_bson(&req.status)
        .map_err(|err| AppError::Internal(format!("status encoding failed: {err}")))?;

    let result = state
        .store
        .tasks()
        .update_one(doc! { "_id": id }, doc! { "$set": { "status": status } })
        .await?;
    if result.matched_count == 0 {
        return Err(AppError::NotFound);
    }

    state
        .store
        .tasks()
        .find_one(doc! { "_id": id })
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}
