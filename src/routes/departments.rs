//! Department endpoints.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use futures::TryStreamExt;
use mongodb::bson::doc;

use crate::{
    error::AppError,
    models::department::{CreateDepartmentRequest, Department},
    routes::parse_object_id,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Department>>, AppError> {
    let departments: Vec<Department> = state
        .store
        .departments()
        .find(doc! {})
        .await?
        .try_collect()
        .await?;
    Ok(Json(departments))
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<Json<Department>, AppError> {
    let mut department = Department::new(req);
    let result = state.store.departments().insert_one(&department).await?;
    department.id = result.inserted_id.as_object_id();
    Ok(Json(department))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Department>, AppError> {
    let id = parse_object_id(&id)?;
    state
        .store
        .departments()
        .find_one(doc! { "_id": id })
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}
