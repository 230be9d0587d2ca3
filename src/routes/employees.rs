//! Employee CRUD endpoints.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use serde_json::json;

use crate::{
    error::AppError,
    models::employee::{
        CreateEmployeeRequest, Employee, ListEmployeesQuery, UpdateEmployeeRequest,
    },
    routes::parse_object_id,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(remove))
}

async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListEmployeesQuery>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let mut filter = doc! {};
    if let Some(department) = query.department {
        filter.insert("department_id", parse_object_id(&department)?);
    }

    let employees: Vec<Employee> = state
        .store
        .employees()
        .find(filter)
        .await?
        .try_collect()
        .await?;
    Ok(Json(employees))
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Json<Employee>, AppError> {
    let department_id = req
        .department_id
        .as_deref()
        .map(parse_object_id)
        .transpose()?;

    let mut employee = Employee::new(req, department_id);
    let result = state.store.employees().insert_one(&employee).await?;
    employee.id = result.inserted_id.as_object_id();
    Ok(Json(employee))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, AppError> {
    let id = parse_object_id(&id)?;
    state
        .store
        .employees()
        .find_one(doc! { "_id": id })
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<Employee>, AppError> {
    let id = parse_object_id(&id)?;

    let mut changes = Document::new();
    if let Some(name) = req.name {
        changes.insert("name", name);
    }
    if let Some(email) = req.email {
        changes.insert("email", email);
    }
    if let Some(department) = req.department_id {
        changes.insert("department_id", parse_object_id(&department)?);
    }
    if let Some(position) = req.position {
        changes.insert("position", position);
    }
    if let Some(active) = req.active {
        changes.insert("active", active);
    }
    if changes.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    let result = state
        .store
        .employees()
        .update_one(doc! { "_id": id }, doc! { "$set": changes })
        .await?;
    if result.matched_count == 0 {
        return Err(AppError::NotFound);
    }

    state
        .store
        .employees()
        .find_one(doc! { "_id": id })
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_object_id(&id)?;
    let result = state
        .store
        .employees()
        .delete_one(doc! { "_id": id })
        .await?;
    if result.deleted_count == 0 {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({ "success": true })))
}
