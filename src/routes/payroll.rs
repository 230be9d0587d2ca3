//! Payroll endpoints.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use futures::TryStreamExt;
use mongodb::bson::doc;

use crate::{
    error::AppError,
    models::payroll::{CreatePayrollRequest, ListPayrollQuery, PayrollEntry},
    routes::parse_object_id,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list).post(create))
}

async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListPayrollQuery>,
) -> Result<Json<Vec<PayrollEntry>>, AppError> {
    let mut filter = doc! {};
    if let Some(employee) = query.employee {
        filter.insert("employee_id", parse_object_id(&employee)?);
    }
    if let Some(month) = query.month {
        filter.insert("month", month);
    }

    let entries: Vec<PayrollEntry> = state
        .store
        .payroll()
        .find(filter)
        .await?
        .try_collect()
        .await?;
    Ok(Json(entries))
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreatePayrollRequest>,
) -> Result<Json<PayrollEntry>, AppError> {
    let employee_id = parse_object_id(&req.employee_id)?;

    let existing = state
        .store
        .payroll()
        .find_one(doc! { "employee_id": employee_id, "month": &req.month })
        .await?;
    if existing.is_some() {
        return Err(AppError::BadRequest(
            "Payroll entry already exists for this month".to_string(),
        ));
    }

    let mut entry = PayrollEntry::new(employee_id, req);
    let result = state.store.payroll().insert_one(&entry).await?;
    entry.id = result.inserted_id.as_object_id();
    Ok(Json(entry))
}
