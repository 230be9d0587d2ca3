//! Notification endpoints.

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};
use futures::TryStreamExt;
use mongodb::bson::doc;

use crate::{
    error::AppError,
    models::notification::{CreateNotificationRequest, ListNotificationsQuery, Notification},
    routes::parse_object_id,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id/read", patch(mark_read))
}

async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let mut filter = doc! {};
    if let Some(recipient) = query.recipient {
        filter.insert("recipient_id", parse_object_id(&recipient)?);
    }
    if query.unread == Some(true) {
        filter.insert("read", false);
    }

    let notifications: Vec<Notification> = state
        .store
        .notifications()
        .find(filter)
        .await?
        .try_collect()
        .await?;
    Ok(Json(notifications))
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<Json<Notification>, AppError> {
    let recipient_id = parse_object_id(&req.recipient_id)?;
    let mut notification = Notification::new(recipient_id, req);
    let result = state
        .store
        .notifications()
        .insert_one(&notification)
        .await?;
    notification.id = result.inserted_id.as_object_id();
    Ok(Json(notification))
}

async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Notification>, AppError> {
    let id = parse_object_id(&id)?;
    let result = state
        .store
        .notifications()
        .update_one(doc! { "_id": id }, doc! { "$set": { "read": true } })
        .await?;
    if result.matched_count == 0 {
        return Err(AppError::NotFound);
    }

    state
        .store
        .notifications()
        .find_one(doc! { "_id": id })
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}
