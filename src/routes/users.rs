//! User account endpoints. Responses never include password hashes.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use futures::TryStreamExt;
use mongodb::bson::doc;

use crate::{
    error::AppError,
    models::user::{PublicUser, User},
    routes::parse_object_id,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/:id", get(get_one))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<PublicUser>>, AppError> {
    let users: Vec<User> = state
        .store
        .users()
        .find(doc! {})
        .await?
        .try_collect()
        .await?;
    Ok(Json(users.iter().map(User::public).collect()))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PublicUser>, AppError> {
    let id = parse_object_id(&id)?;
    state
        .store
        .users()
        .find_one(doc! { "_id": id })
        .await?
        .map(|user| Json(user.public()))
        .ok_or(AppError::NotFound)
}
