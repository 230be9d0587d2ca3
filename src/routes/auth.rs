//! Login, logout, and current-user endpoints backed by JWT cookies.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    error::AppError,
    models::user::{LoginRequest, PublicUser},
    routes::parse_object_id,
    AppState,
};

const TOKEN_COOKIE: &str = "token";
const TOKEN_TTL_DAYS: i64 = 7;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, hex-encoded ObjectId.
    pub sub: String,
    pub email: String,
    pub role: String,
    pub exp: usize,
}

/// Sign a token for the given user identity.
pub fn issue_token(user: &PublicUser, secret: &str) -> Result<String, AppError> {
    let claims = Claims {
        sub: user.id.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        exp: (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| AppError::Internal(format!("token signing failed: {err}")))
}

/// Decode and validate a token. Any failure is an authorization failure.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}

/// Token from the auth cookie, falling back to `Authorization: Bearer`.
fn extract_token(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    if let Some(cookie) = jar.get(TOKEN_COOKIE) {
        return Some(cookie.value().to_string());
    }
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned)
}

async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<serde_json::Value>), AppError> {
    let user = state
        .store
        .users()
        .find_one(doc! { "email": &req.email })
        .await?
        .ok_or(AppError::Unauthorized)?;

    let valid = bcrypt::verify(&req.password, &user.password_hash)
        .map_err(|_| AppError::Unauthorized)?;
    if !valid {
        return Err(AppError::Unauthorized);
    }

    let public = user.public();
    let token = issue_token(&public, &state.config.jwt_secret)?;

    let cookie = Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .build();

    Ok((jar.add(cookie), Json(json!({ "user": public }))))
}

async fn logout(jar: CookieJar) -> (CookieJar, Json<serde_json::Value>) {
    let mut removal = Cookie::from(TOKEN_COOKIE);
    removal.set_path("/");
    (jar.remove(removal), Json(json!({ "success": true })))
}

async fn me(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<Json<PublicUser>, AppError> {
    let token = extract_token(&jar, &headers).ok_or(AppError::Unauthorized)?;
    let claims = verify_token(&token, &state.config.jwt_secret)?;

    let id = parse_object_id(&claims.sub).map_err(|_| AppError::Unauthorized)?;
    let user = state
        .store
        .users()
        .find_one(doc! { "_id": id })
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(user.public()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> PublicUser {
        PublicUser {
            id: mongodb::bson::oid::ObjectId::new().to_hex(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn issued_tokens_verify_with_the_same_secret() {
        let user = sample_user();
        let token = issue_token(&user, "secret").unwrap();
        let claims = verify_token(&token, "secret").unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn tokens_signed_with_a_different_secret_are_rejected() {
        let token = issue_token(&sample_user(), "secret").unwrap();
        assert!(matches!(
            verify_token(&token, "other-secret"),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        assert!(matches!(
            verify_token("not.a.jwt", "secret"),
            Err(AppError::Unauthorized)
        ));
    }
}
