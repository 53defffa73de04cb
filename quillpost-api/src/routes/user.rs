/// Account endpoints
///
/// - `POST /api/v1/user/signup` - Create an account, returns a token
/// - `POST /api/v1/user/signin` - Exchange credentials for a token
///
/// Both respond with the bare JWT as `text/plain`.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    validation::{sanitize_and_validate, CredentialsPayload, SignInInput, SignUpInput},
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use quillpost_shared::{
    auth::{jwt, password},
    db::errors::{classify, StoreErrorKind},
    models::user::{CreateUser, User},
};
use tracing::info;

/// Message for every failed signin, whatever the cause
pub const INCORRECT_CREDENTIALS: &str = "Incorrect credentials";

/// Runs Argon2 hashing on the blocking pool
async fn hash_off_runtime(plain: String) -> ApiResult<String> {
    tokio::task::spawn_blocking(move || password::hash_password(&plain))
        .await
        .map_err(|e| ApiError::InternalError(format!("Hashing task failed: {}", e)))?
        .map_err(ApiError::from)
}

async fn verify_off_runtime(plain: String, hash: String) -> ApiResult<bool> {
    tokio::task::spawn_blocking(move || password::verify_password(&plain, &hash))
        .await
        .map_err(|e| ApiError::InternalError(format!("Verification task failed: {}", e)))?
        .map_err(ApiError::from)
}

/// Register a new user
///
/// ```text
/// POST /api/v1/user/signup
/// Content-Type: application/json
///
/// { "username": "ada", "password": "secret1", "name": "Ada Lovelace" }
/// ```
///
/// # Errors
///
/// - `422`: Validation failed
/// - `409`: Username already exists
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsPayload>, JsonRejection>,
) -> ApiResult<String> {
    let Json(payload) = payload?;
    let input: SignUpInput = sanitize_and_validate(&payload)?;

    let password_hash = hash_off_runtime(input.password).await?;

    let user = User::create(
        &state.db,
        CreateUser {
            username: input.username,
            password_hash,
            name: input.name,
        },
    )
    .await
    .map_err(|e| match classify(&e) {
        StoreErrorKind::UniqueViolation => ApiError::Conflict("User already exists".to_string()),
        _ => ApiError::from_write_error(e),
    })?;

    info!(user_id = user.id, "User signed up");

    Ok(jwt::issue_token(user.id, state.jwt_secret(), state.token_lifetime())?)
}

/// Authenticate and receive a token
///
/// ```text
/// POST /api/v1/user/signin
/// Content-Type: application/json
///
/// { "username": "ada", "password": "secret1" }
/// ```
///
/// # Errors
///
/// - `422`: Validation failed
/// - `403`: Unknown username or wrong password (indistinguishable, same hashing cost)
pub async fn signin(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsPayload>, JsonRejection>,
) -> ApiResult<String> {
    let Json(payload) = payload?;
    let input: SignInInput = sanitize_and_validate(&payload)?;

    let user = User::find_by_username(&state.db, &input.username).await?;

    // Unknown usernames still pay for one verification
    let stored_hash = user
        .as_ref()
        .map(|u| u.password_hash.clone())
        .unwrap_or_else(|| password::UNMATCHABLE_HASH.to_string());
    let matches = verify_off_runtime(input.password, stored_hash).await?;

    let user = match user {
        Some(user) if matches => user,
        _ => return Err(ApiError::Unauthenticated(INCORRECT_CREDENTIALS.to_string())),
    };

    info!(user_id = user.id, "User signed in");

    Ok(jwt::issue_token(user.id, state.jwt_secret(), state.token_lifetime())?)
}
