//! API Handlers
//!
//! HTTP request handlers for each user service endpoint. Every handler other
//! than ping makes exactly one store call.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{CreateUserResponse, GetUserResponse, MessageResponse, User};
use crate::store::KeyValueStore;

/// Application state shared across all handlers.
///
/// Holds the store client injected at router construction.
#[derive(Clone)]
pub struct AppState {
    /// Shared key-value store
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    /// Creates a new AppState around an already shared store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Creates a new AppState taking ownership of a store.
    pub fn with_store(store: impl KeyValueStore + 'static) -> Self {
        Self::new(Arc::new(store))
    }
}

/// Reads a request body as a user record.
///
/// The `Content-Type` header is not checked; only the shape of the body is.
fn parse_user(body: &[u8]) -> Result<User> {
    User::from_json(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// Handler for GET /ping
pub async fn ping_handler() -> Json<MessageResponse> {
    Json(MessageResponse::pong())
}

/// Handler for POST /user/create
///
/// Mints a new id, stores the record under it and echoes both back.
pub async fn create_user_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateUserResponse>)> {
    let user = parse_user(&body)?;
    let sid = Uuid::new_v4().to_string();

    state
        .store
        .set(&sid, &user.to_stored()?)
        .await
        .inspect_err(|e| error!("Error inserting user {}: {}", sid, e))?;

    info!("User created: {}", sid);
    Ok((StatusCode::CREATED, Json(CreateUserResponse::new(sid, user))))
}

/// Handler for GET /user/:id
///
/// A missing key and a failed lookup both answer 404.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetUserResponse>> {
    let value = match state.store.get(&id).await {
        Ok(Some(value)) => value,
        Ok(None) => {
            debug!("User not found: {}", id);
            return Err(ApiError::NotFound(id));
        }
        Err(e) => {
            error!("Error reading user {}: {}", id, e);
            return Err(ApiError::NotFound(id));
        }
    };

    let user = User::from_stored(&value).map_err(|e| {
        error!("Error unmarshalling user {}: {}", id, e);
        ApiError::CorruptRecord(id.clone())
    })?;

    Ok(Json(GetUserResponse::new(id, user)))
}

/// Handler for PUT /user/update/:id
///
/// Overwrites whatever is stored under the id. A missing id is created.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<User>> {
    let user = parse_user(&body)?;

    state
        .store
        .set(&id, &user.to_stored()?)
        .await
        .inspect_err(|e| error!("Error updating user {}: {}", id, e))?;

    info!("User updated: {}", id);
    Ok(Json(user))
}

/// Handler for DELETE /user/:id
///
/// Succeeds whether or not the id existed.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let removed = state
        .store
        .delete(&id)
        .await
        .inspect_err(|e| error!("Error deleting user {}: {}", id, e))?;

    if removed {
        info!("User deleted: {}", id);
    } else {
        debug!("Delete of unknown user: {}", id);
    }

    Ok(Json(MessageResponse::user_removed()))
}
