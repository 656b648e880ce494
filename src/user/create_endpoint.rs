//! Defines the endpoint for creating a new user.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{
    state::AppState,
    stores::{TransactionStore, UserStore},
    user::core::create_user,
};

/// A route handler for creating a new user from an untyped JSON payload.
///
/// Responds with 201 and the stored user on success, or 400 with the full
/// list of field errors on a rejected payload.
pub async fn create_user_endpoint<U, T>(
    State(mut state): State<AppState<U, T>>,
    Json(payload): Json<Value>,
) -> Response
where
    U: UserStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    match create_user(&payload, &mut state.user_store) {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(error) => {
            tracing::debug!("rejected user payload: {error}");
            error.into_response()
        }
    }
}
