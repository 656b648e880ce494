//! Defines the endpoint for listing the transactions created for a user.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    models::UserId,
    state::AppState,
    stores::{TransactionStore, UserStore},
    transaction::core::transactions_for_user,
};

/// A route handler for listing the transactions of the user in the request
/// path, in the order they were created.
///
/// Always responds with 200: an unknown user yields an empty array rather
/// than an error.
pub async fn list_transactions_endpoint<U, T>(
    State(state): State<AppState<U, T>>,
    Path(user_id): Path<String>,
) -> Response
where
    U: UserStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    match transactions_for_user(&UserId::new(user_id), &state.transaction_store) {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => error.into_response(),
    }
}
