//! Defines the endpoint for creating a new transaction.

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
    transaction::core::create_transaction,
};

/// A route handler for creating a new transaction from an untyped JSON
/// payload.
///
/// Responds with 201 and the stored transaction on success, 400 with the
/// full list of field errors on a rejected payload, or 404 when the payload
/// is well-formed but references an unknown user.
pub async fn create_transaction_endpoint<U, T>(
    State(mut state): State<AppState<U, T>>,
    Json(payload): Json<Value>,
) -> Response
where
    U: UserStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    match create_transaction(&payload, &state.user_store, &mut state.transaction_store) {
        Ok(transaction) => (StatusCode::CREATED, Json(transaction)).into_response(),
        Err(error) => {
            tracing::debug!("rejected transaction payload: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod create_transaction_endpoint_tests {
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{build_router, create_app_state, endpoints};

    async fn server_with_one_user() -> TestServer {
        let server =
            TestServer::new(build_router(create_app_state()));

        server
            .post(endpoints::USERS)
            .json(&json!({
                "name": "Akash Roy",
                "email": "akash@example.com",
                "accountType": "basic",
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        server
    }

    #[tokio::test]
    async fn creates_a_transaction_with_rounded_amount() {
        let server = server_with_one_user().await;

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "userId": "1",
                "amount": 99.6,
                "type": "Credit",
                "recipientId": "R1",
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        response.assert_json(&json!({
            "id": "1",
            "userId": "1",
            "amount": 100,
            "type": "credit",
            "recipientId": "R1",
        }));
    }

    #[tokio::test]
    async fn unknown_user_gets_404() {
        let server = server_with_one_user().await;

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "userId": "999",
                "amount": 10,
                "type": "debit",
                "recipientId": "R1",
            }))
            .await;

        response.assert_status_not_found();
        response.assert_json(&json!({ "error": "User not found" }));
    }

    #[tokio::test]
    async fn malformed_payload_gets_400_with_details() {
        let server = server_with_one_user().await;

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "userId": "1",
                "amount": "ninety-nine",
                "type": "transfer",
                "recipientId": "",
            }))
            .await;

        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(
            body["details"],
            json!([
                "amount must be a number",
                "type must be 'credit' or 'debit'",
                "Missing recipientId",
            ])
        );
    }

    #[tokio::test]
    async fn validation_failure_wins_over_unknown_user() {
        let server = server_with_one_user().await;

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "userId": "999",
                "amount": -1,
                "type": "debit",
                "recipientId": "R1",
            }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({
            "error": "Validation failed",
            "details": ["amount must be > 0"],
        }));
    }
}
