//! Defines the endpoint for fetching a single user by ID.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    models::UserId,
    state::AppState,
    stores::{TransactionStore, UserStore},
    user::core::get_user,
};

/// A route handler for fetching the user with the ID in the request path.
///
/// Responds with 200 and the user on success, or 404 when no user has that
/// ID.
pub async fn get_user_endpoint<U, T>(
    State(state): State<AppState<U, T>>,
    Path(user_id): Path<String>,
) -> Response
where
    U: UserStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    match get_user(&UserId::new(user_id), &state.user_store) {
        Ok(user) => Json(user).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod get_user_endpoint_tests {
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{build_router, create_app_state, endpoints};

    fn new_test_server() -> TestServer {
        TestServer::new(build_router(create_app_state()))
    }

    #[tokio::test]
    async fn fetches_a_created_user() {
        let server = new_test_server();
        let created: Value = server
            .post(endpoints::USERS)
            .json(&json!({
                "name": "Akash Roy",
                "email": "akash@example.com",
                "accountType": "basic",
            }))
            .await
            .json();

        let id = created["id"].as_str().expect("want a string id");
        let response = server
            .get(&endpoints::format_endpoint(endpoints::USER, id))
            .await;

        response.assert_status_ok();
        response.assert_json(&created);
    }

    #[tokio::test]
    async fn unknown_id_gets_404() {
        let server = new_test_server();

        let response = server
            .get(&endpoints::format_endpoint(endpoints::USER, "999"))
            .await;

        response.assert_status_not_found();
        response.assert_json(&json!({ "error": "User not found" }));
    }
}
