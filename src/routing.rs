//! Application router configuration mapping the REST API and static UI
//! routes.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::services::{ServeDir, ServeFile};

use crate::{
    endpoints,
    logging::logging_middleware,
    state::AppState,
    stores::{TransactionStore, UserStore},
    transaction::{create_transaction_endpoint, list_transactions_endpoint},
    user::{create_user_endpoint, get_user_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router<U, T>(state: AppState<U, T>) -> Router
where
    U: UserStore + Clone + Send + Sync + 'static,
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::USERS, post(create_user_endpoint::<U, T>))
        .route(endpoints::USER, get(get_user_endpoint::<U, T>))
        .route(
            endpoints::TRANSACTIONS,
            post(create_transaction_endpoint::<U, T>),
        )
        .route(
            endpoints::USER_TRANSACTIONS,
            get(list_transactions_endpoint::<U, T>),
        )
        .route_service(endpoints::ROOT, ServeFile::new("static/index.html"))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .layer(middleware::from_fn(logging_middleware))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The JSON 404 response for routes the API does not define.
async fn get_404_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}
