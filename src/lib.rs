//! Finmock is a mock fintech REST backend used as a fixture for end-to-end
//! test suites.
//!
//! It serves a JSON API for creating users, creating transactions tied to a
//! user, and listing or fetching them, plus a minimal HTML page for driving
//! the API by hand. Everything lives in process memory: nothing is persisted,
//! and the collections die with the process.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod endpoints;
mod logging;
mod models;
mod routing;
mod state;
mod stores;
mod transaction;
mod user;
mod validation;

pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use state::AppState;
pub use stores::{MemoryAppState, create_app_state};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// Both variants are expected, recoverable conditions: malformed input is a
/// normal case for a test fixture, not an internal failure.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A create request was rejected because one or more fields were
    /// malformed or out of range.
    ///
    /// Carries every field error in field order, not just the first one, so
    /// the client sees the complete list in one round trip.
    #[error("validation failed: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),

    /// The requested user does not exist in the store.
    #[error("User not found")]
    UserNotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::ValidationFailed(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Validation failed", "details": details })),
            )
                .into_response(),
            Error::UserNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "User not found" })),
            )
                .into_response(),
        }
    }
}
