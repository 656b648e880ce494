//! Implements a struct that holds the state of the REST server.

use crate::stores::{TransactionStore, UserStore};

/// The state of the REST server.
///
/// Constructed explicitly by the binary or by a test and handed to
/// [build_router](crate::build_router); there is no ambient global state, so
/// every test gets its own isolated collections.
#[derive(Debug, Clone)]
pub struct AppState<U, T>
where
    U: UserStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    /// The store for managing [users](crate::models::User).
    pub user_store: U,
    /// The store for managing [transactions](crate::models::Transaction).
    pub transaction_store: T,
}

impl<U, T> AppState<U, T>
where
    U: UserStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    /// Create a new [AppState] from the given stores.
    pub fn new(user_store: U, transaction_store: T) -> Self {
        Self {
            user_store,
            transaction_store,
        }
    }
}
