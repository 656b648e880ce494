//! Contains the in-memory backend for the store traits and a convenience
//! alias and constructor for an [AppState] that uses it.

mod transaction;
mod user;

pub use transaction::MemoryTransactionStore;
pub use user::MemoryUserStore;

use crate::state::AppState;

/// An alias for an [AppState] that keeps all records in process memory.
pub type MemoryAppState = AppState<MemoryUserStore, MemoryTransactionStore>;

/// Creates an [AppState] instance backed by empty in-memory collections.
///
/// Each call produces independent collections, so tests can construct their
/// own state and run in parallel without sharing records.
pub fn create_app_state() -> MemoryAppState {
    AppState::new(MemoryUserStore::new(), MemoryTransactionStore::new())
}
