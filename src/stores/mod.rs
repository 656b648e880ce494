//! Defines the store traits for the two resource kinds and the in-memory
//! backend that implements them.

mod memory;
mod transaction;
mod user;

pub use memory::{
    MemoryAppState, MemoryTransactionStore, MemoryUserStore, create_app_state,
};
pub use transaction::TransactionStore;
pub use user::UserStore;
