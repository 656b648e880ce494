//! Transaction creation and listing: the service logic and the route
//! handlers built on top of it.

pub mod core;
mod create_endpoint;
mod list_endpoint;

pub use create_endpoint::create_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
