//! User creation and retrieval: the service logic and the route handlers
//! built on top of it.

pub mod core;
mod create_endpoint;
mod get_endpoint;

pub use create_endpoint::create_user_endpoint;
pub use get_endpoint::get_user_endpoint;
