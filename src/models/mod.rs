//! The domain models for the two resource kinds, User and Transaction.
//!
//! Records are immutable once created: there are no update or delete
//! operations anywhere in the application, which is what makes the
//! sequential ID scheme in the stores collision-free.

mod transaction;
mod user;

pub use transaction::{NewTransaction, Transaction, TransactionId, TransactionType};
pub use user::{AccountType, NewUser, User, UserId};
