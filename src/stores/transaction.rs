//! Defines the transaction store trait.

use crate::{
    Error,
    models::{NewTransaction, Transaction, UserId},
};

/// Handles the creation and retrieval of transactions.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    ///
    /// The transaction collection keeps its own ID sequence, independent of
    /// the user collection. The same atomicity requirement as
    /// [UserStore::create](crate::stores::UserStore::create) applies.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve the transactions created for `user_id`, in insertion order.
    ///
    /// An unknown `user_id` yields an empty list, never an error: whether
    /// the user exists is not this trait's concern.
    fn for_user(&self, user_id: &UserId) -> Result<Vec<Transaction>, Error>;
}
