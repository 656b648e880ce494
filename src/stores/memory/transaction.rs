//! The in-memory transaction store.

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    models::{NewTransaction, Transaction, TransactionId, UserId},
    stores::TransactionStore,
};

/// Keeps transactions in a process-local vector for the lifetime of the
/// server.
///
/// Cloning the store produces another handle to the same collection.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransactionStore {
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl MemoryTransactionStore {
    /// Create an empty transaction store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for MemoryTransactionStore {
    /// Assign the next sequential ID and append the transaction.
    ///
    /// The ID sequence is the transaction collection's own; it has no
    /// relation to user IDs. Taken under the same lock as the append.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let mut transactions = self.transactions.lock().unwrap();

        let id = TransactionId::new((transactions.len() + 1).to_string());
        let transaction = Transaction {
            id,
            user_id: new_transaction.user_id,
            amount: new_transaction.amount,
            kind: new_transaction.kind,
            recipient_id: new_transaction.recipient_id,
        };
        transactions.push(transaction.clone());

        Ok(transaction)
    }

    /// The transactions whose user ID matches `user_id` exactly, in the
    /// order they were created.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    fn for_user(&self, user_id: &UserId) -> Result<Vec<Transaction>, Error> {
        let transactions = self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|transaction| &transaction.user_id == user_id)
            .cloned()
            .collect();

        Ok(transactions)
    }
}
