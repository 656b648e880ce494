//! Core logic for creating and listing transactions, independent of the
//! HTTP layer.

use serde_json::Value;

use crate::{
    Error,
    models::{Transaction, UserId},
    stores::{TransactionStore, UserStore},
    validation::validate_transaction,
};

/// Validate `payload`, check that the referenced user exists, and insert the
/// normalized transaction.
///
/// Validation runs first: a payload that both fails validation and names an
/// unknown user reports the validation failure, not the missing user. The
/// user check consults the store the validator never sees.
///
/// # Errors
///
/// Returns [Error::ValidationFailed] for a malformed payload, or
/// [Error::UserNotFound] when the payload is well-formed but its `userId`
/// does not exist.
pub fn create_transaction(
    payload: &Value,
    users: &impl UserStore,
    transactions: &mut impl TransactionStore,
) -> Result<Transaction, Error> {
    let new_transaction = validate_transaction(payload).map_err(Error::ValidationFailed)?;

    users.get(&new_transaction.user_id)?;

    transactions.create(new_transaction)
}

/// The transactions created for `user_id`, in insertion order.
///
/// The user's existence is deliberately not checked: listing for an unknown
/// user yields an empty list, not an error.
pub fn transactions_for_user(
    user_id: &UserId,
    store: &impl TransactionStore,
) -> Result<Vec<Transaction>, Error> {
    store.for_user(user_id)
}
