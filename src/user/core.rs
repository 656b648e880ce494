//! Core logic for creating and fetching users, independent of the HTTP
//! layer.

use serde_json::Value;

use crate::{
    Error,
    models::{User, UserId},
    stores::UserStore,
    validation::validate_user,
};

/// Validate `payload` and insert the normalized user into `store`.
///
/// The create is all-or-nothing: a rejected payload never touches the store.
///
/// # Errors
///
/// Returns [Error::ValidationFailed] carrying every field error when the
/// payload is malformed.
pub fn create_user(payload: &Value, store: &mut impl UserStore) -> Result<User, Error> {
    let new_user = validate_user(payload).map_err(Error::ValidationFailed)?;

    store.create(new_user)
}

/// Get the user with the given ID.
///
/// # Errors
///
/// Returns [Error::UserNotFound] if `id` does not belong to a stored user.
pub fn get_user(id: &UserId, store: &impl UserStore) -> Result<User, Error> {
    store.get(id)
}
