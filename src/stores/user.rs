//! Defines the user store trait.

use crate::{
    Error,
    models::{NewUser, User, UserId},
};

/// Handles the creation and retrieval of users.
pub trait UserStore {
    /// Create a new user in the store.
    ///
    /// Implementers must assign the next sequential ID and append the record
    /// as a single atomic step so that parallel creates cannot mint the same
    /// ID or lose an insert.
    fn create(&mut self, new_user: NewUser) -> Result<User, Error>;

    /// Get a user by their ID.
    ///
    /// Returns [Error::UserNotFound] if no user with the given ID exists.
    fn get(&self, id: &UserId) -> Result<User, Error>;
}
