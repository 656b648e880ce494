//! The in-memory user store.

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    models::{NewUser, User, UserId},
    stores::UserStore,
};

/// Keeps users in a process-local vector for the lifetime of the server.
///
/// Cloning the store produces another handle to the same collection, which
/// is how the router state and the request handlers share it.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryUserStore {
    /// Create an empty user store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryUserStore {
    /// Assign the next sequential ID and append the user.
    ///
    /// The ID is the collection length plus one, as a decimal string. This
    /// is collision-free only because records are never deleted, and the ID
    /// must be taken under the same lock as the append so parallel creates
    /// cannot mint the same ID.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    fn create(&mut self, new_user: NewUser) -> Result<User, Error> {
        let mut users = self.users.lock().unwrap();

        let id = UserId::new((users.len() + 1).to_string());
        let user = User {
            id,
            name: new_user.name,
            email: new_user.email,
            account_type: new_user.account_type,
        };
        users.push(user.clone());

        Ok(user)
    }

    /// Get the user with the given ID, or [Error::UserNotFound] if no such
    /// user exists.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    fn get(&self, id: &UserId) -> Result<User, Error> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| &user.id == id)
            .cloned()
            .ok_or(Error::UserNotFound)
    }
}

#[cfg(test)]
mod memory_user_store_tests {
    use super::{MemoryUserStore, UserStore};
    use crate::{
        Error,
        models::{AccountType, NewUser, UserId},
    };

    fn test_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_owned(),
            email: "test@example.com".to_owned(),
            account_type: AccountType::Basic,
        }
    }

    #[test]
    fn assigns_sequential_string_ids() {
        let mut store = MemoryUserStore::new();

        let first = store.create(test_user("Akash Roy")).unwrap();
        let second = store.create(test_user("Priya James")).unwrap();

        assert_eq!(first.id.as_str(), "1");
        assert_eq!(second.id.as_str(), "2");
    }

    #[test]
    fn get_returns_the_stored_user() {
        let mut store = MemoryUserStore::new();
        let inserted = store.create(test_user("Akash Roy")).unwrap();

        let retrieved = store.get(&inserted.id).unwrap();

        assert_eq!(retrieved, inserted);
    }

    #[test]
    fn get_fails_with_non_existent_id() {
        let store = MemoryUserStore::new();

        assert_eq!(store.get(&UserId::new("42")), Err(Error::UserNotFound));
    }

    #[test]
    fn parallel_creates_assign_distinct_ids() {
        let store = MemoryUserStore::new();
        let thread_count = 8;

        let handles: Vec<_> = (0..thread_count)
            .map(|_| {
                let mut store = store.clone();
                std::thread::spawn(move || store.create(test_user("Akash Roy")).unwrap())
            })
            .collect();

        let mut ids: Vec<String> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().id.as_str().to_owned())
            .collect();

        ids.sort();
        ids.dedup();
        assert_eq!(
            ids.len(),
            thread_count,
            "want {thread_count} distinct ids, got {ids:?}"
        );

        let stored = store.users.lock().unwrap().len();
        assert_eq!(stored, thread_count, "want {thread_count} users, got {stored}");
    }

    #[test]
    fn clones_share_the_same_collection() {
        let mut store = MemoryUserStore::new();
        let handle = store.clone();

        let inserted = store.create(test_user("Akash Roy")).unwrap();

        assert_eq!(handle.get(&inserted.id), Ok(inserted));
    }
}
