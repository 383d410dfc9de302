//! User repository (`"allUsers"` and `"user"`).

use certtrack_auth::User;
use certtrack_core::{DomainError, UserId};

use crate::collection::{CollectionStore, keys};
use crate::error::StorageError;
use crate::key_value::KeyValueStore;
use crate::records;

pub struct UserRepository<'a, S> {
    store: &'a CollectionStore<S>,
}

impl<'a, S> UserRepository<'a, S>
where
    S: KeyValueStore,
{
    pub fn new(store: &'a CollectionStore<S>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<User>, StorageError> {
        records::load(self.store)
    }

    /// Append a newly registered user and remember them as the current user.
    ///
    /// Emails are unique across the directory.
    pub fn register(&self, user: User) -> Result<(), StorageError> {
        let mut users: Vec<User> = records::load_for_update(self.store)?;
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(DomainError::conflict("email already registered").into());
        }

        tracing::info!(user_id = %user.id, "registered user");
        users.push(user.clone());
        records::save(self.store, &users)?;
        self.store.save_one(keys::CURRENT_USER, &user)
    }

    pub fn delete(&self, id: &UserId) -> Result<User, StorageError> {
        let removed = records::remove::<S, User>(self.store, id)?;
        tracing::info!(user_id = %id, "deleted user");
        Ok(removed)
    }

    /// The user stored under `"user"`, if any.
    pub fn current_user(&self) -> Option<User> {
        self.store.load_one(keys::CURRENT_USER)
    }
}
