//! Login session (`"userRole"` / `"userEmail"`).

use certtrack_auth::{Role, Session};

use crate::collection::{CollectionStore, keys};
use crate::error::StorageError;
use crate::key_value::KeyValueStore;

pub struct SessionRepository<'a, S> {
    store: &'a CollectionStore<S>,
}

impl<'a, S> SessionRepository<'a, S>
where
    S: KeyValueStore,
{
    pub fn new(store: &'a CollectionStore<S>) -> Self {
        Self { store }
    }

    /// The active session; `None` unless both role and email are stored.
    pub fn load(&self) -> Option<Session> {
        let role = Role::parse(&self.store.load_raw(keys::USER_ROLE)?)?;
        let email = self.store.load_raw(keys::USER_EMAIL)?;
        Some(Session { role, email })
    }

    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.store.save_raw(keys::USER_ROLE, session.role.as_str())?;
        self.store.save_raw(keys::USER_EMAIL, &session.email)
    }

    /// Forget the session and the remembered user.
    pub fn clear(&self) -> Result<(), StorageError> {
        for key in [keys::USER_ROLE, keys::USER_EMAIL, keys::CURRENT_USER] {
            self.store.remove(key)?;
        }
        Ok(())
    }
}
