//! Id-addressed access to a stored collection.

use serde::Serialize;
use serde::de::DeserializeOwned;

use certtrack_auth::User;
use certtrack_certifications::Certification;
use certtrack_core::{CertificationId, DomainError, Entity, UserId, entity::position_of};

use crate::collection::{CollectionStore, keys};
use crate::error::StorageError;
use crate::key_value::KeyValueStore;

/// A record type persisted as one collection under a fixed key.
pub trait StoredRecord: Entity + Serialize + DeserializeOwned {
    const KEY: &'static str;

    /// Give the record an identifier if it was stored without one.
    /// Returns `true` when an identifier was assigned.
    fn ensure_id(&mut self) -> bool;
}

impl StoredRecord for Certification {
    const KEY: &'static str = keys::CERTIFICATIONS;

    fn ensure_id(&mut self) -> bool {
        if self.id.is_nil() {
            self.id = CertificationId::new();
            true
        } else {
            false
        }
    }
}

impl StoredRecord for User {
    const KEY: &'static str = keys::ALL_USERS;

    fn ensure_id(&mut self) -> bool {
        if self.id.is_nil() {
            self.id = UserId::new();
            true
        } else {
            false
        }
    }
}

/// Load the collection for `T` for display, persisting identifiers for
/// legacy records.
///
/// Ids must be written back immediately, otherwise a later read would hand
/// out different ones and id-based edits would miss. Malformed data loads as
/// empty and is left untouched.
pub(crate) fn load<S, T>(store: &CollectionStore<S>) -> Result<Vec<T>, StorageError>
where
    S: KeyValueStore,
    T: StoredRecord,
{
    let mut items: Vec<T> = store.load_all(T::KEY);
    assign_missing_ids(store, &mut items)?;
    Ok(items)
}

/// Load the collection for `T` ahead of a rewrite.
///
/// Unlike [`load`], data that cannot be read fails the call instead of
/// loading as empty, so the following save cannot wipe it.
pub(crate) fn load_for_update<S, T>(store: &CollectionStore<S>) -> Result<Vec<T>, StorageError>
where
    S: KeyValueStore,
    T: StoredRecord,
{
    let mut items: Vec<T> = store.try_load_all(T::KEY)?;
    assign_missing_ids(store, &mut items)?;
    Ok(items)
}

fn assign_missing_ids<S, T>(
    store: &CollectionStore<S>,
    items: &mut [T],
) -> Result<(), StorageError>
where
    S: KeyValueStore,
    T: StoredRecord,
{
    let assigned = items
        .iter_mut()
        .map(T::ensure_id)
        .filter(|assigned| *assigned)
        .count();
    if assigned > 0 {
        tracing::info!(key = T::KEY, assigned, "assigned identifiers to legacy records");
        store.save_all(T::KEY, items)?;
    }
    Ok(())
}

pub(crate) fn save<S, T>(store: &CollectionStore<S>, items: &[T]) -> Result<(), StorageError>
where
    S: KeyValueStore,
    T: StoredRecord,
{
    store.save_all(T::KEY, items)
}

pub(crate) fn find<S, T>(store: &CollectionStore<S>, id: &T::Id) -> Result<T, StorageError>
where
    S: KeyValueStore,
    T: StoredRecord,
{
    let mut items = load::<S, T>(store)?;
    let idx = position_of(&items, id).ok_or(DomainError::NotFound)?;
    Ok(items.swap_remove(idx))
}

/// Remove the record with `id`, keeping the order of the rest.
pub(crate) fn remove<S, T>(store: &CollectionStore<S>, id: &T::Id) -> Result<T, StorageError>
where
    S: KeyValueStore,
    T: StoredRecord,
{
    let mut items = load_for_update::<S, T>(store)?;
    let idx = position_of(&items, id).ok_or(DomainError::NotFound)?;
    let removed = items.remove(idx);
    save(store, &items)?;
    Ok(removed)
}
