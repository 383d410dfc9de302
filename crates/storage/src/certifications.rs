//! Certification repository (`"certs"`).

use certtrack_certifications::{Certification, CertificationUpdate};
use certtrack_core::CertificationId;

use crate::collection::CollectionStore;
use crate::error::StorageError;
use crate::key_value::KeyValueStore;
use crate::records;

/// Id-addressed CRUD over the stored certification list.
pub struct CertificationRepository<'a, S> {
    store: &'a CollectionStore<S>,
}

impl<'a, S> CertificationRepository<'a, S>
where
    S: KeyValueStore,
{
    pub fn new(store: &'a CollectionStore<S>) -> Self {
        Self { store }
    }

    /// All certifications in stored order.
    pub fn list(&self) -> Result<Vec<Certification>, StorageError> {
        records::load(self.store)
    }

    pub fn get(&self, id: &CertificationId) -> Result<Certification, StorageError> {
        records::find(self.store, id)
    }

    /// Append a certification.
    pub fn add(&self, certification: Certification) -> Result<(), StorageError> {
        let mut certs: Vec<Certification> = records::load_for_update(self.store)?;
        tracing::info!(certification_id = %certification.id, "adding certification");
        certs.push(certification);
        records::save(self.store, &certs)
    }

    /// Apply an edit to the certification with `id`; its position is kept.
    pub fn update(
        &self,
        id: &CertificationId,
        update: CertificationUpdate,
    ) -> Result<Certification, StorageError> {
        let mut certs: Vec<Certification> = records::load_for_update(self.store)?;
        let cert = certs
            .iter_mut()
            .find(|cert| cert.id == *id)
            .ok_or(certtrack_core::DomainError::NotFound)?;
        cert.apply_update(update)?;
        let updated = cert.clone();

        records::save(self.store, &certs)?;
        tracing::info!(certification_id = %id, "updated certification");
        Ok(updated)
    }

    pub fn delete(&self, id: &CertificationId) -> Result<Certification, StorageError> {
        let removed = records::remove::<S, Certification>(self.store, id)?;
        tracing::info!(certification_id = %id, "deleted certification");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::keys;
    use crate::key_value::InMemoryKeyValueStore;
    use certtrack_core::DomainError;
    use chrono::{TimeZone, Utc};

    fn cert(name: &str) -> Certification {
        Certification {
            id: CertificationId::new(),
            name: name.to_string(),
            issuer: "Issuer".to_string(),
            expiry_date: "2025-01-01".to_string(),
            attached_file_name: None,
            added_on: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        }
    }

    fn names(certs: &[Certification]) -> Vec<&str> {
        certs.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn add_list_delete_by_id() {
        let store = CollectionStore::new(InMemoryKeyValueStore::new());
        let repo = CertificationRepository::new(&store);

        let (a, b, c) = (cert("a"), cert("b"), cert("c"));
        let b_id = b.id;
        for cert in [a, b, c] {
            repo.add(cert).unwrap();
        }
        assert_eq!(names(&repo.list().unwrap()), vec!["a", "b", "c"]);

        let removed = repo.delete(&b_id).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(names(&repo.list().unwrap()), vec!["a", "c"]);

        assert!(matches!(
            repo.delete(&b_id),
            Err(StorageError::Domain(DomainError::NotFound))
        ));
    }

    #[test]
    fn update_keeps_position_and_validates() {
        let store = CollectionStore::new(InMemoryKeyValueStore::new());
        let repo = CertificationRepository::new(&store);
        let (a, b) = (cert("a"), cert("b"));
        let a_id = a.id;
        repo.add(a).unwrap();
        repo.add(b).unwrap();

        let updated = repo
            .update(
                &a_id,
                CertificationUpdate {
                    name: "a2".to_string(),
                    issuer: "Issuer".to_string(),
                    expiry_date: "2026-02-02".to_string(),
                    attached_file_name: None,
                },
            )
            .unwrap();
        assert_eq!(updated.expiry_date, "2026-02-02");
        assert_eq!(names(&repo.list().unwrap()), vec!["a2", "b"]);

        let err = repo
            .update(
                &a_id,
                CertificationUpdate {
                    name: String::new(),
                    ..CertificationUpdate::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, StorageError::Domain(DomainError::Validation(_))));
        assert_eq!(repo.get(&a_id).unwrap().name, "a2");
    }

    #[test]
    fn legacy_records_get_stable_ids() {
        let store = CollectionStore::new(InMemoryKeyValueStore::new());
        store
            .save_raw(
                keys::CERTIFICATIONS,
                concat!(
                    r#"[{"name":"old","issuer":"x","date":"2024-01-10","file":"","#,
                    r#""addedOn":"2023-01-01T00:00:00Z"}]"#,
                ),
            )
            .unwrap();
        let repo = CertificationRepository::new(&store);

        let first = repo.list().unwrap();
        assert!(!first[0].id.is_nil());
        let second = repo.list().unwrap();
        assert_eq!(first[0].id, second[0].id);

        repo.delete(&first[0].id).unwrap();
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn record_without_added_on_keeps_the_collection_readable() {
        let store = CollectionStore::new(InMemoryKeyValueStore::new());
        store
            .save_raw(
                keys::CERTIFICATIONS,
                concat!(
                    r#"[{"name":"A","issuer":"x","date":"2024-01-10","file":"","#,
                    r#""addedOn":"2023-01-01T00:00:00Z"},"#,
                    r#"{"name":"B","issuer":"y","date":"2024-02-10","file":""}]"#,
                ),
            )
            .unwrap();
        let repo = CertificationRepository::new(&store);

        let loaded = repo.list().unwrap();
        assert_eq!(names(&loaded), vec!["A", "B"]);
        assert_eq!(loaded[1].added_on, None);

        repo.add(cert("C")).unwrap();
        assert_eq!(names(&repo.list().unwrap()), vec!["A", "B", "C"]);
    }

    #[test]
    fn malformed_collection_is_never_overwritten() {
        let store = CollectionStore::new(InMemoryKeyValueStore::new());
        let garbage = r#"[{"name":"A","issuer":"#;
        store.save_raw(keys::CERTIFICATIONS, garbage).unwrap();
        let repo = CertificationRepository::new(&store);

        // Views still read it as empty.
        assert!(repo.list().unwrap().is_empty());

        assert!(matches!(repo.add(cert("C")), Err(StorageError::Serialization(_))));
        assert!(matches!(
            repo.update(&CertificationId::new(), CertificationUpdate::default()),
            Err(StorageError::Serialization(_))
        ));
        assert!(matches!(
            repo.delete(&CertificationId::new()),
            Err(StorageError::Serialization(_))
        ));
        assert_eq!(store.load_raw(keys::CERTIFICATIONS).as_deref(), Some(garbage));
    }
}
