//! Application service: one method per user action.

use certtrack_auth::{
    AdminCredentials, Credentials, Registration, Session, User, login, search_users,
};
use certtrack_certifications::{
    AdminStats, Certification, CertificationStats, CertificationUpdate, CertificationView,
    ExpiryStatus, ExportFile, NewCertification, ViewMode, export, filter_and_sort,
};
use certtrack_core::{CertificationId, Clock, DomainError, UserId};
use certtrack_storage::{
    CertificationRepository, CollectionStore, KeyValueStore, SessionRepository, UserRepository,
};

use crate::error::TrackerError;

pub type TrackerResult<T> = Result<T, TrackerError>;

/// Certification tracker over a key-value store and a clock.
///
/// Every call reads the stored collections afresh and rewrites them whole
/// when it mutates; nothing is cached between calls.
pub struct Tracker<S, C> {
    store: CollectionStore<S>,
    clock: C,
    admin: AdminCredentials,
}

impl<S, C> Tracker<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    pub fn new(store: S, clock: C, admin: AdminCredentials) -> Self {
        Self {
            store: CollectionStore::new(store),
            clock,
            admin,
        }
    }

    fn certifications(&self) -> CertificationRepository<'_, S> {
        CertificationRepository::new(&self.store)
    }

    fn users(&self) -> UserRepository<'_, S> {
        UserRepository::new(&self.store)
    }

    fn sessions(&self) -> SessionRepository<'_, S> {
        SessionRepository::new(&self.store)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a new user. Registration does not log the user in.
    pub fn register(&self, registration: Registration) -> TrackerResult<User> {
        let user = User::register(registration, self.clock.now())?;
        self.users().register(user.clone())?;
        Ok(user)
    }

    pub fn login(&self, credentials: &Credentials) -> TrackerResult<Session> {
        let session = login(credentials, &self.admin)?;
        self.sessions().save(&session)?;
        Ok(session)
    }

    pub fn logout(&self) -> TrackerResult<()> {
        self.sessions().clear()?;
        tracing::info!("logged out");
        Ok(())
    }

    pub fn current_session(&self) -> Option<Session> {
        self.sessions().load()
    }

    fn require_admin(&self) -> TrackerResult<Session> {
        let session = self.current_session().ok_or(DomainError::Unauthorized)?;
        session.require_admin()?;
        Ok(session)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Certifications
    // ─────────────────────────────────────────────────────────────────────────

    pub fn add_certification(&self, input: NewCertification) -> TrackerResult<Certification> {
        let cert = Certification::create(input, self.clock.now())?;
        self.certifications().add(cert.clone())?;
        Ok(cert)
    }

    pub fn edit_certification(
        &self,
        id: &CertificationId,
        update: CertificationUpdate,
    ) -> TrackerResult<Certification> {
        Ok(self.certifications().update(id, update)?)
    }

    pub fn delete_certification(&self, id: &CertificationId) -> TrackerResult<Certification> {
        Ok(self.certifications().delete(id)?)
    }

    fn view(&self, mode: ViewMode) -> TrackerResult<Vec<CertificationView>> {
        let certs = self.certifications().list()?;
        Ok(filter_and_sort(&certs, self.clock.now(), mode))
    }

    /// Every certification in stored order, with its status.
    pub fn my_certifications(&self) -> TrackerResult<Vec<CertificationView>> {
        self.view(ViewMode::AllWithFilter(None))
    }

    pub fn expiring_soon(&self) -> TrackerResult<Vec<CertificationView>> {
        self.view(ViewMode::ExpiringSoon)
    }

    pub fn renewal_reminders(&self) -> TrackerResult<Vec<CertificationView>> {
        self.view(ViewMode::Reminder)
    }

    pub fn dashboard_stats(&self) -> TrackerResult<CertificationStats> {
        let certs = self.certifications().list()?;
        Ok(CertificationStats::compute(&certs, self.clock.now()))
    }

    pub fn export_all(&self) -> TrackerResult<ExportFile> {
        let certs = self.certifications().list()?;
        let file = export::export_all(&certs, self.clock.today())?;
        tracing::info!(count = file.count, file_name = %file.file_name, "exported certifications");
        Ok(file)
    }

    pub fn export_selected(&self, selection: &[CertificationId]) -> TrackerResult<ExportFile> {
        let certs = self.certifications().list()?;
        let file = export::export_selected(&certs, selection, self.clock.today())?;
        tracing::info!(count = file.count, file_name = %file.file_name, "exported certifications");
        Ok(file)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Admin
    // ─────────────────────────────────────────────────────────────────────────

    pub fn admin_stats(&self) -> TrackerResult<AdminStats> {
        self.require_admin()?;
        Ok(AdminStats {
            total_users: self.users().list()?.len(),
            certifications: self.dashboard_stats()?,
        })
    }

    /// All certifications, optionally narrowed to one status.
    pub fn all_certifications(
        &self,
        filter: Option<ExpiryStatus>,
    ) -> TrackerResult<Vec<CertificationView>> {
        self.require_admin()?;
        self.view(ViewMode::AllWithFilter(filter))
    }

    pub fn expired_certifications(&self) -> TrackerResult<Vec<CertificationView>> {
        self.all_certifications(Some(ExpiryStatus::Expired))
    }

    /// Registered users matching `search` (blank matches everyone).
    pub fn list_users(&self, search: &str) -> TrackerResult<Vec<User>> {
        self.require_admin()?;
        let users = self.users().list()?;
        Ok(search_users(&users, search).into_iter().cloned().collect())
    }

    pub fn delete_user(&self, id: &UserId) -> TrackerResult<User> {
        let session = self.require_admin()?;
        let removed = self.users().delete(id)?;
        tracing::info!(user_id = %id, by = %session.email, "admin deleted user");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certtrack_core::FixedClock;
    use certtrack_storage::InMemoryKeyValueStore;
    use chrono::NaiveDate;

    fn tracker() -> Tracker<InMemoryKeyValueStore, FixedClock> {
        Tracker::new(
            InMemoryKeyValueStore::new(),
            FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            AdminCredentials::default(),
        )
    }

    fn login_as(tracker: &Tracker<InMemoryKeyValueStore, FixedClock>, email: &str, password: &str) {
        tracker
            .login(&Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .unwrap();
    }

    #[test]
    fn admin_operations_need_an_admin_session() {
        let tracker = tracker();
        assert!(matches!(
            tracker.admin_stats(),
            Err(TrackerError::Domain(DomainError::Unauthorized))
        ));

        login_as(&tracker, "someone@example.com", "whatever");
        assert!(matches!(
            tracker.list_users(""),
            Err(TrackerError::Domain(DomainError::Unauthorized))
        ));

        login_as(&tracker, "admin@gmail.com", "admin@123");
        assert_eq!(tracker.admin_stats().unwrap(), AdminStats::default());
    }

    #[test]
    fn missing_certification_is_not_found() {
        let tracker = tracker();
        let err = tracker.delete_certification(&CertificationId::new()).unwrap_err();
        assert_eq!(err.as_domain(), Some(&DomainError::NotFound));
    }

    #[test]
    fn logout_clears_session() {
        let tracker = tracker();
        login_as(&tracker, "admin@gmail.com", "admin@123");
        assert!(tracker.current_session().is_some());
        tracker.logout().unwrap();
        assert_eq!(tracker.current_session(), None);
    }
}
