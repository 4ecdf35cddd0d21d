//! Session persistence.
//!
//! One [`AuthBundle`] is persisted at a time, JSON-serialized into a
//! single storage slot. Storage access is best-effort: every failure
//! degrades to `None`/no-op with a warning rather than propagating.
//! Network-facing login/logout live on
//! [`crate::api::AuthClient`]; this module owns the storage half only.

mod backend;

pub use backend::{FileBackend, MemoryBackend, SessionBackend};

use crate::models::{AuthBundle, User};

/// Fail-soft store for the persisted session bundle.
pub struct Session {
    backend: Box<dyn SessionBackend>,
}

impl Session {
    /// Build a session over an explicit backend.
    pub fn new(backend: Box<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// Session backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    /// Session persisted under the user's home directory.
    ///
    /// Falls back to an in-memory slot (with a warning) when no home
    /// directory can be resolved.
    pub fn from_home() -> Self {
        match FileBackend::default_path() {
            Some(path) => Self::new(Box::new(FileBackend::new(path))),
            None => {
                tracing::warn!("No home directory found, session will not persist");
                Self::in_memory()
            }
        }
    }

    /// Read the persisted bundle.
    ///
    /// Returns `None` when the slot is absent, corrupt, or the storage
    /// medium is unavailable.
    pub fn get(&self) -> Option<AuthBundle> {
        let raw = match self.backend.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session slot");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(bundle) => Some(bundle),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to deserialize session bundle");
                None
            }
        }
    }

    /// Persist the bundle, overwriting any previous one.
    ///
    /// On storage failure the prior state is left untouched.
    pub fn set(&self, bundle: &AuthBundle) {
        let raw = match serde_json::to_string(bundle) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize session bundle");
                return;
            }
        };

        if let Err(e) = self.backend.write(&raw) {
            tracing::warn!(error = %e, "Failed to write session slot");
        }
    }

    /// Bearer token of the persisted session, if any.
    pub fn token(&self) -> Option<String> {
        self.get().map(|bundle| bundle.access_token)
    }

    /// Profile of the signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.get().map(|bundle| bundle.user)
    }

    /// Replace the user half of an existing bundle.
    ///
    /// Silently does nothing when no bundle is persisted.
    pub fn update_user(&self, user: User) {
        if let Some(mut bundle) = self.get() {
            bundle.user = user;
            self.set(&bundle);
        }
    }

    /// Delete the persisted session.
    pub fn clear(&self) {
        if let Err(e) = self.backend.clear() {
            tracing::warn!(error = %e, "Failed to clear session slot");
        }
    }

    /// A token is considered valid purely by presence; there is no
    /// expiry or server-side check.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample_user(id: &str) -> User {
        User {
            id: id.to_string(),
            email: "ana@example.com".to_string(),
            full_name: "Ana Torres".to_string(),
            username: "ana".to_string(),
            phone_number: "+52 555 0100".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1992, 4, 17).unwrap(),
            role: UserRole::User,
            is_active: true,
            avatar_url: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            created_by: None,
            updated_by: None,
        }
    }

    fn sample_bundle() -> AuthBundle {
        AuthBundle {
            access_token: "tok".to_string(),
            token_type: "bearer".to_string(),
            user: sample_user("1"),
        }
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let session = Session::in_memory();
        let bundle = sample_bundle();
        session.set(&bundle);
        assert_eq!(session.get(), Some(bundle));
    }

    #[test]
    fn test_clear_empties_slot() {
        let session = Session::in_memory();
        session.set(&sample_bundle());
        session.clear();
        assert_eq!(session.get(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_token_and_user_projections() {
        let session = Session::in_memory();
        assert_eq!(session.token(), None);
        assert_eq!(session.current_user(), None);

        session.set(&sample_bundle());
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert_eq!(session.current_user().unwrap().id, "1");
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_update_user_without_bundle_is_noop() {
        let session = Session::in_memory();
        session.update_user(sample_user("2"));
        assert_eq!(session.get(), None);
    }

    #[test]
    fn test_update_user_replaces_only_user() {
        let session = Session::in_memory();
        session.set(&sample_bundle());
        session.update_user(sample_user("2"));

        let bundle = session.get().unwrap();
        assert_eq!(bundle.user.id, "2");
        assert_eq!(bundle.access_token, "tok");
        assert_eq!(bundle.token_type, "bearer");
    }

    #[test]
    fn test_corrupt_slot_reads_none() {
        let backend = MemoryBackend::new();
        backend.write("not json at all").unwrap();
        let session = Session::new(Box::new(backend));
        assert_eq!(session.get(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_file_backend_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session::new(Box::new(FileBackend::new(path.clone())));
        session.set(&sample_bundle());
        drop(session);

        let reopened = Session::new(Box::new(FileBackend::new(path)));
        assert_eq!(reopened.get(), Some(sample_bundle()));
    }
}
