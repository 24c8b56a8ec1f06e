//! Admin login guard.
//!
//! The login state is a flag in shared storage - the literal string
//! `"true"` under `isAdminLoggedIn`, matching the original storage format -
//! so every open context agrees on whether an admin is signed in. The
//! [`AdminSession`] capability token is how that boundary is enforced in
//! code: admin-only operations take `&AdminSession`, and the only way to
//! obtain one is through the guard.

use std::sync::Arc;

use tracing::{error, info};

use tabletap_store::{ChangeEvent, ChangeNotifier, KeyValueStorage, keys};

const LOGGED_IN: &str = "true";

/// Capability token proving an admin is signed in. Not constructible
/// outside this module.
#[derive(Debug, Clone)]
pub struct AdminSession(());

/// Reads and writes the shared login flag.
pub struct SessionGuard {
    storage: Arc<dyn KeyValueStorage>,
    notifier: ChangeNotifier,
}

impl SessionGuard {
    /// Create a guard over the shared storage and bus.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>, notifier: ChangeNotifier) -> Self {
        Self { storage, notifier }
    }

    /// Sign in: persist the flag and mint a session token.
    ///
    /// A storage failure is logged and the token is still minted - the
    /// current context is signed in, other contexts just will not see it.
    pub fn login(&self) -> AdminSession {
        let old_value = self.storage.read(keys::IS_ADMIN_LOGGED_IN).ok().flatten();
        match self.storage.write(keys::IS_ADMIN_LOGGED_IN, LOGGED_IN) {
            Ok(()) => {
                self.notifier.publish(&ChangeEvent {
                    key: keys::IS_ADMIN_LOGGED_IN.to_owned(),
                    old_value,
                    new_value: Some(LOGGED_IN.to_owned()),
                });
                info!("admin signed in");
            }
            Err(e) => error!(error = %e, "failed to persist login flag"),
        }
        AdminSession(())
    }

    /// Sign out: remove the flag.
    pub fn logout(&self) {
        let old_value = self.storage.read(keys::IS_ADMIN_LOGGED_IN).ok().flatten();
        match self.storage.remove(keys::IS_ADMIN_LOGGED_IN) {
            Ok(()) => {
                self.notifier.publish(&ChangeEvent {
                    key: keys::IS_ADMIN_LOGGED_IN.to_owned(),
                    old_value,
                    new_value: None,
                });
                info!("admin signed out");
            }
            Err(e) => error!(error = %e, "failed to remove login flag"),
        }
    }

    /// Whether the shared flag says an admin is signed in. Anything other
    /// than the exact `"true"` value counts as signed out.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        match self.storage.read(keys::IS_ADMIN_LOGGED_IN) {
            Ok(Some(flag)) => flag == LOGGED_IN,
            _ => false,
        }
    }

    /// A session token for the current login state, if signed in. This is
    /// how a context other than the one that called [`login`](Self::login)
    /// (a second admin tab) obtains its capability.
    #[must_use]
    pub fn session(&self) -> Option<AdminSession> {
        self.is_logged_in().then_some(AdminSession(()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tabletap_store::MemoryStorage;

    fn guard() -> (SessionGuard, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let guard = SessionGuard::new(
            Arc::clone(&storage) as Arc<dyn KeyValueStorage>,
            ChangeNotifier::new(),
        );
        (guard, storage)
    }

    #[test]
    fn test_login_writes_the_literal_flag() {
        let (guard, storage) = guard();
        assert!(!guard.is_logged_in());
        assert!(guard.session().is_none());

        let _session = guard.login();
        assert!(guard.is_logged_in());
        assert_eq!(
            storage.read(keys::IS_ADMIN_LOGGED_IN).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_logout_removes_the_flag() {
        let (guard, storage) = guard();
        let _session = guard.login();

        guard.logout();
        assert!(!guard.is_logged_in());
        assert_eq!(storage.read(keys::IS_ADMIN_LOGGED_IN).unwrap(), None);
    }

    #[test]
    fn test_second_context_sees_the_login() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let first = SessionGuard::new(Arc::clone(&storage), ChangeNotifier::new());
        let second = SessionGuard::new(Arc::clone(&storage), ChangeNotifier::new());

        let _session = first.login();
        assert!(second.session().is_some());
    }

    #[test]
    fn test_unexpected_flag_value_counts_as_signed_out() {
        let (guard, storage) = guard();
        storage.write(keys::IS_ADMIN_LOGGED_IN, "yes").unwrap();
        assert!(!guard.is_logged_in());
    }
}
