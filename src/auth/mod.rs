//! Admin auth session.
//!
//! Holds the bearer token and the logged-in user in a shared in-memory cell.
//! The request layer clears the session as a side effect of any 401 response.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// The authenticated admin user as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub role: String,
}

/// Token + user pair making up one admin session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: AdminUser,
}

/// Shared session cell. Cloning shares the same underlying session.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<AuthSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current bearer token, if a session is active.
    pub fn token(&self) -> Option<String> {
        read_lock(&self.inner).as_ref().map(|s| s.token.clone())
    }

    /// The current user, if a session is active.
    pub fn user(&self) -> Option<AdminUser> {
        read_lock(&self.inner).as_ref().map(|s| s.user.clone())
    }

    /// A session counts as authenticated only with both token and user.
    pub fn is_authenticated(&self) -> bool {
        read_lock(&self.inner).is_some()
    }

    /// Replace the session wholesale.
    pub fn set(&self, session: AuthSession) {
        *write_lock(&self.inner) = Some(session);
    }

    /// Drop token and user together.
    pub fn clear(&self) {
        *write_lock(&self.inner) = None;
    }
}

fn read_lock(
    lock: &RwLock<Option<AuthSession>>,
) -> std::sync::RwLockReadGuard<'_, Option<AuthSession>> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_lock(
    lock: &RwLock<Option<AuthSession>>,
) -> std::sync::RwLockWriteGuard<'_, Option<AuthSession>> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> AuthSession {
        AuthSession {
            token: "tok-123".to_string(),
            user: AdminUser {
                id: "u1".to_string(),
                email: "concierge@unlsh.society".to_string(),
                role: "admin".to_string(),
            },
        }
    }

    #[test]
    fn test_set_and_clear() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());

        store.set(session());
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok-123"));
        assert_eq!(store.user().unwrap().role, "admin");

        store.clear();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let other = store.clone();
        store.set(session());
        assert!(other.is_authenticated());
        other.clear();
        assert!(!store.is_authenticated());
    }
}
