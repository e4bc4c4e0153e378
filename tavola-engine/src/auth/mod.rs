//! Demo login session
//!
//! Local, demo-only heuristic: any email whose address contains "admin"
//! gets the admin role, the display name is the email's local part, and
//! the password only needs six characters. The resulting session object
//! is persisted under `authUser` for the UI shell's navigation guards.
//! Not a security boundary.

use crate::store::{AUTH_USER_KEY, StoreAdapter, StoreError};
use shared::{AuthUser, UserRole};
use thiserror::Error;

/// Minimum demo password length
const MIN_PASSWORD_CHARS: usize = 6;

/// Demo login failures
#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("Please enter your email and password.")]
    MissingCredentials,

    #[error("Use at least 6 characters for the demo password.")]
    PasswordTooShort,
}

/// Demo session backed by the persistent store
pub struct AuthSession<S: StoreAdapter> {
    store: S,
}

impl<S: StoreAdapter> AuthSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Evaluate the demo heuristic and persist the resulting session
    pub fn login(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AuthError::PasswordTooShort);
        }

        let role = if email.to_lowercase().contains("admin") {
            UserRole::Admin
        } else {
            UserRole::User
        };
        let name = email
            .split('@')
            .next()
            .filter(|local| !local.is_empty())
            .unwrap_or("Guest")
            .to_string();

        let user = AuthUser {
            name,
            email: email.to_string(),
            role,
        };

        // Session visibility beats durability here: a failed write just
        // means the login does not survive a restart
        if let Err(err) = self.store.write(AUTH_USER_KEY, &user) {
            tracing::warn!(%err, "auth session write failed");
        }

        Ok(user)
    }

    /// The persisted session, if any
    pub fn current(&self) -> Option<AuthUser> {
        self.store.read_or(AUTH_USER_KEY, None)
    }

    /// Drop the persisted session
    pub fn logout(&self) -> Result<(), StoreError> {
        self.store.remove(AUTH_USER_KEY)
    }
}
