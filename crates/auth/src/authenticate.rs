//! Credential checking.

use thiserror::Error;

use stockroom_core::UserId;

use crate::{Role, User};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("username and password are required")]
    MissingCredentials,

    /// Unknown user and wrong password are deliberately indistinguishable.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("not authenticated")]
    NotAuthenticated,
}

/// Username/password pair as typed into the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Turns credentials into a user.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError>;
}

/// One entry in the stub account table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubAccount {
    pub user: User,
    pub password: String,
}

/// Fixed account table, compared in plain text.
#[derive(Debug, Clone, Default)]
pub struct StubAuthenticator {
    accounts: Vec<StubAccount>,
}

impl StubAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo accounts: `admin`/`admin123` and `user`/`user123`.
    pub fn with_demo_accounts() -> Self {
        Self::new()
            .with_account("admin", "admin123", Role::Admin)
            .with_account("user", "user123", Role::User)
    }

    /// Add (or replace) an account.
    pub fn with_account(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        let username = username.into();
        self.accounts.retain(|account| account.user.username != username);
        self.accounts.push(StubAccount {
            user: User {
                id: UserId::new(),
                username,
                role,
            },
            password: password.into(),
        });
        self
    }
}

impl Authenticator for StubAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let username = credentials.username.trim();
        if username.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        self.accounts
            .iter()
            .find(|account| account.user.username == username && account.password == credentials.password)
            .map(|account| account.user.clone())
            .ok_or(AuthError::InvalidCredentials)
    }
}
