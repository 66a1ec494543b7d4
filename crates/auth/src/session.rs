//! Login state: who, if anyone, is currently signed in.

use crate::{AuthError, Authenticator, Credentials, User};

/// Gate between the login screen and the dashboard.
#[derive(Debug)]
pub struct Session<A> {
    authenticator: A,
    user: Option<User>,
}

impl<A: Authenticator> Session<A> {
    pub fn new(authenticator: A) -> Self {
        Self {
            authenticator,
            user: None,
        }
    }

    /// Sign in. A failed attempt leaves any current user signed in.
    pub fn login(&mut self, credentials: &Credentials) -> Result<&User, AuthError> {
        match self.authenticator.authenticate(credentials) {
            Ok(user) => {
                tracing::info!(username = %user.username, role = %user.role, "user logged in");
                Ok(&*self.user.insert(user))
            }
            Err(err) => {
                tracing::warn!(username = %credentials.username, error = %err, "login failed");
                Err(err)
            }
        }
    }

    pub fn logout(&mut self) -> Option<User> {
        let user = self.user.take();
        if let Some(user) = &user {
            tracing::info!(username = %user.username, "user logged out");
        }
        user
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The signed-in user, or `NotAuthenticated`.
    pub fn require_user(&self) -> Result<&User, AuthError> {
        self.user.as_ref().ok_or(AuthError::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Role, StubAuthenticator};

    fn session() -> Session<StubAuthenticator> {
        Session::new(StubAuthenticator::with_demo_accounts())
    }

    #[test]
    fn starts_signed_out() {
        let session = session();
        assert!(!session.is_authenticated());
        assert_eq!(session.require_user(), Err(AuthError::NotAuthenticated));
    }

    #[test]
    fn login_then_logout() {
        let mut session = session();

        let user = session.login(&Credentials::new("user", "user123")).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(session.is_authenticated());

        let out = session.logout().unwrap();
        assert_eq!(out.username, "user");
        assert!(session.current_user().is_none());
        assert!(session.logout().is_none());
    }

    #[test]
    fn failed_login_keeps_existing_user() {
        let mut session = session();
        session.login(&Credentials::new("admin", "admin123")).unwrap();

        let err = session.login(&Credentials::new("user", "wrong")).unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(session.require_user().unwrap().username, "admin");
    }
}
