//! `stockroom-auth` — the login gate in front of the dashboard.
//!
//! Credentials are checked against a fixed in-memory account table; there is
//! no password hashing, token issuing or persistence. This crate is decoupled
//! from the inventory service: it only decides who is looking at it.

pub mod authenticate;
pub mod roles;
pub mod session;
pub mod user;

pub use authenticate::{AuthError, Authenticator, Credentials, StubAccount, StubAuthenticator};
pub use roles::Role;
pub use session::Session;
pub use user::User;
