//! `certtrack-auth`: registration, login and the admin boundary.
//!
//! This crate is intentionally decoupled from storage: it validates input and
//! builds records/sessions, the caller decides where they are persisted.
//! There is no password hashing or credential store; non-admin logins are
//! accepted as-is.

pub mod directory;
pub mod roles;
pub mod session;
pub mod user;

pub use directory::search_users;
pub use roles::Role;
pub use session::{AdminCredentials, Credentials, Session, login};
pub use user::{MIN_PASSWORD_LEN, Registration, User};
