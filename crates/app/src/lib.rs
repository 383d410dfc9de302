//! `certtrack-app`
//!
//! **Responsibility:** the application service behind every screen of the
//! certification tracker.
//!
//! [`Tracker`] wires the domain crates to a key-value store and a clock:
//! - registration, login and logout
//! - certification add/edit/delete and the derived views
//! - dashboards and JSON export
//! - admin-only user management
//!
//! Rendering and routing live outside this crate.

pub mod config;
pub mod error;
pub mod tracker;

pub use config::TrackerConfig;
pub use error::TrackerError;
pub use tracker::Tracker;
