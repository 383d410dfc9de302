//! `certtrack-core`: foundation building blocks shared by every crate.
//!
//! This crate contains **pure** primitives (no storage, no rendering).

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CertificationId, UserId};
