//! Certification domain module.
//!
//! Holds the certification record and everything computed from it: expiry
//! classification, the filtered/sorted views, dashboard counts and JSON
//! export. Implemented purely as deterministic logic (no IO, no storage);
//! "now" is always passed in.

pub mod certification;
pub mod expiry;
pub mod export;
pub mod stats;
pub mod views;

pub use certification::{Certification, CertificationUpdate, NewCertification};
pub use expiry::{
    ExpiryStatus, ReminderPriority, classify_reminder_priority, classify_status,
    days_until_expiry,
};
pub use export::{ExportFile, export_all, export_selected};
pub use stats::{AdminStats, CertificationStats};
pub use views::{CertificationView, ViewMode, filter_and_sort};
