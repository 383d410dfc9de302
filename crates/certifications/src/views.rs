//! Filtered and urgency-ordered certification lists.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::certification::Certification;
use crate::expiry::{
    ExpiryStatus, ReminderPriority, classify_reminder_priority, classify_status,
    days_until_expiry, reminder_action, remaining_text, status_label,
};

/// Which list to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// `0 <= days <= 30`, most urgent first.
    ExpiringSoon,
    /// Anything with a reminder priority (`days <= 60`, expired included), most urgent first.
    Reminder,
    /// Every certification with the given status, or all of them when `None`; input order kept.
    AllWithFilter(Option<ExpiryStatus>),
}

/// A certification together with its classification at a given instant.
///
/// `days_left` and `status` are `None` when the stored expiry date cannot be
/// parsed; such entries only show up in the unfiltered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationView {
    #[serde(flatten)]
    pub certification: Certification,
    pub days_left: Option<i64>,
    pub status: Option<ExpiryStatus>,
    pub priority: ReminderPriority,
    /// Badge text, e.g. `"9 days left"`.
    pub status_label: Option<String>,
    /// Reminder card texts; `None` when there is nothing to remind about.
    pub priority_label: Option<&'static str>,
    pub remaining: Option<String>,
    pub action: Option<&'static str>,
}

impl CertificationView {
    pub fn classify(certification: &Certification, now: DateTime<Utc>) -> Self {
        let days_left = days_until_expiry(&certification.expiry_date, now);
        let priority = days_left
            .map(classify_reminder_priority)
            .unwrap_or(ReminderPriority::None);
        let reminder_days = days_left.filter(|_| priority.is_reminder());
        Self {
            certification: certification.clone(),
            days_left,
            status: days_left.map(classify_status),
            priority,
            status_label: days_left.map(status_label),
            priority_label: priority.label(),
            remaining: reminder_days.map(remaining_text),
            action: reminder_days.map(reminder_action),
        }
    }

    fn is_expiring_soon(&self) -> bool {
        self.status == Some(ExpiryStatus::ExpiringSoon)
    }
}

/// Build the requested view without touching `certifications`.
///
/// Sorting is stable, so certifications expiring on the same day keep their
/// stored order.
pub fn filter_and_sort(
    certifications: &[Certification],
    now: DateTime<Utc>,
    mode: ViewMode,
) -> Vec<CertificationView> {
    let classified = certifications
        .iter()
        .map(|cert| CertificationView::classify(cert, now));

    let mut view: Vec<CertificationView> = match mode {
        ViewMode::ExpiringSoon => classified.filter(|v| v.is_expiring_soon()).collect(),
        ViewMode::Reminder => classified.filter(|v| v.priority.is_reminder()).collect(),
        ViewMode::AllWithFilter(None) => return classified.collect(),
        ViewMode::AllWithFilter(Some(status)) => {
            return classified.filter(|v| v.status == Some(status)).collect();
        }
    };

    // Both urgency views only contain entries with a known day count.
    view.sort_by_key(|v| v.days_left.unwrap_or(i64::MAX));
    view
}
