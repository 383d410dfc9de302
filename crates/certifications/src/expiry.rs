//! Expiry classification.
//!
//! Two independent bucketings hang off the same day count:
//! [`classify_status`] (three tiers, drives badges and the "expiring soon"
//! list) and [`classify_reminder_priority`] (five tiers, drives the renewal
//! reminder list). They intentionally do not share thresholds beyond 0 and 30.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of the "expiring soon" window, in days.
pub const EXPIRING_SOON_DAYS: i64 = 30;

const HIGH_PRIORITY_DAYS: i64 = 7;
const LOW_PRIORITY_DAYS: i64 = 60;
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Parse a stored expiry date into the instant it takes effect.
///
/// A bare `YYYY-MM-DD` date is midnight UTC of that day; RFC 3339 timestamps
/// are taken as-is. Anything else is `None`.
pub fn parse_expiry(expiry_date: &str) -> Option<DateTime<Utc>> {
    let raw = expiry_date.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Whole days from `now` until `expiry`, rounded up.
///
/// Ceiling on the millisecond difference: anything left of a partially
/// elapsed day still counts as a day, and a few hours past expiry is day 0.
pub fn days_until(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = expiry.signed_duration_since(now).num_milliseconds();
    let floor = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        floor
    } else {
        floor + 1
    }
}

/// Days until a stored expiry date, or `None` when the date cannot be parsed.
pub fn days_until_expiry(expiry_date: &str, now: DateTime<Utc>) -> Option<i64> {
    parse_expiry(expiry_date).map(|expiry| days_until(expiry, now))
}

/// Three-tier expiry status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpiryStatus {
    #[serde(rename = "expired")]
    Expired,
    #[serde(rename = "expiring")]
    ExpiringSoon,
    #[serde(rename = "valid")]
    Valid,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::ExpiringSoon => "expiring",
            ExpiryStatus::Valid => "valid",
        }
    }
}

impl core::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `days < 0` is expired, `0..=30` expiring soon, anything later valid.
pub fn classify_status(days: i64) -> ExpiryStatus {
    if days < 0 {
        ExpiryStatus::Expired
    } else if days <= EXPIRING_SOON_DAYS {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Valid
    }
}

/// Renewal reminder tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderPriority {
    /// Too far out to remind about.
    None,
    Urgent,
    High,
    Medium,
    Low,
}

impl ReminderPriority {
    /// Whether the certification belongs on the reminder list at all.
    pub fn is_reminder(&self) -> bool {
        !matches!(self, ReminderPriority::None)
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            ReminderPriority::None => None,
            ReminderPriority::Urgent => Some("URGENT - Expired"),
            ReminderPriority::High => Some("HIGH - 1 Week"),
            ReminderPriority::Medium => Some("MEDIUM - 1 Month"),
            ReminderPriority::Low => Some("LOW - 2 Months"),
        }
    }
}

/// Boundaries at 0, 7, 30 and 60 days; beyond 60 there is no reminder.
pub fn classify_reminder_priority(days: i64) -> ReminderPriority {
    if days < 0 {
        ReminderPriority::Urgent
    } else if days <= HIGH_PRIORITY_DAYS {
        ReminderPriority::High
    } else if days <= EXPIRING_SOON_DAYS {
        ReminderPriority::Medium
    } else if days <= LOW_PRIORITY_DAYS {
        ReminderPriority::Low
    } else {
        ReminderPriority::None
    }
}

/// Badge text: `"Expired"` or `"{days} days left"`.
pub fn status_label(days: i64) -> String {
    match classify_status(days) {
        ExpiryStatus::Expired => "Expired".to_string(),
        _ => format!("{days} days left"),
    }
}

/// Remaining-time text on reminder cards.
pub fn remaining_text(days: i64) -> String {
    if days < 0 {
        format!("EXPIRED {} days ago", days.unsigned_abs())
    } else {
        format!("{days} days")
    }
}

pub fn reminder_action(days: i64) -> &'static str {
    if days < 0 {
        "Renew immediately!"
    } else {
        "Schedule renewal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn jan_first() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn scenario_day_counts() {
        let now = jan_first();
        assert_eq!(days_until_expiry("2023-12-20", now), Some(-12));
        assert_eq!(days_until_expiry("2024-01-10", now), Some(9));
        assert_eq!(days_until_expiry("2024-03-01", now), Some(60));
        assert_eq!(days_until_expiry("2024-06-01", now), Some(152));
    }

    #[test]
    fn partial_days_round_up() {
        let now = jan_first() + Duration::hours(12);
        // 12 hours left on the 2nd => still 1 day.
        assert_eq!(days_until_expiry("2024-01-02", now), Some(1));
        // 12 hours past midnight of the 1st => ceil(-0.5) == 0.
        assert_eq!(days_until_expiry("2024-01-01", now), Some(0));
        // 1.5 days past => ceil(-1.5) == -1.
        assert_eq!(days_until_expiry("2023-12-31", now), Some(-1));
    }

    #[test]
    fn rfc3339_expiry_is_used_verbatim() {
        let now = jan_first();
        assert_eq!(days_until_expiry("2024-01-03T06:00:00Z", now), Some(3));
        assert_eq!(days_until_expiry("2024-01-03T00:00:00+02:00", now), Some(2));
    }

    #[test]
    fn unparseable_expiry_is_unknown() {
        let now = jan_first();
        assert_eq!(days_until_expiry("", now), None);
        assert_eq!(days_until_expiry("next tuesday", now), None);
        assert_eq!(days_until_expiry("2024-02-30", now), None);
    }

    #[test]
    fn status_boundaries() {
        assert_eq!(classify_status(-1), ExpiryStatus::Expired);
        assert_eq!(classify_status(0), ExpiryStatus::ExpiringSoon);
        assert_eq!(classify_status(30), ExpiryStatus::ExpiringSoon);
        assert_eq!(classify_status(31), ExpiryStatus::Valid);
    }

    #[test]
    fn reminder_boundaries() {
        assert_eq!(classify_reminder_priority(-1), ReminderPriority::Urgent);
        assert_eq!(classify_reminder_priority(0), ReminderPriority::High);
        assert_eq!(classify_reminder_priority(7), ReminderPriority::High);
        assert_eq!(classify_reminder_priority(8), ReminderPriority::Medium);
        assert_eq!(classify_reminder_priority(30), ReminderPriority::Medium);
        assert_eq!(classify_reminder_priority(31), ReminderPriority::Low);
        assert_eq!(classify_reminder_priority(60), ReminderPriority::Low);
        assert_eq!(classify_reminder_priority(61), ReminderPriority::None);
    }

    #[test]
    fn card_texts() {
        assert_eq!(status_label(-3), "Expired");
        assert_eq!(status_label(12), "12 days left");
        assert_eq!(remaining_text(-3), "EXPIRED 3 days ago");
        assert_eq!(remaining_text(0), "0 days");
        assert_eq!(reminder_action(-1), "Renew immediately!");
        assert_eq!(reminder_action(5), "Schedule renewal");
        assert_eq!(ReminderPriority::Medium.label(), Some("MEDIUM - 1 Month"));
        assert_eq!(ReminderPriority::None.label(), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: the day count is the ceiling of the exact fractional difference.
        #[test]
        fn days_is_ceiling_of_difference(offset_ms in -400_000_000_000i64..400_000_000_000i64) {
            let now = jan_first();
            let expiry = now + Duration::milliseconds(offset_ms);
            let days = days_until(expiry, now);
            // ceil(x) is the unique integer with x <= ceil(x) < x + 1.
            prop_assert!(days * MILLIS_PER_DAY >= offset_ms);
            prop_assert!((days - 1) * MILLIS_PER_DAY < offset_ms);
        }

        /// Property: status buckets are exhaustive and split exactly at 0 and 30.
        #[test]
        fn status_partition(days in -10_000i64..10_000i64) {
            let expected = if days < 0 {
                ExpiryStatus::Expired
            } else if days <= 30 {
                ExpiryStatus::ExpiringSoon
            } else {
                ExpiryStatus::Valid
            };
            prop_assert_eq!(classify_status(days), expected);
        }

        /// Property: reminder tiers split exactly at 0, 7, 30 and 60.
        #[test]
        fn reminder_partition(days in -10_000i64..10_000i64) {
            let priority = classify_reminder_priority(days);
            prop_assert_eq!(priority.is_reminder(), days <= 60);
            match priority {
                ReminderPriority::Urgent => prop_assert!(days < 0),
                ReminderPriority::High => prop_assert!((0..=7).contains(&days)),
                ReminderPriority::Medium => prop_assert!((8..=30).contains(&days)),
                ReminderPriority::Low => prop_assert!((31..=60).contains(&days)),
                ReminderPriority::None => prop_assert!(days > 60),
            }
        }
    }
}
