//! Dashboard counters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::certification::Certification;
use crate::expiry::{ExpiryStatus, classify_status, days_until_expiry};

/// Per-status tallies over a certification list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationStats {
    pub total: usize,
    pub valid: usize,
    pub expiring_soon: usize,
    pub expired: usize,
    /// Records whose expiry date could not be parsed.
    pub unknown: usize,
}

impl CertificationStats {
    pub fn compute(certifications: &[Certification], now: DateTime<Utc>) -> Self {
        certifications
            .iter()
            .fold(Self::default(), |mut stats, cert| {
                stats.total += 1;
                match days_until_expiry(&cert.expiry_date, now).map(classify_status) {
                    Some(ExpiryStatus::Valid) => stats.valid += 1,
                    Some(ExpiryStatus::ExpiringSoon) => stats.expiring_soon += 1,
                    Some(ExpiryStatus::Expired) => stats.expired += 1,
                    None => stats.unknown += 1,
                }
                stats
            })
    }

    /// Count behind a filter tab (`None` is the "All" tab).
    pub fn count_for(&self, status: Option<ExpiryStatus>) -> usize {
        match status {
            None => self.total,
            Some(ExpiryStatus::Valid) => self.valid,
            Some(ExpiryStatus::ExpiringSoon) => self.expiring_soon,
            Some(ExpiryStatus::Expired) => self.expired,
        }
    }
}

/// Figures on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: usize,
    pub certifications: CertificationStats,
}
