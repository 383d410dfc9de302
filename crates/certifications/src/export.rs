//! JSON export of stored certifications.

use chrono::NaiveDate;

use certtrack_core::{CertificationId, DomainError, DomainResult, entity::position_of};

use crate::certification::Certification;

/// A ready-to-save export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// e.g. `certifications_2024-01-01.json`.
    pub file_name: String,
    /// Pretty-printed JSON array.
    pub contents: String,
    pub count: usize,
}

fn render(prefix: &str, certs: &[&Certification], today: NaiveDate) -> DomainResult<ExportFile> {
    let contents = serde_json::to_string_pretty(certs)
        .map_err(|e| DomainError::invariant(format!("failed to serialize export: {e}")))?;
    Ok(ExportFile {
        file_name: format!("{prefix}_{}.json", today.format("%Y-%m-%d")),
        contents,
        count: certs.len(),
    })
}

/// Export every certification.
pub fn export_all(certifications: &[Certification], today: NaiveDate) -> DomainResult<ExportFile> {
    if certifications.is_empty() {
        return Err(DomainError::validation(
            "no certifications available to download",
        ));
    }
    let all: Vec<&Certification> = certifications.iter().collect();
    render("all_certifications", &all, today)
}

/// Export the selected certifications, in selection order.
pub fn export_selected(
    certifications: &[Certification],
    selection: &[CertificationId],
    today: NaiveDate,
) -> DomainResult<ExportFile> {
    if selection.is_empty() {
        return Err(DomainError::validation(
            "select at least one certification to download",
        ));
    }
    let selected = selection
        .iter()
        .map(|id| {
            position_of(certifications, id)
                .map(|idx| &certifications[idx])
                .ok_or(DomainError::NotFound)
        })
        .collect::<DomainResult<Vec<_>>>()?;
    render("certifications", &selected, today)
}
