//! Certification record and its create/edit rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use certtrack_core::{CertificationId, DomainError, DomainResult, Entity};

use crate::expiry::parse_expiry;

/// A tracked certification.
///
/// Field names on the wire (`date`, `file`, `addedOn`) match the stored
/// `"certs"` collection. `expiry_date` is kept as the raw stored string and
/// parsed on demand, so one bad value never makes the whole list unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    /// Nil for records written before identifiers existed; storage assigns one.
    #[serde(default)]
    pub id: CertificationId,
    pub name: String,
    pub issuer: String,
    #[serde(rename = "date")]
    pub expiry_date: String,
    #[serde(rename = "file", default, with = "empty_string_as_none")]
    pub attached_file_name: Option<String>,
    /// Missing on some older records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_on: Option<DateTime<Utc>>,
}

impl Entity for Certification {
    type Id = CertificationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input of the "add certification" form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewCertification {
    pub name: String,
    pub issuer: String,
    pub expiry_date: String,
    pub attached_file_name: Option<String>,
}

/// Replacement values from the edit form. `id` and `added_on` never change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CertificationUpdate {
    pub name: String,
    pub issuer: String,
    pub expiry_date: String,
    pub attached_file_name: Option<String>,
}

struct ValidatedFields {
    name: String,
    issuer: String,
    expiry_date: String,
    attached_file_name: Option<String>,
}

fn validate_fields(
    name: &str,
    issuer: &str,
    expiry_date: &str,
    attached_file_name: Option<&str>,
) -> DomainResult<ValidatedFields> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation("certification name cannot be empty"));
    }
    let issuer = issuer.trim();
    if issuer.is_empty() {
        return Err(DomainError::validation("issuer cannot be empty"));
    }
    let expiry_date = expiry_date.trim();
    if parse_expiry(expiry_date).is_none() {
        return Err(DomainError::validation(format!(
            "invalid expiry date: {expiry_date:?}"
        )));
    }

    Ok(ValidatedFields {
        name: name.to_string(),
        issuer: issuer.to_string(),
        expiry_date: expiry_date.to_string(),
        attached_file_name: attached_file_name
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string),
    })
}

impl Certification {
    /// Validate form input and build a new record stamped with `now`.
    ///
    /// New certifications may not already be expired (the form only offers
    /// dates from today on); edits are not held to that rule.
    pub fn create(input: NewCertification, now: DateTime<Utc>) -> DomainResult<Self> {
        let fields = validate_fields(
            &input.name,
            &input.issuer,
            &input.expiry_date,
            input.attached_file_name.as_deref(),
        )?;

        let expires_on = parse_expiry(&fields.expiry_date)
            .map(|expiry| expiry.date_naive())
            .ok_or_else(|| DomainError::validation("invalid expiry date"))?;
        if expires_on < now.date_naive() {
            return Err(DomainError::validation("expiry date cannot be in the past"));
        }

        Ok(Self {
            id: CertificationId::new(),
            name: fields.name,
            issuer: fields.issuer,
            expiry_date: fields.expiry_date,
            attached_file_name: fields.attached_file_name,
            added_on: Some(now),
        })
    }

    /// Apply an edit in place.
    pub fn apply_update(&mut self, update: CertificationUpdate) -> DomainResult<()> {
        let fields = validate_fields(
            &update.name,
            &update.issuer,
            &update.expiry_date,
            update.attached_file_name.as_deref(),
        )?;

        self.name = fields.name;
        self.issuer = fields.issuer;
        self.expiry_date = fields.expiry_date;
        self.attached_file_name = fields.attached_file_name;
        Ok(())
    }
}

/// `"file": ""` on the wire means no attachment.
mod empty_string_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.filter(|s| !s.is_empty()))
    }
}
