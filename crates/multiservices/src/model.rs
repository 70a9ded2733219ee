//! # Domain Model: Providers, Clients and Reviews
//!
//! This module defines the records kept by the directory and the drafts
//! callers hand to the store before identifiers and timestamps exist.
//!
//! ## Records vs Drafts
//!
//! A **draft** is caller-supplied data for a new record ([`ProviderDraft`],
//! [`ClientDraft`], [`ReviewDraft`]). The store turns a draft into a
//! **record** by attaching a [`RecordId`] (and, for reviews, a creation
//! timestamp). Callers never choose identifiers.
//!
//! ## Persisted Shape
//!
//! Records serialize with camelCase field names so a stored collection reads
//! like:
//!
//! ```text
//! { "id": "…", "name": "Carlos Silva", "service": "Pintor", "hourlyRate": 80.0, … }
//! ```
//!
//! Service categories persist as their Portuguese labels. Collections written
//! before the versioned envelope existed may carry hourly rates as strings
//! (`"80.00"`, `""`); those are accepted on read, see [`Provider`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Store-assigned identifier, unique within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The fixed set of services a provider can register under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceCategory {
    Painter,
    Plumber,
    AirConditioningInstaller,
    Electrician,
    Mason,
    Gardener,
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 7] = [
        ServiceCategory::Painter,
        ServiceCategory::Plumber,
        ServiceCategory::AirConditioningInstaller,
        ServiceCategory::Electrician,
        ServiceCategory::Mason,
        ServiceCategory::Gardener,
        ServiceCategory::Other,
    ];

    /// Display label, also the persisted form.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Painter => "Pintor",
            ServiceCategory::Plumber => "Encanador",
            ServiceCategory::AirConditioningInstaller => "Instalador de Ar Condicionado",
            ServiceCategory::Electrician => "Eletricista",
            ServiceCategory::Mason => "Pedreiro",
            ServiceCategory::Gardener => "Jardineiro",
            ServiceCategory::Other => "Outro",
        }
    }

    /// Short English name, accepted by the parser and used by the CLI.
    pub fn slug(&self) -> &'static str {
        match self {
            ServiceCategory::Painter => "painter",
            ServiceCategory::Plumber => "plumber",
            ServiceCategory::AirConditioningInstaller => "air-conditioning",
            ServiceCategory::Electrician => "electrician",
            ServiceCategory::Mason => "mason",
            ServiceCategory::Gardener => "gardener",
            ServiceCategory::Other => "other",
        }
    }

    /// Lenient parse for stored data: unknown labels become `Other`.
    fn from_persisted(value: &str) -> Self {
        value.parse().unwrap_or(ServiceCategory::Other)
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownServiceCategory(pub String);

impl fmt::Display for UnknownServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown service category '{}'", self.0)
    }
}

impl std::error::Error for UnknownServiceCategory {}

impl FromStr for ServiceCategory {
    type Err = UnknownServiceCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        // Older sample data used the feminine form.
        if needle == "encanadora" {
            return Ok(ServiceCategory::Plumber);
        }
        ServiceCategory::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == needle || c.slug() == needle)
            .ok_or_else(|| UnknownServiceCategory(s.to_string()))
    }
}

impl Serialize for ServiceCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ServiceCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ServiceCategory::from_persisted(&raw))
    }
}

/// Fields of a provider before registration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceCategory,
    pub experience: String,
    pub description: String,
    pub location: String,
    pub hourly_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceCategory,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    #[serde(
        default,
        deserialize_with = "deserialize_hourly_rate",
        skip_serializing_if = "Option::is_none"
    )]
    pub hourly_rate: Option<f64>,
}

impl Provider {
    pub fn new(id: RecordId, draft: ProviderDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            service: draft.service,
            experience: draft.experience,
            description: draft.description,
            location: draft.location,
            hourly_rate: draft.hourly_rate,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRate {
    Number(f64),
    Text(String),
}

// Legacy collections stored the rate as form text; blank text means "not given".
fn deserialize_hourly_rate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawRate> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(RawRate::Number(n)) => Ok(Some(n)),
        Some(RawRate::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .replace(',', ".")
                .parse::<f64>()
                .map(Some)
                .map_err(serde::de::Error::custom)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl Client {
    pub fn new(id: RecordId, draft: ClientDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            location: draft.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub provider_id: RecordId,
    pub rating: u8,
    pub comment: Option<String>,
}

/// An immutable rating of a provider.
///
/// `provider_id` is a plain reference: reviews pointing at providers that do
/// not exist are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: RecordId,
    pub provider_id: RecordId,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(id: RecordId, created_at: DateTime<Utc>, draft: ReviewDraft) -> Self {
        Self {
            id,
            provider_id: draft.provider_id,
            rating: draft.rating,
            comment: draft.comment,
            created_at,
        }
    }
}
