//! Form validation.
//!
//! Two levels:
//!
//! - **Predicates** ([`validate_required`], [`validate_email`],
//!   [`validate_phone`], [`validate_rating`]): pure checks returning `bool`.
//!   They never mutate input and never fail.
//! - **Forms** ([`ProviderForm`], [`ClientForm`], [`ReviewForm`]): raw user
//!   input as typed into a registration form. `validate()` runs the
//!   predicates field by field and returns either a typed draft ready for the
//!   store or a [`ValidationErrors`] map with one message per failing field.
//!
//! The email check is syntactic only (`local@domain.tld`, no whitespace).
//! The phone check accepts Brazilian numbers: a 2-digit area code with
//! optional parentheses, a 4–5 digit prefix, an optional hyphen and a 4-digit
//! suffix, e.g. `(11) 99999-9999` or `11999999999`.

use crate::model::{ClientDraft, ProviderDraft, RecordId, ReviewDraft, ServiceCategory};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?[0-9]{2}\)?\s?[0-9]{4,5}-?[0-9]{4}$").expect("phone pattern")
});

pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn validate_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn validate_rating(value: i64) -> bool {
    (1..=5).contains(&value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Location,
    HourlyRate,
    ProviderId,
    Rating,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Location => "location",
            Field::HourlyRate => "hourly rate",
            Field::ProviderId => "provider",
            Field::Rating => "rating",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field error messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Records `message` for `field` unless `ok` holds.
    fn check(&mut self, ok: bool, field: Field, message: &str) {
        if !ok {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw provider registration input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub experience: String,
    pub description: String,
    pub location: String,
    pub hourly_rate: String,
}

impl ProviderForm {
    pub fn validate(&self) -> Result<ProviderDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(validate_required(&self.name), Field::Name, "Name is required");
        errors.check(validate_email(&self.email), Field::Email, "Invalid email");
        errors.check(validate_phone(&self.phone), Field::Phone, "Invalid phone");

        let service = if validate_required(&self.service) {
            match self.service.parse::<ServiceCategory>() {
                Ok(service) => Some(service),
                Err(e) => {
                    errors.add(Field::Service, e.to_string());
                    None
                }
            }
        } else {
            errors.add(Field::Service, "Service is required");
            None
        };

        errors.check(
            validate_required(&self.location),
            Field::Location,
            "Location is required",
        );

        let hourly_rate = match parse_hourly_rate(&self.hourly_rate) {
            Ok(rate) => rate,
            Err(message) => {
                errors.add(Field::HourlyRate, message);
                None
            }
        };

        errors.into_result(|| ProviderDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            service: service.unwrap_or(ServiceCategory::Other),
            experience: self.experience.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            hourly_rate,
        })
    }
}

/// Blank means "not given". Accepts a decimal comma (`80,50`).
fn parse_hourly_rate(raw: &str) -> Result<Option<f64>, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(rate) if rate.is_finite() && rate >= 0.0 => Ok(Some(rate)),
        Ok(_) => Err("Hourly rate must be zero or more"),
        Err(_) => Err("Hourly rate must be a number"),
    }
}

/// Raw client registration input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl ClientForm {
    pub fn validate(&self) -> Result<ClientDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(validate_required(&self.name), Field::Name, "Name is required");
        errors.check(validate_email(&self.email), Field::Email, "Invalid email");
        errors.check(validate_phone(&self.phone), Field::Phone, "Invalid phone");
        errors.check(
            validate_required(&self.location),
            Field::Location,
            "Location is required",
        );

        errors.into_result(|| ClientDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
        })
    }
}

/// Raw review input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewForm {
    pub provider_id: String,
    pub rating: i64,
    pub comment: String,
}

impl ReviewForm {
    pub fn validate(&self) -> Result<ReviewDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(
            validate_required(&self.provider_id),
            Field::ProviderId,
            "Provider is required",
        );
        errors.check(
            validate_rating(self.rating),
            Field::Rating,
            "Rating must be between 1 and 5",
        );

        errors.into_result(|| ReviewDraft {
            provider_id: RecordId::new(self.provider_id.trim()),
            rating: self.rating as u8,
            comment: Some(self.comment.trim().to_string()).filter(|c| !c.is_empty()),
        })
    }
}
