//! Presentation helpers: turn stored values into display strings.
//!
//! All functions are pure. Inputs they cannot handle are returned unchanged
//! (phone, date) or clamped (stars) instead of failing.

use crate::model::Provider;
use chrono::{DateTime, Locale, Utc};
use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    pub fn glyph(&self) -> char {
        match self {
            Star::Full => '★',
            Star::Half => '⯨',
            Star::Empty => '☆',
        }
    }
}

/// `11999999999` → `(11) 99999-9999`. Anything that is not exactly 11 digits
/// once punctuation is stripped comes back as given.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 11 {
        return raw.to_string();
    }
    format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])
}

/// Long-form Brazilian date, e.g. `19 de outubro de 2026`. Uses the UTC
/// calendar day.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format_localized("%-d de %B de %Y", Locale::pt_BR)
        .to_string()
}

/// [`format_date`] for an ISO-8601 string; unparseable input is returned as is.
pub fn format_iso_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso.trim()) {
        Ok(date) => format_date(&date.with_timezone(&Utc)),
        Err(_) => iso.to_string(),
    }
}

/// Five stars for a 0–5 rating: full stars for the integer part, one half
/// star for any fraction, empty stars for the rest.
pub fn generate_stars(rating: f64) -> Vec<Star> {
    let rating = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, 5.0)
    };

    let full = rating.floor() as usize;
    let half = usize::from(rating.fract() != 0.0);
    let empty = 5 - rating.ceil() as usize;

    let mut stars = Vec::with_capacity(5);
    stars.extend(std::iter::repeat(Star::Full).take(full));
    stars.extend(std::iter::repeat(Star::Half).take(half));
    stars.extend(std::iter::repeat(Star::Empty).take(empty));
    stars
}

pub fn stars_to_string(stars: &[Star]) -> String {
    stars.iter().map(Star::glyph).collect()
}

/// `80.0` → `R$ 80.00/hora`.
pub fn format_hourly_rate(rate: f64) -> String {
    format!("R$ {:.2}/hora", rate)
}

/// WhatsApp click-to-chat link for a provider with a prefilled quote request.
///
/// Returns `None` when the provider's phone has no digits at all.
pub fn whatsapp_contact_url(provider: &Provider) -> Option<String> {
    let digits: String = provider
        .phone
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let message = format!(
        "Olá {}! Encontrei seu perfil no MultiServices e gostaria de solicitar um orçamento para {}.",
        provider.name,
        provider.service.label()
    );
    Url::parse_with_params(&format!("https://wa.me/55{}", digits), &[("text", message)])
        .ok()
        .map(String::from)
}
