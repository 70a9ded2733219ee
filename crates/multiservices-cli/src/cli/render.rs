//! Turns `CmdResult` contents into terminal text.
//!
//! Every function returns a `String`; printing happens in `commands.rs`.
//! Column padding is computed on the plain text before styling so wide
//! glyphs (stars, accents) stay aligned.

use super::styles;
use multiservices::commands::{CmdMessage, MessageLevel, RatedProvider};
use multiservices::config::DirectoryConfig;
use multiservices::format::{
    format_date, format_hourly_rate, format_phone, generate_stars, stars_to_string,
    whatsapp_contact_url,
};
use multiservices::model::{Client, Review};
use multiservices::rating::RatingSummary;
use multiservices::validation::ValidationErrors;
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;
const SERVICE_WIDTH: usize = 30;
const LOCATION_WIDTH: usize = 22;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &*styles::INFO,
            MessageLevel::Success => &*styles::SUCCESS,
            MessageLevel::Warning => &*styles::WARNING,
        };
        let _ = writeln!(out, "{}", style.apply_to(&message.content));
    }
    out
}

/// One line per rejected field.
pub fn render_validation_errors(errors: &ValidationErrors) -> String {
    let mut out = String::new();
    for (field, message) in errors.iter() {
        let _ = writeln!(
            out,
            "  {} {}",
            styles::LABEL.apply_to(pad_to_width(field.as_str(), 11)),
            styles::ERROR.apply_to(message)
        );
    }
    out
}

pub fn render_provider_list(providers: &[RatedProvider]) -> String {
    if providers.is_empty() {
        return format!("{}\n", styles::MUTED.apply_to("No providers found."));
    }

    let mut out = String::new();
    for rated in providers {
        let p = &rated.provider;
        let _ = writeln!(
            out,
            "{}  {}  {}  {}",
            styles::TITLE.apply_to(pad_to_width(&p.name, NAME_WIDTH)),
            styles::SERVICE.apply_to(pad_to_width(p.service.label(), SERVICE_WIDTH)),
            pad_to_width(&p.location, LOCATION_WIDTH),
            render_rating(&rated.rating),
        );
        let _ = writeln!(out, "  {}", styles::FAINT.apply_to(&p.id));
    }
    out
}

pub fn render_provider_detail(rated: &RatedProvider, reviews: &[Review]) -> String {
    let p = &rated.provider;
    let mut out = String::new();

    let _ = writeln!(out, "{}", styles::TITLE.apply_to(&p.name));
    let _ = writeln!(out, "{}", styles::SERVICE.apply_to(p.service.label()));
    let _ = writeln!(out, "{}", render_rating(&rated.rating));
    let _ = writeln!(out);

    field(&mut out, "Id", p.id.as_str());
    field(&mut out, "Location", &p.location);
    field(&mut out, "Phone", &format_phone(&p.phone));
    field(&mut out, "Email", &p.email);
    if !p.experience.is_empty() {
        field(&mut out, "Experience", &p.experience);
    }
    if let Some(rate) = p.hourly_rate {
        field(&mut out, "Rate", &format_hourly_rate(rate));
    }
    if let Some(url) = whatsapp_contact_url(p) {
        let _ = writeln!(
            out,
            "{} {}",
            styles::LABEL.apply_to(pad_to_width("WhatsApp", 11)),
            styles::LINK.apply_to(url)
        );
    }
    if !p.description.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", p.description);
    }

    let _ = writeln!(out);
    if reviews.is_empty() {
        let _ = writeln!(out, "{}", styles::MUTED.apply_to("No reviews yet."));
    }
    for review in reviews {
        let stars = stars_to_string(&generate_stars(f64::from(review.rating)));
        let _ = writeln!(
            out,
            "{}  {}",
            styles::STARS.apply_to(stars),
            styles::MUTED.apply_to(format_date(&review.created_at))
        );
        if let Some(comment) = &review.comment {
            let _ = writeln!(out, "  {}", comment);
        }
    }
    out
}

pub fn render_client_list(clients: &[Client]) -> String {
    if clients.is_empty() {
        return format!("{}\n", styles::MUTED.apply_to("No clients registered."));
    }

    let mut out = String::new();
    for client in clients {
        let _ = writeln!(
            out,
            "{}  {}  {}  {}",
            styles::TITLE.apply_to(pad_to_width(&client.name, NAME_WIDTH)),
            pad_to_width(&format_phone(&client.phone), 16),
            pad_to_width(&client.email, 28),
            client.location,
        );
    }
    out
}

pub fn render_config(data_dir: &Path, config: &DirectoryConfig) -> String {
    let mut out = String::new();
    field(&mut out, "Data dir", &data_dir.display().to_string());
    field(
        &mut out,
        "Config",
        &DirectoryConfig::path_in(data_dir).display().to_string(),
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "on_corrupt = \"{}\"", config.on_corrupt);
    let _ = writeln!(out, "seed_sample_data = {}", config.seed_sample_data);
    out
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value).map(|json| json + "\n")
}

fn render_rating(rating: &RatingSummary) -> String {
    let stars = stars_to_string(&generate_stars(rating.average));
    let detail = if rating.review_count == 0 {
        "no reviews".to_string()
    } else {
        format!("{:.1} ({})", rating.average, rating.review_count)
    };
    format!(
        "{} {}",
        styles::STARS.apply_to(stars),
        styles::MUTED.apply_to(detail)
    )
}

fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        out,
        "{} {}",
        styles::LABEL.apply_to(pad_to_width(label, 11)),
        value
    );
}

/// Pads (or truncates with `…`) to exactly `width` display columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let used = out.width();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
