//! Terminal styles for the CLI.
//!
//! Renderers refer to styles by what the text *is* (a name, a rating, a
//! muted hint) and never pick colors inline. `console` drops the escape
//! codes on its own when output is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(246));
pub static FAINT: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SERVICE: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static STARS: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static LINK: Lazy<Style> = Lazy::new(|| Style::new().blue().underlined());
pub static LABEL: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());
