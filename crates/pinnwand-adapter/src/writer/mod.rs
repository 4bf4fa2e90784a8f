//! Report Writers - Renderers implementing `ReportWriter`
//!
//! - `plain_text` - human-readable text, supports every report variant
//! - `html` - an HTML page, for everything but the all-users export

pub mod html;
pub mod plain_text;

use std::fmt::Write;

use chrono::NaiveDateTime;
use tracing::warn;

/// Default format of the "Erstellt am" line
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether `format` is a strftime pattern chrono can render for a
/// timestamp without offset. Unknown specifiers and offset specifiers
/// (`%z`, `%Z`) both fail here.
pub fn is_valid_date_format(format: &str) -> bool {
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDateTime::default().format(format)).is_ok()
}

/// Use `format` if valid, otherwise fall back to [`DEFAULT_DATE_FORMAT`]
fn checked_date_format(format: String) -> String {
    if is_valid_date_format(&format) {
        format
    } else {
        warn!(%format, "Invalid date format, using {}", DEFAULT_DATE_FORMAT);
        DEFAULT_DATE_FORMAT.to_string()
    }
}

fn format_created(created: NaiveDateTime, format: &str) -> String {
    created.format(format).to_string()
}
