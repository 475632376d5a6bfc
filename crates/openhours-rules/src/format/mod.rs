//! Display formatting for opening hours.
//!
//! Rendered output is HTML [`Markup`] or plain text. Formatting never
//! validates; invalid ranges are shown as stored.

pub mod messages;
mod schedule;
mod status;
mod summary;

use std::fmt;

pub use schedule::{format_exceptions, format_ranges, format_weekly_schedule};
pub use status::{
    EvaluatorError, OpenStatus, ScheduleEvaluator, current_status, format_current_status,
};
pub use summary::{compact_summary, today_hours, weekday_range_summary};

/// An HTML fragment ready to be embedded as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// Wraps a fragment that is already escaped.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escapes plain text.
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self(escape_html(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Drops tags, turning `<br>` into line breaks, and unescapes entities.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let html = self.0.replace("<br>", "\n");
        let mut text = String::with_capacity(html.len());
        let mut in_tag = false;

        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                _ if !in_tag => text.push(c),
                _ => {}
            }
        }

        unescape_html(&text)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
