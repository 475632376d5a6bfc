use serde::{Deserialize, Serialize};

/// Raw state of a day or exception field before validation.
///
/// Text comes from a single input box; lists come from stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Splits the value into range tokens.
    ///
    /// Spaces are removed, text is split on commas and empty tokens are
    /// dropped. List elements go through the same steps.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Self::Text(text) => split_ranges(text).collect(),
            Self::List(items) => items.iter().flat_map(|item| split_ranges(item)).collect(),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

fn split_ranges(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(',')
        .map(|token| token.replace(' ', ""))
        .filter(|token| !token.is_empty())
}

/// Joins stored ranges into the text shown in a day input.
#[must_use]
pub fn hydrate_day(ranges: &[String]) -> String {
    ranges.join(",")
}
