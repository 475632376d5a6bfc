use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Any leap year; recurring keys are checked against it so `02-29` exists.
const LEAP_YEAR: i32 = 2000;

/// Key of an exception entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateKey {
    /// `YYYY-MM-DD`, applies once.
    Exact(NaiveDate),
    /// `MM-DD`, applies every year.
    Recurring { month: u32, day: u32 },
}

impl DateKey {
    /// Parses `YYYY-MM-DD` or `MM-DD`.
    ///
    /// Exact dates must round-trip through a strict parse, so `2023-02-29`
    /// and `2024-13-01` are rejected.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        if has_shape(key, &[4, 2, 2]) {
            let date = NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()?;
            return (date.format("%Y-%m-%d").to_string() == key).then_some(Self::Exact(date));
        }

        if has_shape(key, &[2, 2]) {
            let (month, day) = key.split_once('-')?;
            let month = month.parse().ok()?;
            let day = day.parse().ok()?;
            NaiveDate::from_ymd_opt(LEAP_YEAR, month, day)?;
            return Some(Self::Recurring { month, day });
        }

        None
    }

    /// True when this key applies to `date`.
    #[must_use]
    pub fn matches(self, date: NaiveDate) -> bool {
        match self {
            Self::Exact(exact) => exact == date,
            Self::Recurring { month, day } => date.month() == month && date.day() == day,
        }
    }
}

/// Checks for digit groups of the given widths separated by `-`.
fn has_shape(key: &str, widths: &[usize]) -> bool {
    let groups: Vec<&str> = key.split('-').collect();
    groups.len() == widths.len()
        && groups
            .iter()
            .zip(widths)
            .all(|(group, &width)| group.len() == width && group.bytes().all(|b| b.is_ascii_digit()))
}

/// Date-specific hours, in insertion order.
///
/// Keys are kept as written so invalid keys survive until validation.
/// Serializes as a JSON object; inserting an existing key replaces its
/// ranges in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exceptions {
    entries: Vec<(String, Vec<String>)>,
}

impl Exceptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn insert(&mut self, key: impl Into<String>, ranges: Vec<String>) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = ranges;
        } else {
            self.entries.push((key, ranges));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, ranges)| ranges.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, ranges)| (key.as_str(), ranges.as_slice()))
    }
}

impl FromIterator<(String, Vec<String>)> for Exceptions {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut exceptions = Self::new();
        for (key, ranges) in iter {
            exceptions.insert(key, ranges);
        }
        exceptions
    }
}

impl Serialize for Exceptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, ranges) in &self.entries {
            map.serialize_entry(key, ranges)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Exceptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExceptionsVisitor;

        impl<'de> Visitor<'de> for ExceptionsVisitor {
            type Value = Exceptions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of date keys to time range lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut exceptions = Exceptions::new();
                while let Some((key, ranges)) = access.next_entry::<String, Vec<String>>()? {
                    exceptions.insert(key, ranges);
                }
                Ok(exceptions)
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(Exceptions::new())
            }
        }

        deserializer.deserialize_any(ExceptionsVisitor)
    }
}
