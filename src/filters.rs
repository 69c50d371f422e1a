//! Import filters and year-token validation.

use crate::error::{Error, Result};
use chrono::{Datelike, Utc};
use std::collections::BTreeSet;

/// Restriction on a set of string keys (authority codes or measure codenames).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StringFilter {
    /// Everything passes.
    #[default]
    Unfiltered,
    /// Only the listed values pass.
    RestrictedTo(BTreeSet<String>),
}

impl StringFilter {
    /// Build a filter from values; no values means no restriction.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if set.is_empty() {
            StringFilter::Unfiltered
        } else {
            StringFilter::RestrictedTo(set)
        }
    }

    /// Exact, case-sensitive membership.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            StringFilter::Unfiltered => true,
            StringFilter::RestrictedTo(set) => set.contains(value),
        }
    }

    pub fn matches_ignore_case(&self, value: &str) -> bool {
        match self {
            StringFilter::Unfiltered => true,
            StringFilter::RestrictedTo(set) => {
                let value = value.to_lowercase();
                set.iter().any(|s| s.to_lowercase() == value)
            }
        }
    }
}

/// Inclusive year range restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YearFilter {
    #[default]
    Unfiltered,
    Range { start: u32, end: u32 },
}

impl YearFilter {
    /// A 0 bound means every year.
    pub fn from_bounds(start: u32, end: u32) -> Self {
        if start == 0 || end == 0 {
            YearFilter::Unfiltered
        } else {
            YearFilter::Range { start, end }
        }
    }

    pub fn contains(&self, year: u32) -> bool {
        match *self {
            YearFilter::Unfiltered => true,
            YearFilter::Range { start, end } => year >= start && year <= end,
        }
    }
}

/// The three filters applied by an import call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub areas: StringFilter,
    pub measures: StringFilter,
    pub years: YearFilter,
}

impl Filters {
    /// No restriction at all.
    pub fn all() -> Self {
        Self::default()
    }
}

/// First year rejected by [`validate_year`]: next calendar year.
pub fn year_cutoff() -> u32 {
    (Utc::now().year() + 1) as u32
}

/// Parse a year token.
///
/// `"0"` is accepted as the "no filter" sentinel. Anything else must be four
/// ASCII digits naming a year before [`year_cutoff`].
pub fn validate_year(token: &str) -> Result<u32> {
    if token == "0" {
        return Ok(0);
    }
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed(format!("invalid year: {token:?}")));
    }
    let year: u32 = token
        .parse()
        .map_err(|_| Error::malformed(format!("invalid year: {token:?}")))?;
    if year >= year_cutoff() {
        return Err(Error::malformed(format!("year {year} is in the future")));
    }
    Ok(year)
}

/// Parse the year of a data reading. Like [`validate_year`], but the `"0"`
/// sentinel is not a calendar year and is rejected.
pub fn parse_data_year(token: &str) -> Result<u32> {
    match validate_year(token)? {
        0 => Err(Error::malformed(format!("invalid data year: {token:?}"))),
        year => Ok(year),
    }
}
