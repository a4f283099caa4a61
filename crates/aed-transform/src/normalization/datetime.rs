//! Inspection date normalization.
//!
//! Source data records when a device was last checked in a handful of
//! layouts (`2023-12-14`, `24/11/2023`, `24:11:2023`, `2023_12_14`,
//! `31 Jan 2025`, ...). Recognized dates are rewritten as `DD/Mon/YYYY`.
//! Anything else is kept as text: a bad date never costs a record.

use chrono::{Datelike, NaiveDate};

use aed_model::LastChecked;

/// An accepted input layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    /// chrono format string.
    pub pattern: &'static str,
    /// Sample input in this layout.
    pub example: &'static str,
}

/// Input layouts, tried in order. First match wins.
pub const INPUT_DATE_FORMATS: &[DateFormat] = &[
    DateFormat {
        pattern: "%Y-%m-%d",
        example: "2023-12-14",
    },
    DateFormat {
        pattern: "%d/%m/%Y",
        example: "24/11/2023",
    },
    DateFormat {
        pattern: "%d-%m-%Y",
        example: "31-01-2025",
    },
    DateFormat {
        pattern: "%d %b %Y",
        example: "31 Jan 2025",
    },
    DateFormat {
        pattern: "%d %B %Y",
        example: "31 January 2025",
    },
];


/// Normalize an inspection date.
///
/// Returns `None` for missing or empty input. Otherwise the value is trimmed
/// and its separators cleaned; a recognized date becomes
/// [`LastChecked::Normalized`], anything else [`LastChecked::Unparsed`]
/// holding the cleaned text.
pub fn normalize_date(value: Option<&str>) -> Option<LastChecked> {
    let value = value.filter(|value| !value.is_empty())?;
    let cleaned = clean_separators(value);
    Some(match parse_date(&cleaned) {
        Some(date) => LastChecked::Normalized(date),
        None => LastChecked::Unparsed(cleaned),
    })
}

/// Trim and map alternate separators: `:` to `/` and `_` to `-`.
///
/// `24:11:2023` becomes `24/11/2023`; `2023_12_14` becomes `2023-12-14`.
pub fn clean_separators(value: &str) -> String {
    value.trim().replace(':', "/").replace('_', "-")
}

/// Parse a cleaned value against [`INPUT_DATE_FORMATS`].
///
/// A value must have the layout of a format before chrono sees it: chrono
/// lets a space in the pattern match no whitespace at all and accepts a
/// signed `%Y`, so `31Jan2025` and `+2023-12-14` would otherwise parse.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    INPUT_DATE_FORMATS
        .iter()
        .filter(|format| has_layout(value, format.pattern))
        .find_map(|format| {
            NaiveDate::parse_from_str(value, format.pattern)
                .ok()
                .filter(|date| date.year() >= 1)
        })
}

/// Field-by-field shape check of `value` against a three-field pattern.
///
/// `%Y` is exactly four digits, `%d` and `%m` one or two digits, month names
/// ASCII letters. Space-separated patterns need whitespace between fields.
fn has_layout(value: &str, pattern: &str) -> bool {
    let (fields, specs): (Vec<&str>, Vec<&str>) =
        match pattern.chars().find(|c| matches!(c, '-' | '/')) {
            Some(separator) => (
                value.split(separator).collect(),
                pattern.split(separator).collect(),
            ),
            None => (
                value.split_whitespace().collect(),
                pattern.split_whitespace().collect(),
            ),
        };
    fields.len() == specs.len()
        && fields
            .iter()
            .zip(&specs)
            .all(|(field, spec)| field_matches(field, spec))
}

fn field_matches(field: &str, spec: &str) -> bool {
    let digits = |min: usize, max: usize| {
        (min..=max).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
    };
    match spec {
        "%Y" => digits(4, 4),
        "%d" | "%m" => digits(1, 2),
        _ => !field.is_empty() && field.bytes().all(|b| b.is_ascii_alphabetic()),
    }
}
