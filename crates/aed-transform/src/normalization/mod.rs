//! Normalization functions for AED source fields.
//!
//! - **datetime**: free-text inspection dates to `DD/Mon/YYYY`
//! - **access**: free-text access tags to `AccessLevel`
//! - **fields**: indoor flag, derived name

pub mod access;
pub mod datetime;
pub mod fields;

pub use access::normalize_access;
pub use datetime::{
    DateFormat, INPUT_DATE_FORMATS, clean_separators, normalize_date, parse_date,
};
pub use fields::{AED_NAME, derive_name, is_indoor};
