//! Invariant rules for board and panel attributes.
//!
//! Every rule is a plain function returning `Result<()>`; construction and mutation
//! in [`crate::core::equipment`] compose them explicitly.

use crate::core::equipment::Attributes;
use crate::errors::{Error, Result};
use chrono::Datelike;

/// Earliest accepted manufacture or installation year
pub const MIN_YEAR: i32 = 1900;
/// Maximum length of `name`, in characters
pub const NAME_MAX_LEN: usize = 200;
/// Maximum length of `location`, in characters
pub const LOCATION_MAX_LEN: usize = 200;
/// Maximum length of `brand`, in characters
pub const BRAND_MAX_LEN: usize = 100;

/// Calendar year of the local wall clock at the time of the call.
///
/// Evaluated at write time only: stored rows are never re-checked when the year rolls over.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Requires a non-blank string of at most `max_len` characters.
///
/// # Errors
/// Returns [`Error::Validation`] naming `field` when the value is blank or too long.
pub fn required_text(field: &'static str, value: &str, max_len: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, format!("{field} cannot be empty")));
    }
    max_chars(field, value, max_len)
}

/// Allows an absent value, otherwise requires at most `max_len` characters.
///
/// # Errors
/// Returns [`Error::Validation`] naming `field` when the value is too long.
pub fn optional_text(field: &'static str, value: Option<&str>, max_len: usize) -> Result<()> {
    value.map_or(Ok(()), |value| max_chars(field, value, max_len))
}

fn max_chars(field: &'static str, value: &str, max_len: usize) -> Result<()> {
    if value.chars().count() > max_len {
        return Err(Error::validation(
            field,
            format!("{field} must be at most {max_len} characters"),
        ));
    }
    Ok(())
}

/// Requires a finite amperage strictly greater than zero.
///
/// # Errors
/// Returns [`Error::Validation`] for zero, negative, NaN or infinite values.
pub fn positive_amperage(value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::validation(
            "amperage_capacity",
            format!("amperage_capacity must be a positive number, got {value}"),
        ));
    }
    Ok(())
}

/// Requires `MIN_YEAR <= year <= current_year`.
///
/// # Errors
/// Returns [`Error::Validation`] naming `field` when the year is out of range.
pub fn year_in_range(field: &'static str, year: i32, current_year: i32) -> Result<()> {
    if year < MIN_YEAR {
        return Err(Error::validation(
            field,
            format!("{field} must be >= {MIN_YEAR}"),
        ));
    }
    if year > current_year {
        return Err(Error::validation(
            field,
            format!("Year cannot be in the future (>{current_year})"),
        ));
    }
    Ok(())
}

/// Whole-object rule: installation cannot precede manufacture.
///
/// # Errors
/// Returns [`Error::Validation`] on `year_installed` when the ordering is violated.
pub fn installed_after_manufactured(year_manufactured: i32, year_installed: i32) -> Result<()> {
    if year_installed < year_manufactured {
        return Err(Error::validation(
            "year_installed",
            "year_installed must be >= year_manufactured",
        ));
    }
    Ok(())
}

/// Runs every attribute rule, then the cross-field ordering rule.
///
/// # Errors
/// Returns the first violated rule as [`Error::Validation`].
pub fn validate_attributes<S>(attrs: &Attributes<S>, current_year: i32) -> Result<()> {
    required_text("name", &attrs.name, NAME_MAX_LEN)?;
    required_text("location", &attrs.location, LOCATION_MAX_LEN)?;
    optional_text("brand", attrs.brand.as_deref(), BRAND_MAX_LEN)?;
    positive_amperage(attrs.amperage_capacity)?;
    year_in_range("year_manufactured", attrs.year_manufactured, current_year)?;
    year_in_range("year_installed", attrs.year_installed, current_year)?;
    installed_after_manufactured(attrs.year_manufactured, attrs.year_installed)
}
