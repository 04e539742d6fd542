//! Input Validation
//!
//! Calorie amounts typed by the user.

use thiserror::Error;

/// Message shown under the form for a rejected amount
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid calorie amount!";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", INVALID_AMOUNT_MESSAGE)]
    InvalidAmount,
}

/// Parse a positive, finite amount. Surrounding whitespace is ignored.
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Accept an amount iff it is non-empty, numeric and strictly positive
pub fn check_value(input: &str) -> Result<f64, ValidationError> {
    parse_amount(input).ok_or(ValidationError::InvalidAmount)
}
