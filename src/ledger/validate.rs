use chrono::NaiveDate;

use crate::errors::ValidationError;

use super::record::{ValidatedExpenseInput, UNTITLED_TITLE};
use super::Category;

/// Checks raw field values against the input rules, in order, short-circuiting
/// on the first failure: amount, then category, then date. The title is never
/// rejected; empty or whitespace-only input becomes the placeholder title.
pub fn validate(
    raw_title: &str,
    raw_amount: &str,
    raw_category: &str,
    raw_date: &str,
) -> Result<ValidatedExpenseInput, ValidationError> {
    let amount = parse_amount(raw_amount)?;

    if raw_category.is_empty() {
        return Err(ValidationError::MissingCategory);
    }
    let category: Category = raw_category
        .parse()
        .map_err(|_| ValidationError::MissingCategory)?;

    let date = parse_date(raw_date)?;

    Ok(ValidatedExpenseInput {
        title: normalize_title(raw_title),
        amount,
        category,
        date,
    })
}

/// Trims the title and substitutes the placeholder when nothing remains.
pub fn normalize_title(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNTITLED_TITLE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses a currency amount from free text, tolerating decoration such as
/// currency symbols and thousands separators. Signs are kept so that a
/// negative input still parses and is rejected for being non-positive rather
/// than silently flipped positive.
fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
        .collect();
    if cleaned.is_empty() {
        return Err(ValidationError::InvalidAmount);
    }
    let amount: f64 = cleaned.parse().map_err(|_| ValidationError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(amount)
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingDate);
    }
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ValidationError::MissingDate)
}
