use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::locale::Magnitude;

static NUMBER_PATTERN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[-+]?[0-9][0-9,\s]*(?:\.[0-9]+)?").expect("valid regex"));

/// Largest accepted magnitude. Keeps `amount * 100` inside the range of [`Decimal`].
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x4A00_0000, 0x1614_0148, 0x0008_4595, false, 0);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
  #[error("no numeric token")]
  NoNumericToken,
  #[error("malformed number")]
  Malformed,
  #[error("amount exceeds supported range")]
  OutOfRange,
}

/// Extracts an exact amount from free-form text such as `"١٢٥ ألف"` or `"1,250.50"`.
///
/// The first number in the text is used. A magnitude word anywhere in the text scales it;
/// at most one applies, the largest found. The sign is kept, rejecting negative amounts is
/// up to the caller.
pub fn parse_amount(text: &str) -> Result<Decimal, ParseError> {
  let normalized = normalize_digits(&text.trim().to_lowercase());

  let token = NUMBER_PATTERN.find(&normalized).ok_or(ParseError::NoNumericToken)?;
  if has_second_decimal_point(&normalized[token.end() ..]) {
    return Err(ParseError::NoNumericToken);
  }

  let literal: String = token
    .as_str()
    .chars()
    .filter(|c| *c != ',' && !c.is_whitespace())
    .collect();
  let literal = literal.strip_prefix('+').unwrap_or(&literal);
  if literal.is_empty() || literal == "-" {
    return Err(ParseError::Malformed);
  }
  let mut value = Decimal::from_str(literal).map_err(|_| ParseError::Malformed)?;

  if let Some(magnitude) = find_magnitude(&normalized) {
    value = value.checked_mul(magnitude.factor()).ok_or(ParseError::OutOfRange)?;
  }

  if value.abs() > MAX_AMOUNT {
    return Err(ParseError::OutOfRange);
  }
  Ok(value)
}

/// Maps Arabic-Indic (٠-٩) and Eastern Arabic (۰-۹) digits to ASCII.
pub fn normalize_digits(text: &str) -> String {
  text
    .chars()
    .map(|c| match c {
      '\u{0660}' ..= '\u{0669}' => ascii_digit(c as u32 - 0x0660),
      '\u{06F0}' ..= '\u{06F9}' => ascii_digit(c as u32 - 0x06F0),
      other => other,
    })
    .collect()
}

fn ascii_digit(offset: u32) -> char {
  char::from_digit(offset, 10).unwrap_or('0')
}

fn has_second_decimal_point(rest: &str) -> bool {
  let mut chars = rest.chars();
  chars.next() == Some('.') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

fn find_magnitude(text: &str) -> Option<Magnitude> {
  Magnitude::DESCENDING
    .into_iter()
    .find(|magnitude| magnitude.spellings().iter().any(|word| text.contains(word)))
}
