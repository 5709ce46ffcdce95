use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
  #[default]
  Arabic,
  English,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale `{0}`, expected `ar` or `en`")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
  type Err = UnknownLocale;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "ar" | "arabic" => Ok(Self::Arabic),
      "en" | "english" => Ok(Self::English),
      other => Err(UnknownLocale(other.to_string())),
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Arabic => f.write_str("ar"),
      Self::English => f.write_str("en"),
    }
  }
}

/// Power-of-ten scale named by a word, as in "150 thousand".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
  Thousand,
  Million,
  Billion,
}

impl Magnitude {
  /// Largest first, so lookups stop at the biggest matching scale.
  pub const DESCENDING: [Magnitude; 3] = [Magnitude::Billion, Magnitude::Million, Magnitude::Thousand];

  pub fn factor(self) -> Decimal {
    match self {
      Self::Thousand => Decimal::from(1_000u64),
      Self::Million => Decimal::from(1_000_000u64),
      Self::Billion => Decimal::from(1_000_000_000u64),
    }
  }

  /// Word appended to abbreviated amounts.
  pub fn word(self, locale: Locale) -> &'static str {
    match (self, locale) {
      (Self::Thousand, Locale::Arabic) => "ألف",
      (Self::Million, Locale::Arabic) => "مليون",
      (Self::Billion, Locale::Arabic) => "مليار",
      (Self::Thousand, Locale::English) => "thousand",
      (Self::Million, Locale::English) => "million",
      (Self::Billion, Locale::English) => "billion",
    }
  }

  /// Every lower-case spelling accepted in user input, across all locales.
  pub fn spellings(self) -> &'static [&'static str] {
    match self {
      Self::Thousand => &["ألف", "الف", "thousand"],
      Self::Million => &["مليون", "million"],
      Self::Billion => &["مليار", "billion"],
    }
  }
}
