use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Old-scale units per new-scale unit (two zeros were dropped).
pub const CONVERSION_FACTOR: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConversionDirection {
  /// The supplied amount is in the old scale.
  OldToNew,
  /// The supplied amount is in the new scale.
  NewToOld,
}

/// The same sum expressed in both scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
  pub old_value: Decimal,
  pub new_value: Decimal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
  #[error("amount must not be negative")]
  NegativeAmount,
}

impl ConversionDirection {
  pub fn convert(self, amount: Decimal) -> Conversion {
    match self {
      Self::OldToNew => Conversion {
        old_value: amount,
        new_value: amount / CONVERSION_FACTOR,
      },
      Self::NewToOld => Conversion {
        old_value: amount.saturating_mul(CONVERSION_FACTOR),
        new_value: amount,
      },
    }
  }

  /// Converts a user-supplied amount, refusing negative sums.
  pub fn apply(self, amount: Decimal) -> Result<Conversion, ConversionError> {
    if amount.is_sign_negative() && !amount.is_zero() {
      return Err(ConversionError::NegativeAmount);
    }
    Ok(self.convert(amount))
  }

  pub fn callback_data(self) -> &'static str {
    match self {
      Self::OldToNew => "mode:old_to_new",
      Self::NewToOld => "mode:new_to_old",
    }
  }

  pub fn from_callback_value(value: &str) -> Option<Self> {
    match value {
      "old_to_new" => Some(Self::OldToNew),
      "new_to_old" => Some(Self::NewToOld),
      _ => None,
    }
  }
}

impl fmt::Display for ConversionDirection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::OldToNew => f.write_str("old_to_new"),
      Self::NewToOld => f.write_str("new_to_old"),
    }
  }
}

#[cfg(test)]
mod tests {
  use rust_decimal::Decimal;
  use rust_decimal_macros::dec;

  use super::Conversion;
  use super::ConversionDirection;
  use super::ConversionError;

  #[test]
  fn converts_old_to_new() {
    assert_eq!(
      ConversionDirection::OldToNew.convert(dec!(125000)),
      Conversion {
        old_value: dec!(125000),
        new_value: dec!(1250),
      }
    );
    assert_eq!(ConversionDirection::OldToNew.convert(dec!(50)).new_value, dec!(0.5));
  }

  #[test]
  fn converts_new_to_old() {
    let conversion = ConversionDirection::NewToOld.convert(dec!(1250.75));
    assert_eq!(conversion.new_value, dec!(1250.75));
    assert_eq!(conversion.old_value, dec!(125075));
  }

  #[test]
  fn round_trips_exactly() {
    let samples = [
      dec!(0),
      dec!(0.01),
      dec!(1),
      dec!(99.99),
      dec!(125000),
      dec!(1234567.89),
      dec!(999999999999.99),
    ];
    for amount in samples {
      let new_value = ConversionDirection::OldToNew.convert(amount).new_value;
      let back = ConversionDirection::NewToOld.convert(new_value).old_value;
      assert_eq!(back, amount, "round trip of {amount}");
    }
  }

  #[test]
  fn rejects_negative_amounts() {
    assert_eq!(
      ConversionDirection::OldToNew.apply(dec!(-1)),
      Err(ConversionError::NegativeAmount)
    );
    assert!(ConversionDirection::NewToOld.apply(Decimal::ZERO).is_ok());
  }

  #[test]
  fn callback_values_round_trip() {
    for direction in [ConversionDirection::OldToNew, ConversionDirection::NewToOld] {
      let (_, value) = direction.callback_data().split_once(':').unwrap_or_default();
      assert_eq!(ConversionDirection::from_callback_value(value), Some(direction));
    }
    assert_eq!(ConversionDirection::from_callback_value("sideways"), None);
  }
}
