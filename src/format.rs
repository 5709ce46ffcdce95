use rust_decimal::Decimal;

use crate::locale::Locale;
use crate::locale::Magnitude;

/// Amounts below this are shown as-is; abbreviating them reads as a different number.
pub const ABBREVIATION_THRESHOLD: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Renders an amount for display.
///
/// Small amounts print as the exact number. From [`ABBREVIATION_THRESHOLD`] upwards the exact
/// number is followed by a magnitude-word abbreviation, e.g. `100000 (100 thousand)`.
pub fn format_amount(value: Decimal, locale: Locale) -> String {
  let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "" };
  let magnitude = value.abs();
  let full = canonical(magnitude);

  if magnitude < ABBREVIATION_THRESHOLD {
    return format!("{sign}{full}");
  }

  let scale = abbreviation_scale(magnitude);
  let short = canonical(magnitude / scale.factor());
  format!("{sign}{full} ({sign}{short} {})", scale.word(locale))
}

fn abbreviation_scale(magnitude: Decimal) -> Magnitude {
  if magnitude < Magnitude::Million.factor() {
    Magnitude::Thousand
  } else if magnitude < Magnitude::Billion.factor() {
    Magnitude::Million
  } else {
    Magnitude::Billion
  }
}

/// Plain decimal text without trailing fractional zeros.
fn canonical(value: Decimal) -> String {
  value.normalize().to_string()
}
