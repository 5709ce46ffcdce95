use std::env;

use anyhow::Context;
use anyhow::Result;

use crate::locale::Locale;

#[derive(Debug, Clone)]
pub struct Config {
  pub bot_token: String,
  pub admin_id: Option<i64>,
  pub locale: Locale,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let bot_token = env::var("BOT_TOKEN")
      .or_else(|_| env::var("TELOXIDE_TOKEN"))
      .context("BOT_TOKEN or TELOXIDE_TOKEN must be set")?;

    let admin_id = parse_admin_id(&env::var("ADMIN_ID").unwrap_or_default());
    let locale = parse_locale(&env::var("BOT_LOCALE").unwrap_or_default());

    Ok(Self {
      bot_token,
      admin_id,
      locale,
    })
  }
}

fn parse_admin_id(raw: &str) -> Option<i64> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }
  match trimmed.parse::<i64>() {
    Ok(value) => Some(value),
    Err(err) => {
      tracing::warn!(value = trimmed, error = %err, "invalid ADMIN_ID, admin notifications disabled");
      None
    },
  }
}

fn parse_locale(raw: &str) -> Locale {
  if raw.trim().is_empty() {
    return Locale::default();
  }
  raw.parse().unwrap_or_else(|err| {
    tracing::warn!(value = raw, error = %err, "invalid BOT_LOCALE, using default");
    Locale::default()
  })
}
