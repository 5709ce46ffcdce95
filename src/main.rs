mod amount;
mod app;
mod bot;
mod config;
mod conversion;
mod format;
mod locale;
mod notify;
mod telemetry;

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::Bot;
use tracing::info;

use crate::notify::AdminNotifier;
use crate::notify::InMemNotifiedUsers;

#[tokio::main]
async fn main() -> Result<()> {
  telemetry::init()?;
  let config = config::Config::from_env()?;
  info!(
    locale = %config.locale,
    admin_notifications = config.admin_id.is_some(),
    "starting bot"
  );

  let bot = Bot::new(config.bot_token.clone());
  let notifier = AdminNotifier::new(config.admin_id, Arc::new(InMemNotifiedUsers::default()));
  let app = app::App::new(bot, notifier, config.locale);
  app.run().await
}
