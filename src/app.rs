use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::dptree;
use teloxide::prelude::*;
use tracing::info;

use crate::bot;
use crate::bot::AppContext;
use crate::bot::DialogueStorage;
use crate::locale::Locale;
use crate::notify::AdminNotifier;

pub struct App {
  bot: Bot,
  context: Arc<AppContext>,
  handler: UpdateHandler<anyhow::Error>,
}

impl App {
  pub fn new(bot: Bot, notifier: AdminNotifier, locale: Locale) -> Self {
    let context = Arc::new(AppContext::new(notifier, locale));
    let handler = bot::build_schema();
    Self { bot, context, handler }
  }

  pub async fn run(self) -> anyhow::Result<()> {
    let storage: Arc<DialogueStorage> = InMemStorage::new();

    let me = self.bot.get_me().await?;
    self.bot.delete_webhook().drop_pending_updates(true).await?;
    info!(username = me.username(), "dropped pending updates, starting polling");

    Dispatcher::builder(self.bot.clone(), self.handler)
      .dependencies(dptree::deps![self.context, storage, me])
      .enable_ctrlc_handler()
      .build()
      .dispatch()
      .await;

    Ok(())
  }
}
