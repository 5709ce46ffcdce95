use std::sync::Arc;

use anyhow::Context;
use rust_decimal::Decimal;
use teloxide::ApiError;
use teloxide::RequestError;
use teloxide::dispatching::UpdateHandler;
use teloxide::dispatching::dialogue::Dialogue;
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use teloxide::types::ChatId;
use teloxide::types::InlineKeyboardButton;
use teloxide::types::InlineKeyboardMarkup;
use teloxide::types::Message;
use teloxide::types::MessageId;
use teloxide::utils::command::BotCommands;
use thiserror::Error;
use tracing::info;
use tracing::instrument;
use tracing::warn;

use crate::amount::ParseError;
use crate::amount::parse_amount;
use crate::bot::Command;
use crate::bot::DialogueStorage;
use crate::bot::HandlerResult;
use crate::bot::context::AppContext;
use crate::bot::state::ConversationState;
use crate::bot::texts::Texts;
use crate::conversion::Conversion;
use crate::conversion::ConversionDirection;
use crate::conversion::ConversionError;
use crate::format::format_amount;
use crate::locale::Locale;
use crate::notify::render_visitor_notice;

type SharedContext = Arc<AppContext>;
type BotDialogue = Dialogue<ConversationState, DialogueStorage>;

pub fn build_schema() -> UpdateHandler<anyhow::Error> {
  let message_handler = Update::filter_message()
    .enter_dialogue::<Message, DialogueStorage, ConversationState>()
    .branch(command_branch())
    .branch(dptree::case![ConversationState::AwaitingAmount { direction }].endpoint(handle_amount_message))
    .branch(dptree::endpoint(handle_idle_text));

  let callback_handler = Update::filter_callback_query()
    .enter_dialogue::<CallbackQuery, DialogueStorage, ConversationState>()
    .endpoint(handle_callback_query);

  dptree::entry().branch(message_handler).branch(callback_handler)
}

fn command_branch() -> UpdateHandler<anyhow::Error> {
  dptree::entry()
    .filter_command::<Command>()
    .branch(dptree::case![Command::Start].endpoint(handle_start))
    .branch(dptree::case![Command::Help].endpoint(handle_help))
}

#[instrument(skip(bot, ctx, dialogue, msg))]
async fn handle_start(bot: Bot, dialogue: BotDialogue, ctx: SharedContext, msg: Message) -> HandlerResult {
  dialogue.reset().await?;
  let user = msg.from.as_ref().context("message missing sender")?;
  let user_id = user.id.0 as i64;
  let username = user.username.as_deref().unwrap_or("-");
  info!(user_id, chat_id = %msg.chat.id, username, "received /start command");

  if let Some(admin) = ctx.notifier().recipient_for(user_id) {
    let notice = render_visitor_notice(user, ctx.texts());
    match bot.send_message(admin, notice).await {
      Ok(_) => info!(user_id, admin_chat_id = %admin, "notified admin about new user"),
      Err(err) => warn!(error = %err, user_id, admin_chat_id = %admin, "failed to notify admin"),
    }
  }

  let texts = ctx.texts();
  bot
    .send_message(msg.chat.id, texts.welcome)
    .reply_markup(main_menu_keyboard(texts))
    .await?;
  Ok(())
}

#[instrument(skip(bot, ctx, msg))]
async fn handle_help(bot: Bot, ctx: SharedContext, msg: Message) -> HandlerResult {
  info!(chat_id = %msg.chat.id, "received /help command");
  let texts = ctx.texts();
  let text = format!("{}\n\n{}", texts.help, Command::descriptions());
  bot
    .send_message(msg.chat.id, text)
    .reply_markup(back_keyboard(texts))
    .await?;
  Ok(())
}

#[instrument(skip(bot, ctx, msg))]
async fn handle_amount_message(
  bot: Bot,
  ctx: SharedContext,
  msg: Message,
  direction: ConversionDirection,
) -> HandlerResult {
  let Some(text) = message_text(&msg).filter(|text| !text.starts_with('/')) else {
    return Ok(());
  };
  let chat_id = msg.chat.id;
  let texts = ctx.texts();

  let reply = match convert_text(text, direction) {
    Ok(conversion) => {
      info!(chat_id = %chat_id, %direction, old = %conversion.old_value, new = %conversion.new_value, "converted amount");
      render_conversion(&conversion, direction, ctx.locale())
    },
    Err(err) => {
      warn!(chat_id = %chat_id, %direction, error = %err, "rejected amount input");
      rejection_text(&err, texts).to_string()
    },
  };

  bot.send_message(chat_id, reply).reply_markup(back_keyboard(texts)).await?;
  Ok(())
}

#[instrument(skip(bot, ctx, msg))]
async fn handle_idle_text(bot: Bot, ctx: SharedContext, msg: Message) -> HandlerResult {
  if let Some(text) = message_text(&msg) {
    if text.starts_with('/') {
      // unknown command, ignore to let telegram handle
    } else {
      info!(chat_id = %msg.chat.id, "idle state received text without a direction");
      let texts = ctx.texts();
      bot
        .send_message(msg.chat.id, texts.pick_direction_first)
        .reply_markup(main_menu_keyboard(texts))
        .await?;
    }
  }
  Ok(())
}

/// What a button press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallbackAction {
  Back,
  Help,
  SelectDirection(ConversionDirection),
}

fn parse_callback(data: &str) -> Option<CallbackAction> {
  let (prefix, value) = data.split_once(':')?;
  match (prefix, value) {
    ("menu", "back") => Some(CallbackAction::Back),
    ("menu", "help") => Some(CallbackAction::Help),
    ("mode", value) => ConversionDirection::from_callback_value(value).map(CallbackAction::SelectDirection),
    _ => None,
  }
}

#[instrument(skip(bot, ctx, dialogue, query))]
async fn handle_callback_query(
  bot: Bot,
  ctx: SharedContext,
  query: CallbackQuery,
  dialogue: BotDialogue,
) -> HandlerResult {
  // Answer before any step that can fail.
  bot.answer_callback_query(query.id.clone()).await?;

  let user_id = query.from.id.0 as i64;
  let message_ctx = query.message.as_ref().map(|message| (message.chat().id, message.id()));
  let callback_data = query.data.as_deref().unwrap_or("<empty>");
  info!(user_id, callback = callback_data, "handling callback query");
  let texts = ctx.texts();

  let Some(action) = parse_callback(callback_data) else {
    warn!(user_id, callback = callback_data, "unknown callback");
    return Ok(());
  };

  match action {
    CallbackAction::Back => {
      dialogue.reset().await?;
      if let Some((chat_id, message_id)) = message_ctx {
        edit_screen(&bot, chat_id, message_id, texts.welcome, main_menu_keyboard(texts)).await?;
      }
    },
    CallbackAction::Help => {
      if let Some((chat_id, message_id)) = message_ctx {
        edit_screen(&bot, chat_id, message_id, texts.help, back_keyboard(texts)).await?;
      }
    },
    CallbackAction::SelectDirection(direction) => {
      dialogue.update(ConversationState::AwaitingAmount { direction }).await?;
      info!(user_id, %direction, "conversion direction selected");
      if let Some((chat_id, message_id)) = message_ctx {
        edit_screen(&bot, chat_id, message_id, prompt_text(direction, texts), back_keyboard(texts)).await?;
      }
    },
  }
  Ok(())
}

async fn edit_screen(
  bot: &Bot,
  chat: ChatId,
  message_id: MessageId,
  text: &str,
  keyboard: InlineKeyboardMarkup,
) -> HandlerResult {
  let request = bot.edit_message_text(chat, message_id, text).reply_markup(keyboard);
  match request.await {
    Ok(_) => Ok(()),
    Err(RequestError::Api(ApiError::MessageNotModified)) => {
      info!(chat_id = %chat, message_id = %message_id, "screen already current");
      Ok(())
    },
    Err(err) => Err(err.into()),
  }
}

fn main_menu_keyboard(texts: &Texts) -> InlineKeyboardMarkup {
  InlineKeyboardMarkup::new(vec![
    vec![
      InlineKeyboardButton::callback(
        texts.button_old_to_new,
        ConversionDirection::OldToNew.callback_data().to_string(),
      ),
      InlineKeyboardButton::callback(
        texts.button_new_to_old,
        ConversionDirection::NewToOld.callback_data().to_string(),
      ),
    ],
    vec![InlineKeyboardButton::callback(texts.button_help, "menu:help".to_string())],
  ])
}

fn back_keyboard(texts: &Texts) -> InlineKeyboardMarkup {
  InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
    texts.button_back,
    "menu:back".to_string(),
  )]])
}

fn prompt_text(direction: ConversionDirection, texts: &Texts) -> &'static str {
  match direction {
    ConversionDirection::OldToNew => texts.prompt_old_to_new,
    ConversionDirection::NewToOld => texts.prompt_new_to_old,
  }
}

fn message_text(msg: &Message) -> Option<&str> {
  msg.text()
}

#[derive(Debug, Error, PartialEq, Eq)]
enum AmountRejection {
  #[error(transparent)]
  Unparsable(#[from] ParseError),
  #[error(transparent)]
  Policy(#[from] ConversionError),
}

fn convert_text(text: &str, direction: ConversionDirection) -> Result<Conversion, AmountRejection> {
  let amount: Decimal = parse_amount(text)?;
  Ok(direction.apply(amount)?)
}

fn rejection_text(err: &AmountRejection, texts: &Texts) -> &'static str {
  match err {
    AmountRejection::Unparsable(_) => texts.parse_failed,
    AmountRejection::Policy(ConversionError::NegativeAmount) => texts.negative_amount,
  }
}

/// Reply listing both scales, the one the user typed in first.
fn render_conversion(conversion: &Conversion, direction: ConversionDirection, locale: Locale) -> String {
  let texts = Texts::for_locale(locale);
  let old_line = format!(
    "• {}: {} {}",
    texts.old_label,
    format_amount(conversion.old_value, locale),
    texts.currency
  );
  let new_line = format!(
    "• {}: {} {}",
    texts.new_label,
    format_amount(conversion.new_value, locale),
    texts.currency
  );
  let (first, second) = match direction {
    ConversionDirection::OldToNew => (old_line, new_line),
    ConversionDirection::NewToOld => (new_line, old_line),
  };
  format!("{}\n\n{first}\n{second}", texts.result_title)
}

#[cfg(test)]
mod tests {
  use rust_decimal_macros::dec;
  use teloxide::types::InlineKeyboardButtonKind;

  use super::AmountRejection;
  use super::CallbackAction;
  use super::back_keyboard;
  use super::convert_text;
  use super::main_menu_keyboard;
  use super::parse_callback;
  use super::rejection_text;
  use super::render_conversion;
  use crate::amount::ParseError;
  use crate::bot::texts::Texts;
  use crate::conversion::ConversionDirection;
  use crate::conversion::ConversionError;
  use crate::locale::Locale;

  fn callback_data(button: &teloxide::types::InlineKeyboardButton) -> Option<&str> {
    match &button.kind {
      InlineKeyboardButtonKind::CallbackData(data) => Some(data.as_str()),
      _ => None,
    }
  }

  #[test]
  fn main_menu_offers_both_directions_and_help() {
    let keyboard = main_menu_keyboard(Texts::for_locale(Locale::Arabic));
    let data: Vec<_> = keyboard.inline_keyboard.iter().flatten().filter_map(callback_data).collect();
    assert_eq!(data, vec!["mode:old_to_new", "mode:new_to_old", "menu:help"]);
  }

  #[test]
  fn routes_menu_buttons() {
    let keyboard = main_menu_keyboard(Texts::for_locale(Locale::English));
    let actions: Vec<_> = keyboard
      .inline_keyboard
      .iter()
      .flatten()
      .filter_map(callback_data)
      .map(parse_callback)
      .collect();
    assert_eq!(
      actions,
      vec![
        Some(CallbackAction::SelectDirection(ConversionDirection::OldToNew)),
        Some(CallbackAction::SelectDirection(ConversionDirection::NewToOld)),
        Some(CallbackAction::Help),
      ]
    );
    assert_eq!(parse_callback("menu:back"), Some(CallbackAction::Back));
  }

  #[test]
  fn ignores_unknown_callbacks() {
    assert_eq!(parse_callback("mode:sideways"), None);
    assert_eq!(parse_callback("menu:admin"), None);
    assert_eq!(parse_callback("no-separator"), None);
    assert_eq!(parse_callback(""), None);
  }

  #[test]
  fn back_keyboard_has_single_button() {
    let keyboard = back_keyboard(Texts::for_locale(Locale::English));
    let data: Vec<_> = keyboard.inline_keyboard.iter().flatten().filter_map(callback_data).collect();
    assert_eq!(data, vec!["menu:back"]);
  }

  #[test]
  fn converts_message_text() {
    let conversion = convert_text("١٢٥ ألف", ConversionDirection::OldToNew);
    let conversion = conversion.as_ref().map(|c| (c.old_value, c.new_value));
    assert_eq!(conversion, Ok((dec!(125000), dec!(1250))));
  }

  #[test]
  fn classifies_rejections() {
    let texts = Texts::for_locale(Locale::English);

    let unparsable = convert_text("hello", ConversionDirection::OldToNew);
    assert_eq!(unparsable, Err(AmountRejection::Unparsable(ParseError::NoNumericToken)));
    assert_eq!(rejection_text(&AmountRejection::from(ParseError::Malformed), texts), texts.parse_failed);

    let negative = convert_text("-5", ConversionDirection::NewToOld);
    assert_eq!(negative, Err(AmountRejection::Policy(ConversionError::NegativeAmount)));
    assert_eq!(
      rejection_text(&AmountRejection::from(ConversionError::NegativeAmount), texts),
      texts.negative_amount
    );
  }

  #[test]
  fn renders_supplied_amount_first() {
    let conversion = ConversionDirection::OldToNew.convert(dec!(125000));
    let text = render_conversion(&conversion, ConversionDirection::OldToNew, Locale::English);
    assert_eq!(
      text,
      "💱 ✅ Conversion result\n\n• Old amount: 125000 (125 thousand) SYP\n• New amount: 1250 SYP"
    );

    let conversion = ConversionDirection::NewToOld.convert(dec!(1250));
    let text = render_conversion(&conversion, ConversionDirection::NewToOld, Locale::Arabic);
    let new_at = text.find("المبلغ الجديد").unwrap_or(usize::MAX);
    let old_at = text.find("المبلغ القديم").unwrap_or(0);
    assert!(new_at < old_at);
    assert!(text.contains("125000 (125 ألف) ليرة"));
  }
}
