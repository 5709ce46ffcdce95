use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;

use teloxide::types::ChatId;
use teloxide::types::User;

use crate::bot::texts::Texts;

/// Remembers which users the admin has already been told about.
pub trait NotifiedUsers: Send + Sync {
  /// Records `user_id`, returning `true` only the first time it is seen.
  fn mark_notified(&self, user_id: i64) -> bool;
}

#[derive(Debug, Default)]
pub struct InMemNotifiedUsers {
  seen: Mutex<HashSet<i64>>,
}

impl NotifiedUsers for InMemNotifiedUsers {
  fn mark_notified(&self, user_id: i64) -> bool {
    let mut seen = self.seen.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    seen.insert(user_id)
  }
}

#[derive(Clone)]
pub struct AdminNotifier {
  admin: Option<ChatId>,
  store: Arc<dyn NotifiedUsers>,
}

impl AdminNotifier {
  pub fn new(admin_id: Option<i64>, store: Arc<dyn NotifiedUsers>) -> Self {
    Self {
      admin: admin_id.map(ChatId),
      store,
    }
  }

  /// Chat to alert about a newly seen user, if any. Each user is reported once.
  pub fn recipient_for(&self, user_id: i64) -> Option<ChatId> {
    let admin = self.admin?;
    self.store.mark_notified(user_id).then_some(admin)
  }
}

/// Alert text describing a user who just opened the bot.
pub fn render_visitor_notice(user: &User, texts: &Texts) -> String {
  visitor_notice(user.id.0, user.username.as_deref(), &user.full_name(), texts)
}

fn visitor_notice(user_id: u64, username: Option<&str>, full_name: &str, texts: &Texts) -> String {
  let username = username
    .map(|name| format!("@{name}"))
    .unwrap_or_else(|| texts.no_value.to_string());
  let full_name = match full_name.trim() {
    "" => texts.no_value,
    name => name,
  };
  format!(
    "{}\nID: {user_id}\nUsername: {username}\nName: {full_name}",
    texts.visitor_notice_title
  )
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use teloxide::types::ChatId;

  use super::AdminNotifier;
  use super::InMemNotifiedUsers;
  use super::NotifiedUsers;
  use super::visitor_notice;
  use crate::bot::texts::Texts;
  use crate::locale::Locale;

  #[test]
  fn store_reports_first_sighting_only() {
    let store = InMemNotifiedUsers::default();
    assert!(store.mark_notified(1));
    assert!(!store.mark_notified(1));
    assert!(store.mark_notified(2));
  }

  #[test]
  fn notifies_admin_once_per_user() {
    let notifier = AdminNotifier::new(Some(99), Arc::new(InMemNotifiedUsers::default()));
    assert_eq!(notifier.recipient_for(7), Some(ChatId(99)));
    assert_eq!(notifier.recipient_for(7), None);
  }

  #[test]
  fn without_admin_nothing_is_recorded() {
    let store = Arc::new(InMemNotifiedUsers::default());
    let notifier = AdminNotifier::new(None, store.clone());
    assert_eq!(notifier.recipient_for(7), None);
    assert!(store.mark_notified(7));
  }

  #[test]
  fn renders_notice_with_placeholders() {
    let texts = Texts::for_locale(Locale::English);
    let with_name = visitor_notice(42, Some("sami"), "Sami Haddad", texts);
    assert!(with_name.contains("ID: 42"));
    assert!(with_name.contains("Username: @sami"));
    assert!(with_name.contains("Name: Sami Haddad"));

    let anonymous = visitor_notice(42, None, " ", texts);
    assert!(anonymous.contains(&format!("Username: {}", texts.no_value)));
    assert!(anonymous.contains(&format!("Name: {}", texts.no_value)));
  }
}
