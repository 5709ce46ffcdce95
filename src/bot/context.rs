use crate::bot::texts::Texts;
use crate::locale::Locale;
use crate::notify::AdminNotifier;

#[derive(Clone)]
pub struct AppContext {
  notifier: AdminNotifier,
  locale: Locale,
}

impl AppContext {
  pub fn new(notifier: AdminNotifier, locale: Locale) -> Self {
    Self { notifier, locale }
  }

  pub fn notifier(&self) -> &AdminNotifier {
    &self.notifier
  }

  pub fn locale(&self) -> Locale {
    self.locale
  }

  pub fn texts(&self) -> &'static Texts {
    Texts::for_locale(self.locale)
  }
}
