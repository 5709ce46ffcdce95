use crate::locale::Locale;

/// Every user-facing string of the bot in one language.
#[derive(Debug)]
pub struct Texts {
  pub welcome: &'static str,
  pub help: &'static str,
  pub prompt_old_to_new: &'static str,
  pub prompt_new_to_old: &'static str,
  pub result_title: &'static str,
  pub old_label: &'static str,
  pub new_label: &'static str,
  pub currency: &'static str,
  pub parse_failed: &'static str,
  pub negative_amount: &'static str,
  pub pick_direction_first: &'static str,
  pub button_old_to_new: &'static str,
  pub button_new_to_old: &'static str,
  pub button_help: &'static str,
  pub button_back: &'static str,
  pub no_value: &'static str,
  pub visitor_notice_title: &'static str,
}

static ARABIC: Texts = Texts {
  welcome: "👋🇸🇾 أهلاً بك في بوت تحويل الليرة السورية\n\n\
            بعد حذف صفرين من الليرة السورية قد يحدث بعض الالتباس في الحسابات،\n\
            هذا البوت يساعدك على تحويل أي مبلغ بين الليرة القديمة والجديدة بسرعة ودقة 💱\n\n\
            📌 اختر نوع التحويل من الأزرار بالأسفل ثم اكتب المبلغ ✍️",
  help: "🇸🇾 شرح سريع – تحويل الليرة السورية\n\n\
         100 ليرة قديمة = 1 ليرة جديدة\n\n\
         🔁 من قديم إلى جديد → قسمة على 100\n\
         🔁 من جديد إلى قديم → ضرب × 100\n\n\
         يمكنك كتابة المبلغ بالأرقام العربية أو الهندية، مع الفواصل أو كلمات مثل ألف ومليون ومليار.",
  prompt_old_to_new: "🧮 تحويل من قديم إلى جديد\nاكتب المبلغ بالعملة القديمة الآن:\nمثال: 125000",
  prompt_new_to_old: "🧮 تحويل من جديد إلى قديم\nاكتب المبلغ بالعملة الجديدة الآن:\nمثال: 1250",
  result_title: "💱 ✅ نتيجة التحويل",
  old_label: "المبلغ القديم",
  new_label: "المبلغ الجديد",
  currency: "ليرة",
  parse_failed: "❌ ما قدرت أفهم الرقم.",
  negative_amount: "❌ رجاءً اكتب مبلغ موجب.",
  pick_direction_first: "📌 اختر نوع التحويل أولاً من الأزرار بالأسفل.",
  button_old_to_new: "🔁 من قديم إلى جديد",
  button_new_to_old: "🔁 من جديد إلى قديم",
  button_help: "ℹ️ شرح سريع",
  button_back: "🔙 رجوع",
  no_value: "بدون",
  visitor_notice_title: "🚨 مستخدم دخل البوت",
};

static ENGLISH: Texts = Texts {
  welcome: "👋🇸🇾 Welcome to the Syrian pound converter\n\n\
            Two zeros were dropped from the Syrian pound, which makes mental arithmetic easy to get wrong.\n\
            This bot converts any amount between the old and the new pound quickly and exactly 💱\n\n\
            📌 Pick a direction below, then type the amount ✍️",
  help: "🇸🇾 Quick guide – Syrian pound conversion\n\n\
         100 old pounds = 1 new pound\n\n\
         🔁 Old to new → divide by 100\n\
         🔁 New to old → multiply by 100\n\n\
         Amounts may use Arabic digits, thousands separators or words like thousand, million and billion.",
  prompt_old_to_new: "🧮 Old to new\nType the amount in old pounds:\nExample: 125000",
  prompt_new_to_old: "🧮 New to old\nType the amount in new pounds:\nExample: 1250",
  result_title: "💱 ✅ Conversion result",
  old_label: "Old amount",
  new_label: "New amount",
  currency: "SYP",
  parse_failed: "❌ I could not understand that number.",
  negative_amount: "❌ Please enter a positive amount.",
  pick_direction_first: "📌 Pick a conversion direction from the buttons below first.",
  button_old_to_new: "🔁 Old to new",
  button_new_to_old: "🔁 New to old",
  button_help: "ℹ️ Quick guide",
  button_back: "🔙 Back",
  no_value: "none",
  visitor_notice_title: "🚨 New user opened the bot",
};

impl Texts {
  pub fn for_locale(locale: Locale) -> &'static Texts {
    match locale {
      Locale::Arabic => &ARABIC,
      Locale::English => &ENGLISH,
    }
  }
}
