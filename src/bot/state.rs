use serde::Deserialize;
use serde::Serialize;

use crate::conversion::ConversionDirection;

/// Per-chat dialogue slot. The only thing remembered is which way to convert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case", tag = "kind", content = "data")]
pub enum ConversationState {
  #[default]
  Idle,
  AwaitingAmount { direction: ConversionDirection },
}

#[cfg(test)]
mod tests {
  use super::ConversationState;

  #[test]
  fn idle_is_default() {
    assert_eq!(ConversationState::default(), ConversationState::Idle);
  }
}
