//! ResponseValue enum for recorded answers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three answer values a question can be recorded with.
///
/// Absence of a recorded value means "unanswered"; that state is modeled
/// by the response mapping, not by a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseValue {
    Yes,
    No,
    Unsure,
}

impl ResponseValue {
    /// Returns all response values in display order.
    pub fn all() -> &'static [ResponseValue] {
        &[ResponseValue::Yes, ResponseValue::No, ResponseValue::Unsure]
    }

    /// Returns true if the answer counts toward section compliance.
    pub fn is_affirmative(&self) -> bool {
        matches!(self, ResponseValue::Yes)
    }

    /// Returns true if the answer flags the question for remediation.
    pub fn needs_attention(&self) -> bool {
        matches!(self, ResponseValue::No | ResponseValue::Unsure)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ResponseValue::Yes => "Yes",
            ResponseValue::No => "No",
            ResponseValue::Unsure => "Unsure",
        }
    }
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_three_values_in_display_order() {
        let all = ResponseValue::all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], ResponseValue::Yes);
        assert_eq!(all[1], ResponseValue::No);
        assert_eq!(all[2], ResponseValue::Unsure);
    }

    #[test]
    fn only_yes_is_affirmative() {
        assert!(ResponseValue::Yes.is_affirmative());
        assert!(!ResponseValue::No.is_affirmative());
        assert!(!ResponseValue::Unsure.is_affirmative());
    }

    #[test]
    fn no_and_unsure_need_attention() {
        assert!(!ResponseValue::Yes.needs_attention());
        assert!(ResponseValue::No.needs_attention());
        assert!(ResponseValue::Unsure.needs_attention());
    }

    #[test]
    fn display_uses_labels() {
        assert_eq!(format!("{}", ResponseValue::Yes), "Yes");
        assert_eq!(format!("{}", ResponseValue::No), "No");
        assert_eq!(format!("{}", ResponseValue::Unsure), "Unsure");
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&ResponseValue::Yes).unwrap(),
            "\"yes\""
        );
        assert_eq!(
            serde_json::to_string(&ResponseValue::Unsure).unwrap(),
            "\"unsure\""
        );
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let value: ResponseValue = serde_json::from_str("\"no\"").unwrap();
        assert_eq!(value, ResponseValue::No);

        let value: ResponseValue = serde_json::from_str("\"unsure\"").unwrap();
        assert_eq!(value, ResponseValue::Unsure);
    }
}
