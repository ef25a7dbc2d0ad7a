//! Section record - a named, ordered group of questions.

use serde::{Deserialize, Serialize};

use super::Question;
use crate::domain::foundation::QuestionId;

/// One evaluative dimension of the questionnaire.
///
/// Section order is display order and defines the navigation sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Display title of the section.
    pub title: String,
    /// Questions in display order.
    pub questions: Vec<Question>,
}

impl Section {
    /// Returns the number of questions in this section.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the section contains the given question id.
    pub fn contains_question(&self, id: &QuestionId) -> bool {
        self.questions.iter().any(|q| &q.id == id)
    }
}
