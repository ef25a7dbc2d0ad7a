//! ResponseSet - the in-memory response mapping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, ResponseValue};

/// The recorded answers, keyed by question id.
///
/// Absence of a key means "unanswered". Entries are only ever written by
/// `record` and only ever removed all at once by `clear`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSet {
    answers: HashMap<QuestionId, ResponseValue>,
}

impl ResponseSet {
    /// Creates an empty response set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, overwriting any prior value.
    ///
    /// Returns true if the set changed (new answer, or a different value
    /// than previously recorded). Recording the same value twice is a
    /// no-op and returns false.
    pub fn record(&mut self, id: QuestionId, value: ResponseValue) -> bool {
        self.answers.insert(id, value) != Some(value)
    }

    /// Returns the recorded answer for a question, if any.
    pub fn get(&self, id: &QuestionId) -> Option<ResponseValue> {
        self.answers.get(id).copied()
    }

    /// Returns true if the question has a recorded answer.
    pub fn is_answered(&self, id: &QuestionId) -> bool {
        self.answers.contains_key(id)
    }

    /// Returns the number of distinct answered questions.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Returns true if no answers have been recorded.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Removes every recorded answer.
    pub fn clear(&mut self) {
        self.answers.clear();
    }
}
