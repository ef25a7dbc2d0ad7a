//! Overall progress - answered questions over catalog total.

use crate::domain::assessment::ResponseSet;
use crate::domain::catalog::Catalog;
use crate::domain::foundation::Percentage;

/// Returns the share of catalog questions with any recorded answer.
///
/// Every recorded value counts, including `unsure`; progress measures
/// coverage, not compliance.
pub fn overall_progress(catalog: &Catalog, responses: &ResponseSet) -> Percentage {
    Percentage::from_ratio(responses.answered_count(), catalog.total_question_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Question, Section};
    use crate::domain::foundation::{QuestionId, ResponseValue};

    fn question(id: &str) -> Question {
        Question {
            id: QuestionId::new(id).unwrap(),
            text: format!("Question {}?", id),
            category: None,
            description: None,
            importance: None,
            resource: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            "Test",
            None,
            vec![
                Section {
                    title: "A".to_string(),
                    questions: vec![question("a1"), question("a2")],
                },
                Section {
                    title: "B".to_string(),
                    questions: vec![question("b1"), question("b2")],
                },
            ],
        )
        .unwrap()
    }

    fn qid(s: &str) -> QuestionId {
        QuestionId::new(s).unwrap()
    }

    #[test]
    fn progress_is_zero_before_any_answer() {
        let catalog = catalog();
        let responses = ResponseSet::new();
        assert_eq!(overall_progress(&catalog, &responses), Percentage::ZERO);
    }

    #[test]
    fn progress_counts_every_recorded_value() {
        let catalog = catalog();
        let mut responses = ResponseSet::new();
        responses.record(qid("a1"), ResponseValue::No);
        responses.record(qid("a2"), ResponseValue::Unsure);
        assert_eq!(overall_progress(&catalog, &responses).value(), 50);
    }

    #[test]
    fn progress_is_hundred_when_fully_answered() {
        let catalog = catalog();
        let mut responses = ResponseSet::new();
        for id in ["a1", "a2", "b1", "b2"] {
            responses.record(qid(id), ResponseValue::Yes);
        }
        assert_eq!(overall_progress(&catalog, &responses), Percentage::HUNDRED);
    }

    #[test]
    fn re_recording_a_question_does_not_inflate_progress() {
        let catalog = catalog();
        let mut responses = ResponseSet::new();
        responses.record(qid("a1"), ResponseValue::Yes);
        responses.record(qid("a1"), ResponseValue::No);
        assert_eq!(overall_progress(&catalog, &responses).value(), 25);
    }
}
