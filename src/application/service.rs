//! AssessmentService - the command surface over the aggregate.
//!
//! Every user action arrives as an `AssessmentCommand`; the service
//! applies it to the aggregate, drains the recorded domain events into
//! structured log lines, and returns the freshly projected view.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::assessment::{Assessment, AssessmentEvent};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{DomainError, QuestionId, ResponseValue};
use crate::domain::metrics::AssessmentReport;
use crate::presentation::AssessmentView;

/// A user action against the running assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentCommand {
    /// Dismiss the welcome screen.
    Begin,
    /// Record an answer for a question.
    RecordAnswer {
        question_id: QuestionId,
        value: ResponseValue,
    },
    /// Move to the next section (no-op at the last).
    AdvanceSection,
    /// Move to the previous section (no-op at the first).
    RetreatSection,
    /// Reveal the results screen (last section only).
    ViewResults,
    /// Clear all responses and return to the first section.
    StartOver,
}

/// Owns the assessment and exposes the operations the shell drives.
pub struct AssessmentService {
    assessment: Assessment,
}

impl AssessmentService {
    /// Creates a service over a fresh assessment.
    ///
    /// `show_welcome` gates the intro screen; it only takes effect when
    /// the catalog actually carries welcome copy.
    pub fn new(catalog: Arc<Catalog>, show_welcome: bool) -> Self {
        let assessment = if show_welcome {
            Assessment::new(catalog)
        } else {
            Assessment::without_welcome(catalog)
        };
        let mut service = Self { assessment };
        service.drain_events();
        service
    }

    /// Projects the current state into a view.
    pub fn view(&self) -> AssessmentView {
        AssessmentView::project(&self.assessment)
    }

    /// Derives the current results report.
    pub fn report(&self) -> AssessmentReport {
        AssessmentReport::generate(self.assessment.catalog(), self.assessment.responses())
    }

    /// Returns true once every question has a recorded answer.
    pub fn is_fully_answered(&self) -> bool {
        self.assessment.is_fully_answered()
    }

    /// Returns true if any answer has been recorded.
    pub fn has_answers(&self) -> bool {
        !self.assessment.responses().is_empty()
    }

    /// Applies a command and returns the re-projected view.
    pub fn handle(&mut self, command: AssessmentCommand) -> Result<AssessmentView, DomainError> {
        debug!(?command, assessment_id = %self.assessment.id(), "handling command");

        let result = match command {
            AssessmentCommand::Begin => self.assessment.begin(),
            AssessmentCommand::RecordAnswer { question_id, value } => {
                self.assessment.record_answer(&question_id, value)
            }
            AssessmentCommand::AdvanceSection => {
                self.assessment.advance_section();
                Ok(())
            }
            AssessmentCommand::RetreatSection => {
                self.assessment.retreat_section();
                Ok(())
            }
            AssessmentCommand::ViewResults => self.assessment.enter_results(),
            AssessmentCommand::StartOver => {
                self.assessment.reset();
                Ok(())
            }
        };

        self.drain_events();
        result?;
        Ok(self.view())
    }

    fn drain_events(&mut self) {
        for event in self.assessment.take_events() {
            match &event {
                AssessmentEvent::AnswerRecorded {
                    assessment_id,
                    question_id,
                    value,
                } => {
                    info!(
                        event = event.name(),
                        %assessment_id,
                        %question_id,
                        value = %value,
                        "answer recorded"
                    );
                }
                AssessmentEvent::SectionAdvanced {
                    assessment_id,
                    section_index,
                }
                | AssessmentEvent::SectionRetreated {
                    assessment_id,
                    section_index,
                } => {
                    info!(
                        event = event.name(),
                        %assessment_id,
                        section_index,
                        "section changed"
                    );
                }
                AssessmentEvent::ResultsEntered { assessment_id } => {
                    info!(event = event.name(), %assessment_id, "results entered");
                    if let Ok(json) = self.report().to_json() {
                        debug!(report = %json, "results report");
                    }
                }
                _ => {
                    info!(event = event.name(), "assessment lifecycle");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Question, Section, WelcomeCopy};
    use crate::domain::foundation::{AssessmentMode, ErrorCode};

    // ─────────────────────────────────────────────────────────────────────
    // Test helpers
    // ─────────────────────────────────────────────────────────────────────

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

    fn catalog(welcome: bool) -> Arc<Catalog> {
        Arc::new(
            Catalog::new(
                "Test Evaluation",
                welcome.then(|| WelcomeCopy {
                    heading: "Welcome".to_string(),
                    body: "Intro".to_string(),
                    begin_label: "Begin".to_string(),
                }),
                vec![
                    Section {
                        title: "First".to_string(),
                        questions: vec![question("a1"), question("a2")],
                    },
                    Section {
                        title: "Second".to_string(),
                        questions: vec![question("b1"), question("b2")],
                    },
                ],
            )
            .unwrap(),
        )
    }

    fn qid(s: &str) -> QuestionId {
        QuestionId::new(s).unwrap()
    }

    fn answer(service: &mut AssessmentService, id: &str, value: ResponseValue) {
        service
            .handle(AssessmentCommand::RecordAnswer {
                question_id: qid(id),
                value,
            })
            .unwrap();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn new_service_with_welcome_opens_on_welcome_screen() {
        let service = AssessmentService::new(catalog(true), true);
        assert_eq!(service.view().mode(), AssessmentMode::Welcome);
    }

    #[test]
    fn show_welcome_false_skips_the_intro() {
        let service = AssessmentService::new(catalog(true), false);
        assert_eq!(service.view().mode(), AssessmentMode::Answering);
    }

    #[test]
    fn begin_dismisses_the_welcome_screen() {
        let mut service = AssessmentService::new(catalog(true), true);
        let view = service.handle(AssessmentCommand::Begin).unwrap();
        assert_eq!(view.mode(), AssessmentMode::Answering);
    }

    #[test]
    fn record_answer_shows_up_in_the_view() {
        let mut service = AssessmentService::new(catalog(false), true);
        let view = service
            .handle(AssessmentCommand::RecordAnswer {
                question_id: qid("a1"),
                value: ResponseValue::Yes,
            })
            .unwrap();

        match view {
            AssessmentView::Answering(section) => {
                assert_eq!(section.questions[0].selected, Some(ResponseValue::Yes));
                assert_eq!(section.progress.value(), 25);
            }
            other => panic!("Expected answering view, got {:?}", other.mode()),
        }
    }

    #[test]
    fn record_answer_for_unknown_question_fails() {
        let mut service = AssessmentService::new(catalog(false), true);
        let err = service
            .handle(AssessmentCommand::RecordAnswer {
                question_id: qid("zz"),
                value: ResponseValue::Yes,
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownQuestionId);
    }

    #[test]
    fn navigation_commands_move_between_sections() {
        let mut service = AssessmentService::new(catalog(false), true);

        let view = service.handle(AssessmentCommand::AdvanceSection).unwrap();
        match view {
            AssessmentView::Answering(section) => assert_eq!(section.section_number, 2),
            other => panic!("Expected answering view, got {:?}", other.mode()),
        }

        let view = service.handle(AssessmentCommand::RetreatSection).unwrap();
        match view {
            AssessmentView::Answering(section) => assert_eq!(section.section_number, 1),
            other => panic!("Expected answering view, got {:?}", other.mode()),
        }
    }

    #[test]
    fn out_of_bounds_navigation_is_not_an_error() {
        let mut service = AssessmentService::new(catalog(false), true);
        // Already at the first section.
        let view = service.handle(AssessmentCommand::RetreatSection).unwrap();
        match view {
            AssessmentView::Answering(section) => assert_eq!(section.section_number, 1),
            other => panic!("Expected answering view, got {:?}", other.mode()),
        }
    }

    #[test]
    fn view_results_requires_the_last_section() {
        let mut service = AssessmentService::new(catalog(false), true);
        let err = service.handle(AssessmentCommand::ViewResults).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResultsUnavailable);
    }

    #[test]
    fn view_results_from_last_section_shows_report() {
        let mut service = AssessmentService::new(catalog(false), true);
        answer(&mut service, "a1", ResponseValue::No);
        service.handle(AssessmentCommand::AdvanceSection).unwrap();

        let view = service.handle(AssessmentCommand::ViewResults).unwrap();
        match view {
            AssessmentView::Results(results) => {
                assert_eq!(results.report.flagged.len(), 1);
            }
            other => panic!("Expected results view, got {:?}", other.mode()),
        }
    }

    #[test]
    fn start_over_clears_everything() {
        let mut service = AssessmentService::new(catalog(false), true);
        answer(&mut service, "a1", ResponseValue::No);
        service.handle(AssessmentCommand::AdvanceSection).unwrap();
        service.handle(AssessmentCommand::ViewResults).unwrap();

        let view = service.handle(AssessmentCommand::StartOver).unwrap();
        match view {
            AssessmentView::Answering(section) => {
                assert_eq!(section.section_number, 1);
                assert_eq!(section.progress.value(), 0);
                assert!(section.questions.iter().all(|q| q.selected.is_none()));
            }
            other => panic!("Expected answering view, got {:?}", other.mode()),
        }
        assert!(!service.has_answers());
    }

    #[test]
    fn failed_command_leaves_state_unchanged() {
        let mut service = AssessmentService::new(catalog(false), true);
        answer(&mut service, "a1", ResponseValue::Yes);

        let _ = service.handle(AssessmentCommand::ViewResults);

        assert_eq!(service.view().mode(), AssessmentMode::Answering);
        assert!(service.has_answers());
    }

    #[test]
    fn is_fully_answered_reflects_coverage() {
        let mut service = AssessmentService::new(catalog(false), true);
        assert!(!service.is_fully_answered());
        for id in ["a1", "a2", "b1", "b2"] {
            answer(&mut service, id, ResponseValue::Unsure);
        }
        assert!(service.is_fully_answered());
    }
}
