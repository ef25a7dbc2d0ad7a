//! Assessment domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AssessmentId, QuestionId, ResponseValue, Timestamp};

/// Events recorded by the assessment aggregate.
///
/// Drained by the application layer via `Assessment::take_events` and
/// emitted as structured log lines; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentEvent {
    /// A new assessment run was created.
    Created {
        assessment_id: AssessmentId,
        created_at: Timestamp,
    },

    /// The intro screen was dismissed and answering began.
    Begun { assessment_id: AssessmentId },

    /// An answer was recorded (or changed) for a question.
    AnswerRecorded {
        assessment_id: AssessmentId,
        question_id: QuestionId,
        value: ResponseValue,
    },

    /// Navigation moved forward to a section.
    SectionAdvanced {
        assessment_id: AssessmentId,
        section_index: usize,
    },

    /// Navigation moved back to a section.
    SectionRetreated {
        assessment_id: AssessmentId,
        section_index: usize,
    },

    /// The results screen was revealed.
    ResultsEntered { assessment_id: AssessmentId },

    /// The assessment was reset: responses cleared, navigation rewound.
    Reset { assessment_id: AssessmentId },
}

impl AssessmentEvent {
    /// Returns a short event name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            AssessmentEvent::Created { .. } => "assessment.created",
            AssessmentEvent::Begun { .. } => "assessment.begun",
            AssessmentEvent::AnswerRecorded { .. } => "assessment.answer_recorded",
            AssessmentEvent::SectionAdvanced { .. } => "assessment.section_advanced",
            AssessmentEvent::SectionRetreated { .. } => "assessment.section_retreated",
            AssessmentEvent::ResultsEntered { .. } => "assessment.results_entered",
            AssessmentEvent::Reset { .. } => "assessment.reset",
        }
    }
}
