//! AssessmentMode enum for the display-mode state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DomainError, ErrorCode};

/// The screen mode an assessment is currently in.
///
/// Transitions are one-directional except for the restart loop:
/// `Welcome -> Answering -> Results -> Answering`. `Results -> Welcome`
/// is deliberately not provided by the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentMode {
    Welcome,
    #[default]
    Answering,
    Results,
}

impl AssessmentMode {
    /// Returns true if transition from self to target is valid.
    pub fn can_transition_to(&self, target: &AssessmentMode) -> bool {
        use AssessmentMode::*;
        matches!(
            (self, target),
            // Begin the assessment from the intro screen
            (Welcome, Answering) |
            // Reveal results from the answering flow
            (Answering, Results) |
            // Start over clears responses and returns to answering
            (Results, Answering)
        )
    }

    /// Returns all valid target modes from the current mode.
    pub fn valid_transitions(&self) -> Vec<AssessmentMode> {
        use AssessmentMode::*;
        match self {
            Welcome => vec![Answering],
            Answering => vec![Results],
            Results => vec![Answering],
        }
    }

    /// Performs the transition with validation.
    pub fn transition_to(&self, target: AssessmentMode) -> Result<AssessmentMode, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition from {} to {}", self, target),
            ))
        }
    }

    /// Returns true while questions are being answered.
    pub fn is_answering(&self) -> bool {
        matches!(self, AssessmentMode::Answering)
    }
}

impl fmt::Display for AssessmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssessmentMode::Welcome => "Welcome",
            AssessmentMode::Answering => "Answering",
            AssessmentMode::Results => "Results",
        };
        write!(f, "{}", s)
    }
}
