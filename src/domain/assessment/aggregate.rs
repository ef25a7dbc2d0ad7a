//! Assessment aggregate - one in-memory run of the questionnaire.
//!
//! The aggregate owns the response mapping and the navigation state and
//! is the only place either is mutated. Every operation is synchronous
//! and total except where fail-fast validation applies (unknown question
//! ids, invalid mode transitions).

use std::sync::Arc;

use crate::domain::catalog::{Catalog, Section};
use crate::domain::foundation::{
    AssessmentId, AssessmentMode, DomainError, ErrorCode, QuestionId, ResponseValue, Timestamp,
};

use super::{AssessmentEvent, ResponseSet, SectionCursor};

/// The assessment aggregate root.
#[derive(Debug, Clone)]
pub struct Assessment {
    id: AssessmentId,
    catalog: Arc<Catalog>,
    responses: ResponseSet,
    cursor: SectionCursor,
    mode: AssessmentMode,
    created_at: Timestamp,
    updated_at: Timestamp,
    domain_events: Vec<AssessmentEvent>,
}

impl Assessment {
    /// Creates a new assessment over a catalog.
    ///
    /// Opens on the welcome screen when the catalog carries welcome copy,
    /// otherwise directly in answering mode.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let mode = if catalog.welcome().is_some() {
            AssessmentMode::Welcome
        } else {
            AssessmentMode::Answering
        };
        Self::with_mode(catalog, mode)
    }

    /// Creates a new assessment that skips the welcome screen even when
    /// the catalog carries welcome copy.
    pub fn without_welcome(catalog: Arc<Catalog>) -> Self {
        Self::with_mode(catalog, AssessmentMode::Answering)
    }

    fn with_mode(catalog: Arc<Catalog>, mode: AssessmentMode) -> Self {
        let id = AssessmentId::new();
        let now = Timestamp::now();
        let cursor = SectionCursor::new(catalog.section_count());

        let mut assessment = Self {
            id,
            catalog,
            responses: ResponseSet::new(),
            cursor,
            mode,
            created_at: now,
            updated_at: now,
            domain_events: Vec::new(),
        };

        assessment.record_event(AssessmentEvent::Created {
            assessment_id: id,
            created_at: now,
        });

        assessment
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the assessment id.
    pub fn id(&self) -> AssessmentId {
        self.id
    }

    /// Returns the catalog this assessment runs over.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Returns the current display mode.
    pub fn mode(&self) -> AssessmentMode {
        self.mode
    }

    /// Returns the recorded responses.
    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// Returns the current section index.
    pub fn current_section_index(&self) -> usize {
        self.cursor.index()
    }

    /// Returns the current section.
    pub fn current_section(&self) -> &Section {
        self.catalog
            .section(self.cursor.index())
            .expect("cursor index must stay within the catalog's sections")
    }

    /// Returns true at the first section.
    pub fn at_first_section(&self) -> bool {
        self.cursor.is_first()
    }

    /// Returns true at the last section.
    pub fn at_last_section(&self) -> bool {
        self.cursor.is_last()
    }

    /// Returns true once every question has a recorded answer.
    pub fn is_fully_answered(&self) -> bool {
        self.responses.answered_count() == self.catalog.total_question_count()
    }

    /// Returns when the assessment was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the assessment last changed.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ───────────────────────────────────────────────────────────────
    // Operations
    // ───────────────────────────────────────────────────────────────

    /// Dismisses the welcome screen and begins answering.
    pub fn begin(&mut self) -> Result<(), DomainError> {
        self.mode = self.mode.transition_to(AssessmentMode::Answering)?;
        self.record_event(AssessmentEvent::Begun {
            assessment_id: self.id,
        });
        self.touch();
        Ok(())
    }

    /// Records an answer for a question.
    ///
    /// The id must exist in the catalog; the shipped UI only ever offers
    /// catalog questions, so a failure here is a programming error in the
    /// caller. Re-recording an identical value leaves the mapping (and
    /// the event stream) unchanged.
    pub fn record_answer(
        &mut self,
        id: &QuestionId,
        value: ResponseValue,
    ) -> Result<(), DomainError> {
        if !self.catalog.contains_question(id) {
            return Err(DomainError::unknown_question(id));
        }
        if self.responses.record(id.clone(), value) {
            self.record_event(AssessmentEvent::AnswerRecorded {
                assessment_id: self.id,
                question_id: id.clone(),
                value,
            });
            self.touch();
        }
        Ok(())
    }

    /// Moves to the next section. A no-op at the last section.
    pub fn advance_section(&mut self) {
        if self.cursor.advance() {
            self.record_event(AssessmentEvent::SectionAdvanced {
                assessment_id: self.id,
                section_index: self.cursor.index(),
            });
            self.touch();
        }
    }

    /// Moves to the previous section. A no-op at the first section.
    pub fn retreat_section(&mut self) {
        if self.cursor.retreat() {
            self.record_event(AssessmentEvent::SectionRetreated {
                assessment_id: self.id,
                section_index: self.cursor.index(),
            });
            self.touch();
        }
    }

    /// Reveals the results screen.
    ///
    /// Only reachable from the last section; anywhere else the request is
    /// rejected rather than silently repositioning the user.
    pub fn enter_results(&mut self) -> Result<(), DomainError> {
        if !self.cursor.is_last() {
            return Err(DomainError::new(
                ErrorCode::ResultsUnavailable,
                format!(
                    "Results are only available from the last section ({} of {})",
                    self.cursor.index() + 1,
                    self.cursor.count()
                ),
            ));
        }
        self.mode = self.mode.transition_to(AssessmentMode::Results)?;
        self.record_event(AssessmentEvent::ResultsEntered {
            assessment_id: self.id,
        });
        self.touch();
        Ok(())
    }

    /// Starts over: clears every response, rewinds to the first section,
    /// and returns to answering mode.
    pub fn reset(&mut self) {
        self.responses.clear();
        self.cursor.reset();
        self.mode = AssessmentMode::Answering;
        self.record_event(AssessmentEvent::Reset {
            assessment_id: self.id,
        });
        self.touch();
    }

    /// Drains and returns the recorded domain events.
    pub fn take_events(&mut self) -> Vec<AssessmentEvent> {
        std::mem::take(&mut self.domain_events)
    }

    fn record_event(&mut self, event: AssessmentEvent) {
        self.domain_events.push(event);
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
