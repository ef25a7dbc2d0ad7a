//! Catalog - the validated, compiled-in questionnaire.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Question, Section};
use crate::domain::foundation::{QuestionId, ValidationError};

/// Intro-screen copy for catalogs that open with a welcome screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeCopy {
    /// Heading shown on the welcome screen.
    pub heading: String,
    /// Body copy explaining what the assessment covers.
    pub body: String,
    /// Label of the action that begins the assessment.
    pub begin_label: String,
}

/// The questionnaire: ordered sections of questions plus optional
/// welcome copy.
///
/// A catalog is constant for the process lifetime; no mutation API
/// exists. Construction validates the invariants every downstream
/// computation relies on: at least one section, no empty section, and
/// globally unique non-empty question ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    title: String,
    welcome: Option<WelcomeCopy>,
    sections: Vec<Section>,
}

impl Catalog {
    /// Creates a validated catalog.
    pub fn new(
        title: impl Into<String>,
        welcome: Option<WelcomeCopy>,
        sections: Vec<Section>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if sections.is_empty() {
            return Err(ValidationError::empty_field("sections"));
        }

        let mut seen = HashSet::new();
        for section in &sections {
            if section.title.is_empty() {
                return Err(ValidationError::empty_field("section.title"));
            }
            if section.questions.is_empty() {
                return Err(ValidationError::invalid_format(
                    "section.questions",
                    format!("section '{}' has no questions", section.title),
                ));
            }
            for question in &section.questions {
                if question.id.as_str().is_empty() {
                    return Err(ValidationError::empty_field("question.id"));
                }
                if question.text.is_empty() {
                    return Err(ValidationError::empty_field("question.text"));
                }
                if !seen.insert(question.id.clone()) {
                    return Err(ValidationError::duplicate(
                        "question.id",
                        question.id.as_str(),
                    ));
                }
            }
        }

        Ok(Self {
            title,
            welcome,
            sections,
        })
    }

    /// Returns the catalog title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the welcome copy, if this catalog opens with an intro screen.
    pub fn welcome(&self) -> Option<&WelcomeCopy> {
        self.welcome.as_ref()
    }

    /// Returns all sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Returns the section at the given index, if in bounds.
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Returns the index of the last section.
    pub fn last_section_index(&self) -> usize {
        self.sections.len() - 1
    }

    /// Returns the total number of questions across all sections.
    pub fn total_question_count(&self) -> usize {
        self.sections.iter().map(Section::question_count).sum()
    }

    /// Returns true if any section contains the given question id.
    pub fn contains_question(&self, id: &QuestionId) -> bool {
        self.question(id).is_some()
    }

    /// Looks up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions().find(|q| &q.id == id)
    }

    /// Iterates all questions in catalog order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|s| s.questions.iter())
    }
}
