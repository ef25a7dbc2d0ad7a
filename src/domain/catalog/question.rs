//! Question record and its resource link.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

/// An outbound reference offered as remediation guidance.
///
/// The link is opaque display data; reachability is never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    /// Human-readable link text.
    pub text: String,
    /// Target URL.
    pub link: String,
}

/// A single yes/no/unsure question.
///
/// Defined once in the catalog at load time and never mutated. The
/// optional fields carry per-question display copy: `category` groups
/// questions within a section, `description` is shown with the prompt,
/// and `importance` plus `resource` feed the flagged-items guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the catalog.
    pub id: QuestionId,
    /// The prompt text.
    pub text: String,
    /// Evaluative sub-category within the section.
    #[serde(default)]
    pub category: Option<String>,
    /// Supporting copy shown alongside the prompt.
    #[serde(default)]
    pub description: Option<String>,
    /// Why the question matters; surfaced when the question is flagged.
    #[serde(default)]
    pub importance: Option<String>,
    /// External reading for remediation.
    #[serde(default)]
    pub resource: Option<ResourceLink>,
}

impl Question {
    /// Returns the guidance copy for a flagged question, preferring the
    /// importance rationale over the general description.
    pub fn guidance(&self) -> Option<&str> {
        self.importance
            .as_deref()
            .or(self.description.as_deref())
    }
}
