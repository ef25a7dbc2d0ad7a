//! AssessmentReport - the aggregated results projection.

use serde::Serialize;

use crate::domain::assessment::ResponseSet;
use crate::domain::catalog::Catalog;
use crate::domain::foundation::Percentage;

use super::{compliance, flags::FlaggedQuestion, progress};

/// Compliance summary for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScore {
    /// Section title.
    pub title: String,
    /// Share of the section's questions answered "yes".
    pub compliance: Percentage,
    /// Questions answered with any value.
    pub answered: usize,
    /// Questions in the section.
    pub total: usize,
}

/// The full results view: one serializable value an embedding shell can
/// consume as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    /// Catalog title.
    pub title: String,
    /// Share of all questions with a recorded answer.
    pub overall_progress: Percentage,
    /// Per-section compliance, in catalog order.
    pub sections: Vec<SectionScore>,
    /// Questions needing attention, in catalog order.
    pub flagged: Vec<FlaggedQuestion>,
}

impl AssessmentReport {
    /// Derives the report from the catalog and recorded responses.
    ///
    /// Stateless: recomputed in full on every call.
    pub fn generate(catalog: &Catalog, responses: &ResponseSet) -> Self {
        let sections = catalog
            .sections()
            .iter()
            .map(|section| SectionScore {
                title: section.title.clone(),
                compliance: compliance::section_compliance(section, responses),
                answered: section
                    .questions
                    .iter()
                    .filter(|q| responses.is_answered(&q.id))
                    .count(),
                total: section.question_count(),
            })
            .collect();

        Self {
            title: catalog.title().to_string(),
            overall_progress: progress::overall_progress(catalog, responses),
            sections,
            flagged: super::flags::flagged_questions(catalog, responses),
        }
    }

    /// Returns true when nothing needs attention.
    pub fn is_clean(&self) -> bool {
        self.flagged.is_empty()
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
