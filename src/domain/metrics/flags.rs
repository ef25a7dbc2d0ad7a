//! Flagged questions - answers that need attention.

use serde::Serialize;

use crate::domain::assessment::ResponseSet;
use crate::domain::catalog::{Catalog, ResourceLink};
use crate::domain::foundation::{QuestionId, ResponseValue};

/// A question answered `no` or `unsure`, surfaced for remediation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedQuestion {
    /// The flagged question's id.
    pub question_id: QuestionId,
    /// The prompt text.
    pub text: String,
    /// The recorded answer (`no` or `unsure`).
    pub response: ResponseValue,
    /// Title of the section the question belongs to.
    pub section_title: String,
    /// Rationale copy explaining why the item matters.
    pub guidance: Option<String>,
    /// External reading for remediation.
    pub resource: Option<ResourceLink>,
}

/// Returns all flagged questions in catalog order.
///
/// Exactly the questions whose recorded response is `no` or `unsure`;
/// unanswered and `yes`-answered questions are excluded. Order is the
/// catalog's declaration order, not response recency.
pub fn flagged_questions(catalog: &Catalog, responses: &ResponseSet) -> Vec<FlaggedQuestion> {
    let mut flagged = Vec::new();
    for section in catalog.sections() {
        for question in &section.questions {
            let Some(response) = responses.get(&question.id) else {
                continue;
            };
            if !response.needs_attention() {
                continue;
            }
            flagged.push(FlaggedQuestion {
                question_id: question.id.clone(),
                text: question.text.clone(),
                response,
                section_title: section.title.clone(),
                guidance: question.guidance().map(str::to_string),
                resource: question.resource.clone(),
            });
        }
    }
    flagged
}
