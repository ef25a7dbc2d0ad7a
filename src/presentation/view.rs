//! AssessmentView - pure projection of assessment state for rendering.
//!
//! The view is plain data derived from (catalog, responses, navigation)
//! and holds no state of its own; it is rebuilt in full after every
//! operation. Renderers consume it without touching the domain.

use serde::Serialize;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentMode, Percentage, QuestionId, ResponseValue};
use crate::domain::metrics::AssessmentReport;

/// Label of the forward control on the answering screen.
pub const NEXT_LABEL: &str = "Next";
/// Forward control label on the last section.
pub const VIEW_RESULTS_LABEL: &str = "View Results";
/// Label of the restart control on the results screen.
pub const START_OVER_LABEL: &str = "Start Over";

/// One question row on the answering screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRow {
    pub question_id: QuestionId,
    /// 1-based position within the section.
    pub number: usize,
    pub text: String,
    pub category: Option<String>,
    pub description: Option<String>,
    /// The currently selected answer, for choice highlighting.
    pub selected: Option<ResponseValue>,
}

/// The welcome screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeView {
    pub title: String,
    pub heading: String,
    pub body: String,
    pub begin_label: String,
    pub total_questions: usize,
}

/// The answering screen for the current section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub title: String,
    pub section_title: String,
    /// 1-based section position.
    pub section_number: usize,
    pub section_count: usize,
    pub progress: Percentage,
    pub questions: Vec<QuestionRow>,
    /// False at the first section: the previous control is disabled.
    pub previous_enabled: bool,
    /// True at the last section: the forward control reveals results.
    pub is_last_section: bool,
    /// "Next", or "View Results" on the last section.
    pub next_label: String,
}

/// The results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    pub title: String,
    pub report: AssessmentReport,
    pub start_over_label: String,
}

/// The full render tree: exactly one screen per mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AssessmentView {
    Welcome(WelcomeView),
    Answering(SectionView),
    Results(ResultsView),
}

impl AssessmentView {
    /// Projects the current assessment state into a view.
    pub fn project(assessment: &Assessment) -> Self {
        let catalog = assessment.catalog();
        match assessment.mode() {
            AssessmentMode::Welcome => {
                // An assessment only enters Welcome when copy exists.
                let welcome = catalog
                    .welcome()
                    .expect("welcome mode requires welcome copy");
                AssessmentView::Welcome(WelcomeView {
                    title: catalog.title().to_string(),
                    heading: welcome.heading.clone(),
                    body: welcome.body.clone(),
                    begin_label: welcome.begin_label.clone(),
                    total_questions: catalog.total_question_count(),
                })
            }
            AssessmentMode::Answering => {
                let section = assessment.current_section();
                let responses = assessment.responses();
                let is_last = assessment.at_last_section();
                AssessmentView::Answering(SectionView {
                    title: catalog.title().to_string(),
                    section_title: section.title.clone(),
                    section_number: assessment.current_section_index() + 1,
                    section_count: catalog.section_count(),
                    progress: crate::domain::metrics::overall_progress(catalog, responses),
                    questions: section
                        .questions
                        .iter()
                        .enumerate()
                        .map(|(i, q)| QuestionRow {
                            question_id: q.id.clone(),
                            number: i + 1,
                            text: q.text.clone(),
                            category: q.category.clone(),
                            description: q.description.clone(),
                            selected: responses.get(&q.id),
                        })
                        .collect(),
                    previous_enabled: !assessment.at_first_section(),
                    is_last_section: is_last,
                    next_label: if is_last { VIEW_RESULTS_LABEL } else { NEXT_LABEL }
                        .to_string(),
                })
            }
            AssessmentMode::Results => AssessmentView::Results(ResultsView {
                title: catalog.title().to_string(),
                report: AssessmentReport::generate(catalog, assessment.responses()),
                start_over_label: START_OVER_LABEL.to_string(),
            }),
        }
    }

    /// Returns the mode this view renders.
    pub fn mode(&self) -> AssessmentMode {
        match self {
            AssessmentView::Welcome(_) => AssessmentMode::Welcome,
            AssessmentView::Answering(_) => AssessmentMode::Answering,
            AssessmentView::Results(_) => AssessmentMode::Results,
        }
    }
}
