//! Presentation layer - pure view projection.

mod view;

pub use view::{
    AssessmentView, QuestionRow, ResultsView, SectionView, WelcomeView, NEXT_LABEL,
    START_OVER_LABEL, VIEW_RESULTS_LABEL,
};
