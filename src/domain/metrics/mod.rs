//! Metrics engine - derived values over catalog + responses.
//!
//! Everything here is stateless: each function recomputes from the
//! immutable catalog and the current response mapping on every call.

pub mod compliance;
pub mod flags;
pub mod progress;
mod report;

pub use compliance::section_compliance;
pub use flags::{flagged_questions, FlaggedQuestion};
pub use progress::overall_progress;
pub use report::{AssessmentReport, SectionScore};
