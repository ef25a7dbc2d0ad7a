//! Application layer - command handling over the domain.

mod service;

pub use service::{AssessmentCommand, AssessmentService};
