//! ViewRenderer port - the seam between the engine and any shell.

use thiserror::Error;

use crate::presentation::AssessmentView;

/// Errors a renderer can raise.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders a projected view.
///
/// Implementations hold no assessment state; they are handed a fresh
/// view after every operation and draw it in full. Synchronous by
/// design: nothing in this system suspends.
pub trait ViewRenderer {
    fn render(&mut self, view: &AssessmentView) -> Result<(), RenderError>;
}
