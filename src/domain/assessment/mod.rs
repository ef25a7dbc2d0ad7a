//! Assessment aggregate and its supporting state.
//!
//! One `Assessment` is one in-memory run of the questionnaire: the
//! response mapping, the section cursor, and the display mode, mutated
//! only through the aggregate's operations.

mod aggregate;
mod cursor;
mod events;
mod responses;

pub use aggregate::Assessment;
pub use cursor::SectionCursor;
pub use events::AssessmentEvent;
pub use responses::ResponseSet;
