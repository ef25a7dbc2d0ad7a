//! Question catalog - the immutable questionnaire data.
//!
//! A catalog is pure data: ordered sections of questions plus optional
//! welcome copy, validated at construction and never mutated. The
//! shipped questionnaire is embedded in the binary (see [`builtin`]).

mod builtin;
#[allow(clippy::module_inception)]
mod catalog;
mod question;
mod section;

pub use builtin::{risk_assessment, CatalogLoadError};
pub use catalog::{Catalog, WelcomeCopy};
pub use question::{Question, ResourceLink};
pub use section::Section;
