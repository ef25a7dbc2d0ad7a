//! Ports - the interfaces adapters implement.

mod renderer;

pub use renderer::{RenderError, ViewRenderer};
