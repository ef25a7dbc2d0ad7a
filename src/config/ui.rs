//! Terminal UI configuration

use serde::Deserialize;

/// Terminal UI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Use colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Show the welcome screen before the first section
    #[serde(default = "default_true")]
    pub show_welcome: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_welcome: true,
        }
    }
}

fn default_true() -> bool {
    true
}
