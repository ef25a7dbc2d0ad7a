//! Terminal adapter - colored renderer plus interactive shell.

mod renderer;
mod shell;

pub use renderer::{progress_bar, TerminalRenderer};
pub use shell::{menu_for, MenuEntry, ShellAction, ShellError, TerminalShell};
