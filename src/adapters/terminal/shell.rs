//! Interactive terminal shell.
//!
//! Renders the current view, offers a menu of the actions that view
//! supports, and maps selections onto application commands. The shell
//! holds no assessment state; everything it shows comes from the view
//! model it was just handed.

use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use thiserror::Error;

use crate::application::{AssessmentCommand, AssessmentService};
use crate::domain::foundation::{DomainError, QuestionId, ResponseValue};
use crate::ports::{RenderError, ViewRenderer};
use crate::presentation::AssessmentView;

/// Maximum question length shown inside a menu entry.
const MENU_TEXT_WIDTH: usize = 64;

/// Errors the shell can raise.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// An action offered by the current screen's menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Begin,
    Answer {
        question_id: QuestionId,
        current: Option<ResponseValue>,
    },
    Previous,
    Next,
    ViewResults,
    StartOver,
    Quit,
}

/// One selectable menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub action: ShellAction,
}

/// The interactive loop driving an assessment.
pub struct TerminalShell<R: ViewRenderer> {
    service: AssessmentService,
    renderer: R,
}

impl<R: ViewRenderer> TerminalShell<R> {
    /// Creates a shell over a service and renderer.
    pub fn new(service: AssessmentService, renderer: R) -> Self {
        Self { service, renderer }
    }

    /// Runs until the user quits.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let view = self.service.view();
            self.renderer.render(&view)?;

            let menu = menu_for(&view);
            let labels: Vec<&String> = menu.iter().map(|entry| &entry.label).collect();
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Choose an action")
                .items(&labels)
                .default(0)
                .interact()?;

            match menu[choice].action.clone() {
                ShellAction::Begin => {
                    self.service.handle(AssessmentCommand::Begin)?;
                }
                ShellAction::Answer {
                    question_id,
                    current,
                } => {
                    let value = self.prompt_answer(current)?;
                    self.service.handle(AssessmentCommand::RecordAnswer {
                        question_id,
                        value,
                    })?;
                }
                ShellAction::Previous => {
                    self.service.handle(AssessmentCommand::RetreatSection)?;
                }
                ShellAction::Next => {
                    self.service.handle(AssessmentCommand::AdvanceSection)?;
                }
                ShellAction::ViewResults => {
                    self.service.handle(AssessmentCommand::ViewResults)?;
                }
                ShellAction::StartOver => {
                    if self.confirm_start_over()? {
                        self.service.handle(AssessmentCommand::StartOver)?;
                    }
                }
                ShellAction::Quit => {
                    if self.confirm_quit()? {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn prompt_answer(&self, current: Option<ResponseValue>) -> Result<ResponseValue, ShellError> {
        let values = ResponseValue::all();
        let labels: Vec<&'static str> = values.iter().map(|v| v.label()).collect();
        let default = current
            .and_then(|c| values.iter().position(|v| *v == c))
            .unwrap_or(0);
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Your answer")
            .items(&labels)
            .default(default)
            .interact()?;
        Ok(values[choice])
    }

    fn confirm_start_over(&self) -> Result<bool, ShellError> {
        if !self.service.has_answers() {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Discard all recorded answers and start over?")
            .default(false)
            .interact()?)
    }

    fn confirm_quit(&self) -> Result<bool, ShellError> {
        if !self.service.has_answers() || self.service.is_fully_answered() {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Quit with unanswered questions? Responses are not saved.")
            .default(false)
            .interact()?)
    }
}

/// Builds the menu the current screen offers.
///
/// Pure so the control surface can be asserted without a terminal.
pub fn menu_for(view: &AssessmentView) -> Vec<MenuEntry> {
    match view {
        AssessmentView::Welcome(welcome) => vec![
            MenuEntry {
                label: welcome.begin_label.clone(),
                action: ShellAction::Begin,
            },
            MenuEntry {
                label: "Quit".to_string(),
                action: ShellAction::Quit,
            },
        ],
        AssessmentView::Answering(section) => {
            let mut menu: Vec<MenuEntry> = section
                .questions
                .iter()
                .map(|q| MenuEntry {
                    label: format!(
                        "Answer {}. {}",
                        q.number,
                        truncate(&q.text, MENU_TEXT_WIDTH)
                    ),
                    action: ShellAction::Answer {
                        question_id: q.question_id.clone(),
                        current: q.selected,
                    },
                })
                .collect();
            if section.previous_enabled {
                menu.push(MenuEntry {
                    label: "Previous".to_string(),
                    action: ShellAction::Previous,
                });
            }
            menu.push(MenuEntry {
                label: section.next_label.clone(),
                action: if section.is_last_section {
                    ShellAction::ViewResults
                } else {
                    ShellAction::Next
                },
            });
            menu.push(MenuEntry {
                label: "Quit".to_string(),
                action: ShellAction::Quit,
            });
            menu
        }
        AssessmentView::Results(results) => vec![
            MenuEntry {
                label: results.start_over_label.clone(),
                action: ShellAction::StartOver,
            },
            MenuEntry {
                label: "Quit".to_string(),
                action: ShellAction::Quit,
            },
        ],
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max).collect();
    truncated.push('…');
    truncated
}
