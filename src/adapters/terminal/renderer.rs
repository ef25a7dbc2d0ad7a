//! Terminal renderer - draws the view model as styled text.

use std::io::Write;

use colored::Colorize;

use crate::domain::foundation::{Percentage, ResponseValue};
use crate::ports::{RenderError, ViewRenderer};
use crate::presentation::{AssessmentView, ResultsView, SectionView, WelcomeView};

/// Width of the textual progress bars.
const BAR_WIDTH: usize = 24;

/// Renders views to any `Write` target with colored output.
///
/// Color codes are controlled globally via `colored::control`; the
/// renderer itself always emits the same structure.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<std::io::Stdout> {
    /// Creates a renderer writing to stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Creates a renderer writing to the given target.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer, returning the write target.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_welcome(&mut self, view: &WelcomeView) -> Result<(), RenderError> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", view.heading.bold())?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", view.body)?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            format!("{} questions", view.total_questions).dimmed()
        )?;
        Ok(())
    }

    fn render_answering(&mut self, view: &SectionView) -> Result<(), RenderError> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", view.title.bold())?;
        writeln!(
            self.out,
            "Section {} of {}: {}",
            view.section_number,
            view.section_count,
            view.section_title.bold()
        )?;
        writeln!(
            self.out,
            "Progress {} {}",
            progress_bar(view.progress, BAR_WIDTH),
            view.progress
        )?;
        writeln!(self.out)?;

        for question in &view.questions {
            let marker = answer_marker(question.selected);
            writeln!(self.out, "{} {}. {}", marker, question.number, question.text)?;
            if let Some(category) = &question.category {
                writeln!(self.out, "     {}", format!("[{}]", category).dimmed())?;
            }
            if let Some(description) = &question.description {
                writeln!(self.out, "     {}", description.dimmed())?;
            }
        }

        writeln!(self.out)?;
        let previous = if view.previous_enabled {
            "Previous".to_string()
        } else {
            format!("{}", "Previous (disabled)".dimmed())
        };
        writeln!(self.out, "{}  |  {}", previous, view.next_label)?;
        Ok(())
    }

    fn render_results(&mut self, view: &ResultsView) -> Result<(), RenderError> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "Evaluation Results".bold())?;
        writeln!(self.out)?;

        for section in &view.report.sections {
            writeln!(
                self.out,
                "{:<32} {} {} Compliance",
                section.title,
                progress_bar(section.compliance, BAR_WIDTH),
                section.compliance
            )?;
        }

        writeln!(self.out)?;
        if view.report.flagged.is_empty() {
            writeln!(self.out, "{}", "✓ No items need attention".green())?;
        } else {
            writeln!(
                self.out,
                "{}",
                format!("{} items need attention", view.report.flagged.len())
                    .yellow()
                    .bold()
            )?;
            for flag in &view.report.flagged {
                writeln!(self.out)?;
                let marker = match flag.response {
                    ResponseValue::No => "✗".red(),
                    _ => "?".yellow(),
                };
                writeln!(
                    self.out,
                    "{} [{}] {}",
                    marker,
                    flag.section_title.dimmed(),
                    flag.text
                )?;
                if let Some(guidance) = &flag.guidance {
                    writeln!(self.out, "    {}", guidance)?;
                }
                if let Some(resource) = &flag.resource {
                    writeln!(
                        self.out,
                        "    {} {}",
                        resource.text.underline(),
                        resource.link.dimmed()
                    )?;
                }
            }
        }
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> ViewRenderer for TerminalRenderer<W> {
    fn render(&mut self, view: &AssessmentView) -> Result<(), RenderError> {
        match view {
            AssessmentView::Welcome(welcome) => self.render_welcome(welcome),
            AssessmentView::Answering(section) => self.render_answering(section),
            AssessmentView::Results(results) => self.render_results(results),
        }
    }
}

/// Builds a textual progress bar like `[████░░░░]`.
pub fn progress_bar(value: Percentage, width: usize) -> String {
    let filled = (value.value() as usize * width) / 100;
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar.push(']');
    bar
}

fn answer_marker(selected: Option<ResponseValue>) -> String {
    match selected {
        Some(ResponseValue::Yes) => format!("{}", "✓".green()),
        Some(ResponseValue::No) => format!("{}", "✗".red()),
        Some(ResponseValue::Unsure) => format!("{}", "?".yellow()),
        None => format!("{}", "·".dimmed()),
    }
}
