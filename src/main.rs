//! Riskeval binary - runs the interactive assessment in the terminal.

use tracing::info;
use tracing_subscriber::EnvFilter;

use riskeval::adapters::terminal::{TerminalRenderer, TerminalShell};
use riskeval::application::AssessmentService;
use riskeval::config::AppConfig;
use riskeval::domain::catalog::risk_assessment;

fn main() {
    if let Err(err) = run() {
        eprintln!("riskeval: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);
    colored::control::set_override(config.ui.color);

    let catalog = risk_assessment();
    info!(
        catalog = catalog.title(),
        sections = catalog.section_count(),
        questions = catalog.total_question_count(),
        "starting assessment"
    );

    let service = AssessmentService::new(catalog, config.ui.show_welcome);
    let mut shell = TerminalShell::new(service, TerminalRenderer::stdout());
    shell.run()?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.logging.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
