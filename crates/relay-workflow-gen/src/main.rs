use clap::Parser;
use relay_workflow_gen::{execute_generate, Cli};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "relay_workflow=info,relay_workflow_gen=info";

fn main() {
    // stdout carries the workflow document, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match execute_generate(&cli) {
        Ok(scheduled) => {
            tracing::info!(steps = scheduled.len(), "workflow generated");
        }
        Err(error) => {
            if !error.is_validation() {
                eprintln!("{error}");
            }
            std::process::exit(1);
        }
    }
}
