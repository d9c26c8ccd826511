use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "relay-workflow-gen")]
#[command(about = "Generate a Relay workflow that collects GitHub metrics for each supported module")]
pub struct Cli {
    /// Generator config (YAML or JSON). Built-in defaults are used when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// YAML or JSON list of modules to schedule. Overrides modules listed in the config.
    #[arg(long)]
    pub modules: Option<PathBuf>,
    /// Write the workflow to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Override the workflow summary.
    #[arg(long)]
    pub summary: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
