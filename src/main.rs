// Command-line entry point for fnchart.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fnchart::application::AnalyzeUsecase;
use fnchart::infrastructure::{LexicalCallResolver, ProjectLoader, RegexDefinitionExtractor};
use fnchart::ports::flowchart_exporter::MermaidExporter;
use tracing_subscriber::EnvFilter;

/// Print a Mermaid flowchart of free functions and approximate call edges.
///
/// The root path is the whole interface; any other argument is a usage error.
#[derive(Parser, Debug)]
#[command(about, long_about = None, disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Project root to scan for .rs files
    root: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the diagram.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let sources = ProjectLoader::load(&cli.root)
        .with_context(|| format!("Cannot scan {}", cli.root.display()))?;

    let usecase = AnalyzeUsecase {
        extractor: &RegexDefinitionExtractor,
        resolver: &LexicalCallResolver,
        exporter: &MermaidExporter,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    usecase.run(&sources, &mut out)?;

    Ok(())
}
