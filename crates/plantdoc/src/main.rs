//! plantdoc CLI - pandoc filter for PlantUML code blocks.
//!
//! Reads a pandoc JSON document on stdin, replaces `plantuml` code blocks
//! with rendered images, and writes the transformed document to stdout:
//!
//! ```text
//! pandoc --filter plantdoc input.md -o output.html
//! ```
//!
//! Pandoc passes the output format name as the first argument; diagnostics
//! go to stderr since stdout carries the document.

mod error;
mod output;

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use plantdoc_diagrams::{Materializer, MaterializerConfig};
use plantdoc_pandoc::filter_document;
use tracing_subscriber::EnvFilter;

use error::CliError;
use output::Output;

/// plantdoc - render PlantUML code blocks in pandoc documents.
#[derive(Parser)]
#[command(name = "plantdoc", version, about)]
struct Cli {
    /// Output format passed by pandoc (e.g. html, docx, latex).
    format: Option<String>,

    /// PlantUML renderer command; may hold multiple tokens.
    #[arg(long, env = "PLANTUML_BIN", default_value = "plantuml")]
    plantuml_bin: String,

    /// Cache directory for rendered diagrams (default: <temp>/pandoc_plantuml).
    #[arg(long, env = "PLANTDOC_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// Enable info-level logging on stderr.
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let mut doc: serde_json::Value = serde_json::from_str(&input)?;

    let mut config = MaterializerConfig {
        renderer_command: cli.plantuml_bin,
        ..MaterializerConfig::default()
    };
    if let Some(cache_dir) = cli.cache_dir {
        config.cache_dir = cache_dir;
    }

    let materializer = Materializer::new(config);
    filter_document(&mut doc, &materializer, cli.format.as_deref())?;

    serde_json::to_writer(std::io::stdout().lock(), &doc)?;
    Ok(())
}
