//! `navigator-render` — Renders the city information table from N-Triples.
//!
//! **Usage:**
//! ```text
//! navigator-render --input <file.nt> [--subject <iri>] [--config <file.toml>]
//!                  [--out <path>] [--page] [-v]...
//! ```
//!
//! Without `--out` the HTML goes to stdout. Logs go to stderr; `RUST_LOG`
//! overrides `-v`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use navigator_templates::writer::{self, Layout};
use navigator_templates::{load_ntriples, CityTemplate, TemplateConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Render the DBpedia navigator city table.
#[derive(Parser)]
#[command(
    name = "navigator-render",
    about = "Render the DBpedia navigator city table from N-Triples"
)]
struct Args {
    /// N-Triples file describing the city.
    #[arg(long)]
    input: PathBuf,

    /// Subject IRI of the city (with or without `<...>`). Required when the
    /// input describes more than one subject.
    #[arg(long)]
    subject: Option<String>,

    /// TOML file with template options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the HTML here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Wrap the table in a standalone HTML page.
    #[arg(long)]
    page: bool,

    /// More log output (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => TemplateConfig::load(path)?,
        None => TemplateConfig::default(),
    };

    let all = load_ntriples(&args.input)?;
    let triples = all
        .entity(args.subject.as_deref())
        .with_context(|| format!("Cannot pick a city from {}", args.input.display()))?;
    tracing::info!(triples = triples.len(), "rendering city template");

    let fragment = CityTemplate::new().config(config).render(&triples);
    let layout = if args.page {
        Layout::page_for(&triples)
    } else {
        Layout::Fragment
    };
    writer::emit(&fragment, &layout, args.out.as_deref())?;
    if let Some(path) = &args.out {
        tracing::info!(path = %path.display(), "wrote city template");
    }

    Ok(())
}
