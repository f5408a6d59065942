//! CLI tool for turning lesson challenges into a slide deck.

use anyhow::{Context, Result};
use challenges_core::{extract_file, input_path, output_file_name, write_slides, DEFAULT_INPUT};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Collect the "> ### Challenge" blocks of a lesson into a slidy presentation.
///
/// The lesson is read from the parent directory; the slides are written to
/// the current directory.
#[derive(Parser, Debug)]
#[command(name = "grab-challenges")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lesson file name, looked up in the parent directory
    #[arg(default_value = DEFAULT_INPUT)]
    input: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let output_path = process_file(Path::new("."), &args.input)?;
    log::info!("Written to: {}", output_path.display());

    Ok(())
}

/// Extract the challenges of one lesson and write its slide deck.
///
/// `base` stands in for the working directory: the lesson is read from its
/// parent and the deck is written into it.
fn process_file(base: &Path, input: &str) -> Result<PathBuf> {
    let source = base.join(input_path(input));
    log::debug!("Processing: {}", source.display());

    let challenges = extract_file(&source)
        .with_context(|| format!("Failed to extract challenges from {}", input))?;
    log::debug!("Found {} challenges", challenges.len());

    let output_path = base.join(output_file_name(input));
    write_slides(&output_path, &challenges)
        .with_context(|| format!("Failed to write slides for {}", input))?;

    Ok(output_path)
}
