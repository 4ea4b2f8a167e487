use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use maillist_lib::clean_file;
use maillist_lib::logging::LogArgs;
use tracing::error;

/// Clean and remove duplicate emails from a text file.
#[derive(Parser)]
#[command(name = "maillist-clean", version)]
struct Cli {
    /// fichier texte d'entrée (une adresse par ligne)
    file: PathBuf,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.log.init();

    println!("Reading {}...", cli.file.display());
    let report = match clean_file(&cli.file) {
        Ok(report) => report,
        Err(err) if err.is_not_found() => {
            println!("Error: File '{}' not found.", cli.file.display());
            process::exit(1);
        }
        Err(err) => {
            error!(%err, "cleaning failed");
            return Err(err).context("An error occurred");
        }
    };

    println!("✔ Success! Removed {} duplicates.", report.removed());
    println!("✔ Clean list saved to: {}", report.output.display());
    Ok(())
}
