use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use maillist_lib::generate_file;
use maillist_lib::logging::LogArgs;
use tracing::error;

/// Convert email list to MailPoet-ready CSV.
#[derive(Parser)]
#[command(name = "maillist-generate", version)]
struct Cli {
    /// fichier texte d'entrée (une adresse par ligne)
    file: PathBuf,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.log.init();

    println!("Converting {} to CSV...", cli.file.display());
    let report = match generate_file(&cli.file) {
        Ok(report) => report,
        Err(err) if err.is_not_found() => {
            println!("Error: File '{}' not found.", cli.file.display());
            process::exit(1);
        }
        Err(err) => {
            error!(%err, "conversion failed");
            return Err(err).context("Error during conversion");
        }
    };

    println!("✔ Success! Converted {} contacts.", report.contacts);
    println!("✔ Ready for MailPoet: {}", report.output.display());
    Ok(())
}
