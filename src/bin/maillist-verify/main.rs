mod args;
mod output;

use std::process;

use anyhow::{Context, Result};
use maillist_lib::verify::{load_addresses, partition, save_results, verify_all};
use maillist_lib::build_resolver;
use tracing::error;

use crate::args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.log.init();
    let options = cli.verify_options();

    println!("Loading emails from {}...", cli.file.display());
    let emails = match load_addresses(&cli.file) {
        Ok(emails) => emails,
        Err(err) if err.is_not_found() => {
            println!("Error: File '{}' not found.", cli.file.display());
            process::exit(1);
        }
        Err(err) => {
            error!(%err, "loading failed");
            return Err(err).context("An error occurred");
        }
    };

    println!(
        "Starting verification for {} emails using {} threads...",
        emails.len(),
        options.workers()
    );

    // fail before spawning workers when DNS is unusable
    let timeout = options.dns_timeout;
    if options.check_deliverability {
        build_resolver(timeout).context("DNS resolver unavailable")?;
    }

    let results = verify_all(&emails, &options, || build_resolver(timeout), |done, total| {
        if options.progress_due(done) {
            println!("Processed {done}/{total}...");
        }
    });

    let report = save_results(&partition(&results), &options)
        .inspect_err(|err| error!(%err, "saving results failed"))
        .context("An error occurred")?;

    if let Some(path) = &cli.report {
        output::write_ndjson_report(path, &results)?;
    }

    output::print_summary(&report);
    Ok(())
}
