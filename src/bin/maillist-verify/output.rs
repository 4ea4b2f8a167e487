use std::path::Path;

#[cfg(not(feature = "with-serde"))]
use anyhow::bail;
use anyhow::Result;
use maillist_lib::{VerificationResult, VerifyReport};

pub fn print_summary(report: &VerifyReport) {
    println!("\n--- Verification Complete ---");
    println!(
        "✔ Valid: {} (Saved to {})",
        report.valid,
        report.valid_path.display()
    );
    println!(
        "✖ Invalid: {} (Saved to {})",
        report.invalid,
        report.invalid_path.display()
    );
}

#[cfg(feature = "with-serde")]
pub fn write_ndjson_report(path: &Path, results: &[VerificationResult]) -> Result<()> {
    use anyhow::Context;

    let mut buf = Vec::new();
    for result in results {
        let line = serde_json::to_string(result)?;
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');
    }
    maillist_lib::files::write_all_atomically(path, &buf)
        .with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
pub fn write_ndjson_report(_: &Path, _: &[VerificationResult]) -> Result<()> {
    bail!("--report nécessite la feature 'with-serde'")
}
