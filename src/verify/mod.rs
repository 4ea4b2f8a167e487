//! Bounded-concurrency verifier: syntax plus DNS deliverability, bucketed
//! into valid and invalid lists.

mod options;
mod types;


pub use options::{
    DEFAULT_PROGRESS_EVERY, DEFAULT_WORKERS, INVALID_FILE, VALID_FILE, VerifyOptions,
};
pub use types::{Partition, VALID_REASON, VerificationResult, VerifyReport};

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::ListError;
use crate::files::{join_lines, read_lines_lossy, write_all_atomically_many};
use crate::mx::{DomainLookup, MxError, check_deliverability};
use crate::pool;
use crate::validator::{ValidationMode, validate_with_domain};

/// Non-blank trimmed lines of `input`; invalid UTF-8 is dropped.
pub fn load_addresses(input: &Path) -> Result<Vec<String>, ListError> {
    Ok(read_lines_lossy(input)?
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

/// Classifies one address. Without a `lookup` only the syntax is checked.
pub fn verify_email<L>(email: &str, mode: ValidationMode, lookup: Option<&L>) -> VerificationResult
where
    L: DomainLookup + ?Sized,
{
    let (report, ascii_domain) = validate_with_domain(email, mode);
    if !report.ok {
        debug!(email, reasons = ?report.reasons, "syntax rejected");
        return VerificationResult::invalid(email, report.summary());
    }

    let (Some(lookup), Some(domain)) = (lookup, ascii_domain) else {
        return VerificationResult::valid(email);
    };

    match check_deliverability(lookup, &domain) {
        Ok(status) => match status.rejection(&domain) {
            None => VerificationResult::valid(email),
            Some(reason) => {
                debug!(email, ?status, "domain rejected");
                VerificationResult::invalid(email, reason)
            }
        },
        Err(err) => {
            warn!(email, %err, "deliverability check failed");
            VerificationResult::invalid(email, err.to_string())
        }
    }
}

/// Verifies every address on the worker pool; results keep input order.
///
/// `make_lookup` runs once per worker when deliverability checks are on.
pub fn verify_all<L, M, P>(
    emails: &[String],
    options: &VerifyOptions,
    make_lookup: M,
    on_progress: P,
) -> Vec<VerificationResult>
where
    L: DomainLookup,
    M: Fn() -> Result<L, MxError> + Sync,
    P: FnMut(usize, usize),
{
    let mode = options.mode;
    let check = options.check_deliverability;

    pool::map_ordered(
        emails,
        options.workers(),
        || check.then(&make_lookup),
        |lookup, email| match lookup {
            Some(Ok(lookup)) => verify_email(email, mode, Some(&*lookup)),
            Some(Err(err)) => VerificationResult::invalid(email.as_str(), err.to_string()),
            None => verify_email::<L>(email, mode, None),
        },
        on_progress,
    )
}

pub fn partition(results: &[VerificationResult]) -> Partition {
    let mut out = Partition::default();
    for result in results {
        if result.valid {
            out.valid.push(result.email.clone());
        } else {
            out.invalid.push(result.invalid_line());
        }
    }
    out
}

/// Writes both buckets, overwriting any previous run. Neither file is
/// replaced unless both could be written.
pub fn save_results(partition: &Partition, options: &VerifyOptions) -> Result<VerifyReport, ListError> {
    let valid = join_lines(&partition.valid);
    let invalid = join_lines(&partition.invalid);
    write_all_atomically_many(&[
        (options.valid_path.as_path(), valid.as_bytes()),
        (options.invalid_path.as_path(), invalid.as_bytes()),
    ])?;

    info!(
        valid = partition.valid.len(),
        invalid = partition.invalid.len(),
        "verification results saved"
    );
    Ok(VerifyReport {
        valid: partition.valid.len(),
        invalid: partition.invalid.len(),
        valid_path: options.valid_path.clone(),
        invalid_path: options.invalid_path.clone(),
    })
}
