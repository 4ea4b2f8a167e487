#![forbid(unsafe_code)]
//! maillist_lib — hygiene for plain-text email lists.
//!
//! Three independent pipelines back the command-line tools:
//! [`clean`] (dedupe + sort), [`names`] (CSV import with name heuristics) and
//! [`verify`] (syntax + DNS deliverability on a worker pool).

pub mod clean;
pub mod error;
pub mod files;
pub mod logging;
pub mod mx;
pub mod names;
pub mod pool;
pub mod validator;
pub mod verify;

pub use clean::{CleanReport, clean_file, dedupe_lines};
pub use error::ListError;
pub use mx::{DomainLookup, DomainStatus, MxError, MxRecord, build_resolver, check_deliverability};
pub use names::{ImportReport, NameParts, clean_name, generate_file, parse_email_to_name};
pub use validator::{SyntaxReport, ValidationMode, validate_syntax};
pub use verify::{
    Partition, VerificationResult, VerifyOptions, VerifyReport, load_addresses, partition,
    save_results, verify_all, verify_email,
};
