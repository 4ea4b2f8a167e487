use std::path::PathBuf;
use std::time::Duration;

use crate::validator::ValidationMode;

pub const DEFAULT_WORKERS: usize = 10;
pub const DEFAULT_PROGRESS_EVERY: usize = 50;
pub const VALID_FILE: &str = "verified_valid.txt";
pub const INVALID_FILE: &str = "verified_invalid.txt";

/// Knobs for a verification run.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub workers: usize,
    pub progress_every: usize,
    pub mode: ValidationMode,
    /// Resolve the domain after the syntax check passes.
    pub check_deliverability: bool,
    /// Per-query resolver timeout; `None` keeps the system default.
    pub dns_timeout: Option<Duration>,
    pub valid_path: PathBuf,
    pub invalid_path: PathBuf,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            progress_every: DEFAULT_PROGRESS_EVERY,
            mode: ValidationMode::Strict,
            check_deliverability: true,
            dns_timeout: Some(Duration::from_secs(5)),
            valid_path: PathBuf::from(VALID_FILE),
            invalid_path: PathBuf::from(INVALID_FILE),
        }
    }
}

impl VerifyOptions {
    pub fn workers(&self) -> usize {
        self.workers.max(1)
    }

    /// True when a progress line is due after `done` completions.
    pub fn progress_due(&self, done: usize) -> bool {
        self.progress_every != 0 && done % self.progress_every == 0
    }
}
