//! Deduplicating normalizer: sorted set of non-empty trimmed lines.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ListError;
use crate::files::{derived_path, join_lines, read_lines_lossy, write_all_atomically};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Raw lines read, blank ones included.
    pub total_lines: usize,
    pub unique: usize,
}

impl CleanReport {
    /// Duplicates and blank lines dropped from the input.
    pub fn removed(&self) -> usize {
        self.total_lines.saturating_sub(self.unique)
    }
}

/// `<base>_clean.<ext>` next to the input.
pub fn clean_output_path(input: &Path) -> PathBuf {
    derived_path(input, "_clean", input.extension())
}

/// Trims every line, drops blanks and duplicates, sorts by code point.
pub fn dedupe_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn clean_file(input: &Path) -> Result<CleanReport, ListError> {
    let raw = read_lines_lossy(input)?;
    let unique = dedupe_lines(&raw);
    let output = clean_output_path(input);

    write_all_atomically(&output, join_lines(&unique).as_bytes())?;

    let report = CleanReport {
        input: input.to_path_buf(),
        output,
        total_lines: raw.len(),
        unique: unique.len(),
    };
    info!(
        input = %report.input.display(),
        total = report.total_lines,
        unique = report.unique,
        "list cleaned"
    );
    Ok(report)
}
