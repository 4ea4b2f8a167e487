//! Name heuristics for CSV imports (MailPoet layout: `Email,First Name,Last Name`).

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ListError;
use crate::files::{derived_path, read_lines_strict, write_all_atomically};

pub const CSV_HEADER: [&str; 3] = ["Email", "First Name", "Last Name"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameParts {
    pub first: String,
    pub last: String,
}

impl NameParts {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub contacts: usize,
}

/// `<base>_import.csv` next to the input.
pub fn import_output_path(input: &Path) -> PathBuf {
    derived_path(input, "_import", Some(OsStr::new("csv")))
}

/// Separators become spaces, digits go away, then title case.
pub fn clean_name(part: &str) -> String {
    let spaced: String = part
        .chars()
        .map(|c| if matches!(c, '.' | '_' | '-') { ' ' } else { c })
        .filter(|c| !is_digit(*c))
        .collect();
    title_case(&spaced).trim().to_string()
}

// Digits in the Unicode sense of "Numeric_Type=Decimal or Digit": `0-9`, the
// other scripts' decimal blocks, superscripts and subscripts. Fractions and
// roman numerals are letters of a name as far as this is concerned.
fn is_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    let cp = u32::from(c);
    matches!(cp, 0x00B2 | 0x00B3 | 0x00B9 | 0x2070 | 0x2074..=0x2079 | 0x2080..=0x2089)
        || DECIMAL_ZEROS.iter().any(|zero| (*zero..*zero + 10).contains(&cp))
}

// First code point of each contiguous block of ten decimal digits (BMP).
const DECIMAL_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
    0xAA50, 0xABF0, 0xFF10,
];

// Every run of cased letters starts upper-case and continues lower-case.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && prev_cased {
            out.extend(c.to_lowercase());
        } else if cased {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }
    out
}

/// Splits the local-part on `.` first, then `_`; otherwise the whole
/// local-part is the first name.
pub fn parse_email_to_name(email: &str) -> NameParts {
    let local = email.split('@').next().unwrap_or_default();

    let separator = if local.contains('.') {
        Some('.')
    } else if local.contains('_') {
        Some('_')
    } else {
        None
    };

    match separator {
        Some(sep) => {
            let mut parts = local.split(sep);
            let first = clean_name(parts.next().unwrap_or_default());
            let rest = parts.collect::<Vec<_>>().join(" ");
            NameParts::new(first, clean_name(&rest))
        }
        None => NameParts::new(clean_name(local), ""),
    }
}

/// Renders the CSV body for already-normalised addresses.
pub fn render_csv<S: AsRef<str>>(emails: &[S]) -> Result<Vec<u8>, ListError> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    wtr.write_record(CSV_HEADER).map_err(ListError::csv)?;
    for email in emails {
        let email = email.as_ref();
        let NameParts { first, last } = parse_email_to_name(email);
        debug!(email, first = %first, last = %last, "contact row");
        wtr.write_record([email, first.as_str(), last.as_str()])
            .map_err(ListError::csv)?;
    }
    wtr.into_inner()
        .map_err(|err| ListError::csv(csv::Error::from(err.into_error())))
}

pub fn generate_file(input: &Path) -> Result<ImportReport, ListError> {
    let emails: Vec<String> = read_lines_strict(input)?
        .iter()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    let output = import_output_path(input);
    let data = render_csv(&emails)?;
    write_all_atomically(&output, &data)?;

    info!(input = %input.display(), contacts = emails.len(), "import CSV generated");
    Ok(ImportReport {
        input: input.to_path_buf(),
        output,
        contacts: emails.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn dotted_local_part() {
        assert_eq!(parse_email_to_name("john.doe@x.com"), NameParts::new("John", "Doe"));
    }

    #[test]
    fn underscore_local_part_drops_digits() {
        assert_eq!(
            parse_email_to_name("jane_smith99@x.com"),
            NameParts::new("Jane", "Smith")
        );
    }

    #[test]
    fn single_token_is_first_name() {
        assert_eq!(parse_email_to_name("bob@x.com"), NameParts::new("Bob", ""));
    }

    #[test]
    fn dot_wins_over_underscore() {
        assert_eq!(
            parse_email_to_name("mary_ann.lee@x.com"),
            NameParts::new("Mary Ann", "Lee")
        );
    }

    #[test]
    fn extra_segments_join_the_last_name() {
        assert_eq!(
            parse_email_to_name("jean.luc.picard@x.com"),
            NameParts::new("Jean", "Luc Picard")
        );
    }

    #[test]
    fn clean_name_handles_hyphens_and_case() {
        assert_eq!(clean_name("ANNE-marie"), "Anne Marie");
        assert_eq!(clean_name("o'neil"), "O'Neil");
        assert_eq!(clean_name("2024"), "");
    }

    #[test]
    fn no_at_sign_uses_whole_string() {
        assert_eq!(parse_email_to_name("alice.b"), NameParts::new("Alice", "B"));
    }

    #[test]
    fn csv_layout() {
        let data = render_csv(&["john.doe@x.com", "jane_smith99@x.com", "bob@x.com"])
            .expect("render");
        let text = String::from_utf8(data).expect("utf-8");
        assert_eq!(
            text,
            "Email,First Name,Last Name\r\n\
             john.doe@x.com,John,Doe\r\n\
             jane_smith99@x.com,Jane,Smith\r\n\
             bob@x.com,Bob,\r\n"
        );
    }

    #[test]
    fn csv_rows_are_crlf_terminated() {
        let data = render_csv(&["bob@x.com"]).expect("render");
        let text = String::from_utf8(data).expect("utf-8");
        assert!(!text.replace("\r\n", "").contains('\n'), "{text:?}");
        insta::assert_debug_snapshot!(text.split_terminator("\r\n").collect::<Vec<_>>(), @r###"
        [
            "Email,First Name,Last Name",
            "bob@x.com,Bob,",
        ]
        "###);
    }

    #[test]
    fn only_digits_are_stripped() {
        assert_eq!(clean_name("jane\u{bd}"), "Jane\u{bd}");
        assert_eq!(clean_name("louis_\u{216b}"), "Louis \u{216b}");
        assert_eq!(clean_name("max\u{b2}7"), "Max");
        assert_eq!(clean_name("\u{661}omar"), "Omar");
    }

    #[test]
    fn generate_file_lowercases_and_skips_blanks() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("contacts.txt");
        fs::write(&input, "  John.Doe@X.com \n\nBOB@x.com\n").expect("seed");

        let report = generate_file(&input).expect("generate");
        assert_eq!(report.contacts, 2);
        assert_eq!(report.output, dir.path().join("contacts_import.csv"));

        let text = fs::read_to_string(&report.output).expect("read");
        assert_eq!(
            text,
            "Email,First Name,Last Name\r\njohn.doe@x.com,John,Doe\r\nbob@x.com,Bob,\r\n"
        );
    }
}
