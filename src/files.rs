//! File helpers shared by the three tools: input decoding, output naming and
//! atomic writes.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ListError;

/// Reads `path` line by line, dropping byte sequences that are not valid UTF-8.
pub fn read_lines_lossy(path: &Path) -> Result<Vec<String>, ListError> {
    let bytes = fs::read(path).map_err(|err| ListError::read(path, err))?;
    let text = decode_ignoring_invalid(&bytes);
    debug!(path = %path.display(), bytes = bytes.len(), "input loaded");
    Ok(split_lines(&text))
}

/// Reads `path` line by line; invalid UTF-8 is an error.
pub fn read_lines_strict(path: &Path) -> Result<Vec<String>, ListError> {
    let bytes = fs::read(path).map_err(|err| ListError::read(path, err))?;
    let text = String::from_utf8(bytes).map_err(|err| ListError::decode(path, err))?;
    Ok(split_lines(&text))
}

/// Splits on `\n`, `\r\n` and a bare `\r`. A final terminator does not start
/// an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(end) = rest.find(['\r', '\n']) else {
            lines.push(rest.to_owned());
            break;
        };
        lines.push(rest[..end].to_owned());
        let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + width..];
    }
    lines
}

pub(crate) fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Builds `<dir>/<stem><suffix>[.<extension>]` from the input path.
///
/// A path without a file stem (e.g. `..`) keeps its whole name as the stem.
pub fn derived_path(input: &Path, suffix: &str, extension: Option<&OsStr>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| input.as_os_str().to_os_string());

    let mut name: OsString = stem;
    name.push(suffix);
    if let Some(ext) = extension.filter(|ext| !ext.is_empty()) {
        name.push(".");
        name.push(ext);
    }

    match input.parent() {
        Some(parent) if input.file_stem().is_some() => parent.join(name),
        _ => PathBuf::from(name),
    }
}

/// Joins entries with `\n` and terminates the text with a final `\n`.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out.push('\n');
    out
}

/// Writes through a sibling `.tmp` file and renames it over `path`, so a
/// failed run never leaves a truncated output behind.
pub fn write_all_atomically(path: &Path, bytes: &[u8]) -> Result<(), ListError> {
    write_all_atomically_many(&[(path, bytes)])
}

/// Same as [`write_all_atomically`] for several outputs: every `.tmp` file is
/// written before the first rename, so a write failure leaves all previous
/// outputs untouched.
pub fn write_all_atomically_many(outputs: &[(&Path, &[u8])]) -> Result<(), ListError> {
    let mut staged = Vec::with_capacity(outputs.len());
    for (path, bytes) in outputs {
        match stage(path, bytes) {
            Ok(tmp) => staged.push(tmp),
            Err(err) => {
                for tmp in &staged {
                    let _ = fs::remove_file(tmp);
                }
                return Err(err);
            }
        }
    }
    for (tmp, (path, bytes)) in staged.iter().zip(outputs) {
        fs::rename(tmp, path).map_err(|err| ListError::write(path, err))?;
        debug!(path = %path.display(), bytes = bytes.len(), "output written");
    }
    Ok(())
}

fn stage(path: &Path, bytes: &[u8]) -> Result<PathBuf, ListError> {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    let mut f = fs::File::create(&tmp).map_err(|err| ListError::write(&tmp, err))?;
    f.write_all(bytes).map_err(|err| ListError::write(&tmp, err))?;
    f.sync_all().map_err(|err| ListError::write(&tmp, err))?;
    Ok(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_path_keeps_directory_and_extension() {
        let out = derived_path(Path::new("lists/clients.txt"), "_clean", Some(OsStr::new("txt")));
        assert_eq!(out, PathBuf::from("lists/clients_clean.txt"));
    }

    #[test]
    fn derived_path_without_extension() {
        let input = Path::new("clients");
        let out = derived_path(input, "_clean", input.extension());
        assert_eq!(out, PathBuf::from("clients_clean"));
    }

    #[test]
    fn derived_path_dotfile_is_a_stem() {
        let input = Path::new(".emails");
        let out = derived_path(input, "_import", Some(OsStr::new("csv")));
        assert_eq!(out, PathBuf::from(".emails_import.csv"));
    }

    #[test]
    fn invalid_utf8_is_dropped() {
        let text = decode_ignoring_invalid(b"a\xffb@x.com\n");
        assert_eq!(text, "ab@x.com\n");
    }

    #[test]
    fn split_lines_accepts_every_line_ending() {
        assert_eq!(split_lines("a\rb\r\nc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("b@x.com\ra@x.com\r"), vec!["b@x.com", "a@x.com"]);
        assert_eq!(split_lines("\n\r\n\r"), vec!["", "", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn join_lines_terminates_with_newline() {
        assert_eq!(join_lines(&["a", "b"]), "a\nb\n");
        assert_eq!(join_lines::<&str>(&[]), "\n");
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_lines_lossy(&dir.path().join("absent.txt")).expect_err("missing");
        assert!(err.is_not_found());
    }

    #[test]
    fn strict_read_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.txt");
        fs::write(&path, b"ok@x.com\n\xff\n").expect("write");
        let err = read_lines_strict(&path).expect_err("invalid utf-8");
        assert!(matches!(err, ListError::Decode { .. }));
    }

    #[test]
    fn atomic_write_replaces_previous_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.txt");
        fs::write(&path, "old content that is longer\n").expect("seed");
        write_all_atomically(&path, b"new\n").expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "new\n");
        assert!(!dir.path().join("out.txt.tmp").exists());
    }

    #[test]
    fn failed_batch_keeps_previous_outputs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = dir.path().join("valid.txt");
        fs::write(&first, "old\n").expect("seed");
        let unwritable = dir.path().join("missing-dir").join("invalid.txt");

        let err = write_all_atomically_many(&[
            (first.as_path(), &b"new\n"[..]),
            (unwritable.as_path(), &b"x\n"[..]),
        ])
        .expect_err("second output cannot be staged");
        assert!(matches!(err, ListError::Write { .. }));
        assert_eq!(fs::read_to_string(&first).expect("read"), "old\n");
        assert!(!dir.path().join("valid.txt.tmp").exists());
    }
}
