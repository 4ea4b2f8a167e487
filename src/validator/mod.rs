//! Syntax validation for a single address.

mod domain;
mod local;
mod types;

pub use types::{SyntaxReport, ValidationMode};

use domain::check_domain;
use local::{is_dot_atom, is_simple_quoted};

/// Checks length limits, the `@` split, the local-part and the domain.
pub fn validate_syntax(email: &str, mode: ValidationMode) -> SyntaxReport {
    check_address(email, mode).0
}

/// Same as [`validate_syntax`], also returning the ASCII (IDNA) domain when
/// the address is valid.
pub fn validate_with_domain(email: &str, mode: ValidationMode) -> (SyntaxReport, Option<String>) {
    let (report, ascii) = check_address(email, mode);
    let ascii = if report.ok { ascii } else { None };
    (report, ascii)
}

fn check_address(email: &str, mode: ValidationMode) -> (SyntaxReport, Option<String>) {
    let input = email.trim();
    let mut reasons = Vec::new();

    if input.len() > 254 {
        reasons.push(format!("total length {} > 254", input.len()));
    }

    let Some((local, domain)) = input.split_once('@').filter(|(_, d)| !d.contains('@')) else {
        reasons.push("must contain exactly one '@'".to_string());
        return (SyntaxReport::from_reasons(reasons), None);
    };

    let local_len = local.chars().count();
    if local_len == 0 || local_len > 64 {
        reasons.push(format!("local part length {local_len} invalid (1..=64)"));
    }

    let local_ok = match mode {
        ValidationMode::Strict => is_dot_atom(local),
        ValidationMode::Relaxed => is_dot_atom(local) || is_simple_quoted(local),
    };
    if !local_ok && !local.is_empty() {
        reasons.push(match mode {
            ValidationMode::Strict => "invalid local part (strict rules)".into(),
            ValidationMode::Relaxed => "invalid local part (relaxed rules)".into(),
        });
    }

    let ascii = check_domain(domain, &mut reasons);
    (SyntaxReport::from_reasons(reasons), ascii)
}
