/// Names reserved for special use (RFC 6761 and friends); no mail is ever
/// delivered to them or to their subdomains.
const SPECIAL_USE_DOMAINS: [&str; 6] = ["arpa", "invalid", "local", "localhost", "onion", "test"];

/// Checks the domain (IDNA conversion, label rules, reserved names) and
/// returns its ASCII form when it could be computed. Invalidating reasons are
/// pushed into `reasons`.
pub(crate) fn check_domain(domain: &str, reasons: &mut Vec<String>) -> Option<String> {
    let ascii = match idna::domain_to_ascii(domain) {
        Ok(d) => d,
        Err(_) => {
            reasons.push("domain punycode conversion failed".to_string());
            return None;
        }
    };

    if ascii.is_empty() {
        reasons.push("domain empty after IDNA conversion".to_string());
        return None;
    }

    let before = reasons.len();
    if !ascii.contains('.') {
        reasons.push("domain must contain at least one dot".to_string());
    }

    for label in ascii.split('.') {
        check_label(label, reasons);
    }

    let tld = ascii.rsplit('.').next().unwrap_or_default();
    if !tld.is_empty() && tld.chars().all(|c| c.is_ascii_digit()) {
        reasons.push(format!("top-level domain '{tld}' cannot be numeric"));
    }

    if reasons.len() == before && is_special_use(&ascii) {
        reasons.push(format!(
            "domain '{ascii}' is a special-use or reserved name that cannot receive email"
        ));
    }

    Some(ascii)
}

fn check_label(label: &str, reasons: &mut Vec<String>) {
    if label.is_empty() {
        reasons.push("empty domain label".to_string());
        return;
    }
    if label.len() > 63 {
        reasons.push(format!("domain label '{label}' length {} > 63", label.len()));
    }
    if label.starts_with('-') || label.ends_with('-') {
        reasons.push(format!("domain label '{label}' cannot start/end with '-'"));
    }
    if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        reasons.push(format!("domain label '{label}' has invalid chars"));
    }
}

fn is_special_use(ascii: &str) -> bool {
    let lower = ascii.to_ascii_lowercase();
    SPECIAL_USE_DOMAINS.iter().any(|name| {
        lower == *name
            || lower
                .strip_suffix(name)
                .is_some_and(|head| head.ends_with('.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_domain_ok() {
        let mut reasons = vec![];
        let ascii = check_domain("example.com", &mut reasons);
        assert!(reasons.is_empty(), "{reasons:?}");
        assert_eq!(ascii.as_deref(), Some("example.com"));
    }

    #[test]
    fn idn_is_converted() {
        let mut reasons = vec![];
        let ascii = check_domain("exämple.com", &mut reasons).expect("ascii");
        assert!(ascii.starts_with("xn--"), "{ascii}");
        assert!(reasons.is_empty(), "{reasons:?}");
    }

    #[test]
    fn label_too_long() {
        let long = "a".repeat(64);
        let mut reasons = vec![];
        check_domain(&format!("{long}.com"), &mut reasons);
        assert!(reasons.iter().any(|r| r.contains("> 63")), "{reasons:?}");
    }

    #[test]
    fn special_use_names_rejected() {
        for domain in ["mail.invalid", "foo.test", "printer.local", "example.onion"] {
            let mut reasons = vec![];
            check_domain(domain, &mut reasons);
            assert!(
                reasons.iter().any(|r| r.contains("special-use")),
                "{domain}: {reasons:?}"
            );
        }
    }

    #[test]
    fn suffix_match_needs_label_boundary() {
        let mut reasons = vec![];
        check_domain("contest.com", &mut reasons);
        assert!(reasons.is_empty(), "{reasons:?}");
        check_domain("latest", &mut reasons);
        assert!(!reasons.iter().any(|r| r.contains("special-use")));
    }

    #[test]
    fn numeric_tld_rejected() {
        let mut reasons = vec![];
        check_domain("mail.123", &mut reasons);
        assert!(reasons.iter().any(|r| r.contains("numeric")), "{reasons:?}");
    }
}
