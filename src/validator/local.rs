// atext specials allowed unquoted in a dot-atom (RFC 5322 3.2.3)
const ATEXT_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Dot-atom: atext, no leading/trailing/doubled dot. Non-ASCII characters
/// count as atext unless they are whitespace or controls (RFC 6531 SMTPUTF8).
pub(crate) fn is_dot_atom(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

fn is_atext(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || ATEXT_SPECIALS.contains(c)
    } else {
        !c.is_whitespace() && !c.is_control()
    }
}

/// Quoted-string without escapes: `"..."` with printable ASCII inside.
pub(crate) fn is_simple_quoted(s: &str) -> bool {
    s.len() >= 2
        && s.starts_with('"')
        && s.ends_with('"')
        && s[1..s.len() - 1]
            .chars()
            .all(|c| c == ' ' || (c.is_ascii_graphic() && c != '"' && c != '\\'))
}
