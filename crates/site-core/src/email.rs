//! Permissive `local@domain.tld` shape check shared by the forms and the API.
//!
//! Accepts exactly what the ECMAScript pattern `^[^\s@]+@[^\s@]+\.[^\s@]+$`
//! accepts: no `\s` whitespace, a single `@` with something before it, and a
//! `.` in the domain part with at least one character on each side. This is a weak filter against typos, not
//! an address validator; many invalid addresses pass.

/// The ECMAScript `\s` class. Unlike `char::is_whitespace` it includes
/// U+FEFF and leaves out U+0085.
fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_space) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
