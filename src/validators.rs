//! Input validation helpers.
//!
//! The email check reproduces the service's historical acceptance rule:
//! a local part of word characters with at most one interior `.`
//! separator, then `@` and a domain of two or more word-character
//! labels joined by dots. Word characters are ASCII letters, digits
//! and `_`. This is deliberately narrower than RFC 5322; the accepted
//! and rejected corpora are pinned by the tests below.

/// Minimum accepted password length, in bytes.
pub const MIN_PASSWORD_LEN: usize = 8;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Local part: one or more word characters, then optionally a single
/// `.` followed by zero or more word characters. `_` already counts as
/// a word character, so only `.` placement needs tracking.
fn is_valid_local_part(local: &str) -> bool {
    let mut dot_seen = false;
    for (idx, c) in local.char_indices() {
        if is_word_char(c) {
            continue;
        }
        if c == '.' && idx > 0 && !dot_seen {
            dot_seen = true;
        } else {
            return false;
        }
    }
    !local.is_empty()
}

/// Domain: two or more non-empty word-character labels joined by `.`.
fn is_valid_domain(domain: &str) -> bool {
    let mut labels = 0;
    for label in domain.split('.') {
        if label.is_empty() || !label.chars().all(is_word_char) {
            return false;
        }
        labels += 1;
    }
    labels >= 2
}

/// Check an email address against the service's acceptance rule.
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => is_valid_local_part(local) && is_valid_domain(domain),
        None => false,
    }
}

/// Check that a password is long enough.
pub fn is_valid_password(passwd: &str) -> bool {
    passwd.len() >= MIN_PASSWORD_LEN
}

/// Check that a parsed identifier can refer to a row.
pub fn is_valid_id(id: i32) -> bool {
    id > 0
}
