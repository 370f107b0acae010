//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of a stored email address, in characters
pub const EMAIL_MAX_LENGTH: usize = 255;

// Pragmatic address shape: local part, '@', dotted domain with a 2+ letter TLD
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Normalize an email address.
///
/// Surrounding whitespace is trimmed and the domain (everything after the
/// last `@`) is lower-cased. The local part is kept verbatim since mailbox
/// names may be case sensitive. Input without `@` is only trimmed.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Check if an email address has a plausible shape
pub fn is_valid_email(email: &str) -> bool {
    email.chars().count() <= EMAIL_MAX_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Mask an email address for logs (e.g., j***@example.com)
pub fn mask_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => format!("***@{}", domain),
        },
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_domain_only() {
        assert_eq!(normalize_email("John.Doe@Example.COM"), "John.Doe@example.com");
        assert_eq!(normalize_email("u@example.com"), "u@example.com");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_email("  user@Host.org \n"), "user@host.org");
        assert_eq!(normalize_email("   "), "");
    }

    #[test]
    fn test_normalize_uses_last_at_sign() {
        assert_eq!(normalize_email("\"a@b\"@Example.Com"), "\"a@b\"@example.com");
    }

    #[test]
    fn test_normalize_without_at_sign() {
        assert_eq!(normalize_email("NotAnEmail"), "NotAnEmail");
        assert_eq!(normalize_email(""), "");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("traveler@abletotrip.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.kr"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_is_valid_email_rejects_overlong() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(!is_valid_email(&email));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("traveler@abletotrip.com"), "t***@abletotrip.com");
        assert_eq!(mask_email("@abletotrip.com"), "***@abletotrip.com");
        assert_eq!(mask_email("plain"), "***");
    }
}
