//! Contact information presence

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").expect("Invalid email regex")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?1[-. ]?)?(?:\([0-9]{3}\)|\b[0-9]{3})[-. ]?[0-9]{3}[-. ]?[0-9]{4}\b")
        .expect("Invalid phone regex")
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:https?://|www\.)\S+|(?:linkedin|github)\.com/\S*").expect("Invalid URL regex")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_linkedin: bool,
    pub has_github: bool,
}

impl ContactInfo {
    pub fn is_complete(&self) -> bool {
        self.has_email && self.has_phone
    }
}

/// Detect contact details in lower-cased resume text.
pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        has_email: EMAIL_REGEX.is_match(text),
        has_phone: PHONE_REGEX.is_match(text),
        has_linkedin: text.contains("linkedin.com"),
        has_github: text.contains("github.com"),
    }
}

/// Byte ranges covered by emails, phone numbers and URLs. Numbers inside
/// these ranges are never achievements.
pub fn contact_spans(text: &str) -> Vec<Range<usize>> {
    EMAIL_REGEX
        .find_iter(text)
        .chain(PHONE_REGEX.find_iter(text))
        .chain(URL_REGEX.find_iter(text))
        .map(|m| m.range())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_contact_block() {
        let text = "jane roe\njane.roe@example.com | (555) 123-4567\nlinkedin.com/in/janeroe\ngithub.com/janeroe";
        let contact = extract_contact(text);
        assert!(contact.has_email);
        assert!(contact.has_phone);
        assert!(contact.has_linkedin);
        assert!(contact.has_github);
        assert!(contact.is_complete());
    }

    #[test]
    fn test_phone_formats() {
        assert!(extract_contact("phone: 123-456-7890").has_phone);
        assert!(extract_contact("+1 555.123.4567").has_phone);
        assert!(!extract_contact("call me at 12345").has_phone);
    }

    #[test]
    fn test_missing_contact() {
        let contact = extract_contact("john doe");
        assert_eq!(contact, ContactInfo::default());
        assert!(!contact.is_complete());
    }

    #[test]
    fn test_contact_spans_cover_phone() {
        let text = "phone: 123-456-7890";
        let spans = contact_spans(text);
        assert!(spans.iter().any(|s| &text[s.clone()] == "123-456-7890"));
    }
}
