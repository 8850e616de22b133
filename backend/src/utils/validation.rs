use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::handlers::contact_dtos::ContactRequest;

pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    Required,
    InvalidFormat,
    TooShort,
}

/// Failing fields keyed by their JSON name.
pub type Issues = BTreeMap<&'static str, Issue>;

pub fn validate_contact(req: &ContactRequest) -> Issues {
    let mut issues = Issues::new();

    if req.name.trim().is_empty() {
        issues.insert("name", Issue::Required);
    }

    let email = req.email.trim();
    if email.is_empty() {
        issues.insert("email", Issue::Required);
    } else if !EMAIL_PATTERN.is_match(email) {
        issues.insert("email", Issue::InvalidFormat);
    }

    let message = req.message.trim();
    if message.is_empty() {
        issues.insert("message", Issue::Required);
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        issues.insert("message", Issue::TooShort);
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            company: None,
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_request_has_three_required() {
        let issues = validate_contact(&ContactRequest::default());
        assert_eq!(issues.len(), 3);
        assert!(issues.values().all(|i| *i == Issue::Required));
    }

    #[test]
    fn bad_email_and_short_message() {
        let issues = validate_contact(&request("A", "a@b", "too short"));
        assert_eq!(issues.get("email"), Some(&Issue::InvalidFormat));
        assert_eq!(issues.get("message"), Some(&Issue::TooShort));
        assert!(!issues.contains_key("name"));
    }

    #[test]
    fn message_length_counts_characters_after_trim() {
        assert!(validate_contact(&request("Åsa", "asa@pitea.se", "  åäöåäöåäöå  ")).is_empty());
        let issues = validate_contact(&request("Åsa", "asa@pitea.se", "  åäöåäöåäö  "));
        assert_eq!(issues.get("message"), Some(&Issue::TooShort));
    }

    #[test]
    fn issues_serialize_as_snake_case() {
        let issues = validate_contact(&request("", "x", "hello there, friend"));
        let json = serde_json::to_value(&issues).unwrap();
        assert_eq!(json["name"], "required");
        assert_eq!(json["email"], "invalid_format");
    }
}
