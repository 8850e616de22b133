use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_MESSAGE_CHARS: usize = 10;

// Deliberately loose: something@something.something
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Company, Field::Message];
}

/// The fields that carry rules. Company is optional free text and never
/// has an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckedField {
    Name,
    Email,
    Message,
}

impl CheckedField {
    pub const ALL: [CheckedField; 3] = [CheckedField::Name, CheckedField::Email, CheckedField::Message];

    pub fn of(field: Field) -> Option<Self> {
        match field {
            Field::Name => Some(CheckedField::Name),
            Field::Email => Some(CheckedField::Email),
            Field::Message => Some(CheckedField::Message),
            Field::Company => None,
        }
    }

    /// Name used in the backend's JSON error body.
    pub fn key(self) -> &'static str {
        match self {
            CheckedField::Name => "name",
            CheckedField::Email => "email",
            CheckedField::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
    TooShort,
}

impl FieldError {
    /// Inline message shown under the offending input.
    pub fn message(self, field: CheckedField) -> &'static str {
        match (field, self) {
            (CheckedField::Name, _) => "Namn är obligatoriskt",
            (CheckedField::Email, FieldError::Required) => "E-post är obligatoriskt",
            (CheckedField::Email, _) => "Vänligen ange en giltig e-postadress",
            (CheckedField::Message, FieldError::TooShort) => "Meddelandet måste vara minst 10 tecken",
            (CheckedField::Message, _) => "Meddelande är obligatoriskt",
        }
    }

    /// Parses the snake_case kind the backend reports.
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "required" => Some(FieldError::Required),
            "invalid_format" => Some(FieldError::InvalidFormat),
            "too_short" => Some(FieldError::TooShort),
            _ => None,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            FieldError::Required => "required",
            FieldError::InvalidFormat => "invalid format",
            FieldError::TooShort => "too short",
        };
        f.write_str(kind)
    }
}

pub type FieldErrors = BTreeMap<CheckedField, FieldError>;

/// Maps a backend `fields` object back onto form errors. Unknown fields or
/// kinds are skipped.
pub fn field_errors_from_body(fields: &BTreeMap<String, String>) -> FieldErrors {
    fields
        .iter()
        .filter_map(|(key, kind)| Some((CheckedField::from_key(key)?, FieldError::from_kind(kind)?)))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }
}

pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks every rule and returns one error per failing field.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(CheckedField::Name, FieldError::Required);
    }

    if fields.email.trim().is_empty() {
        errors.insert(CheckedField::Email, FieldError::Required);
    } else if !is_plausible_email(&fields.email) {
        errors.insert(CheckedField::Email, FieldError::InvalidFormat);
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.insert(CheckedField::Message, FieldError::Required);
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(CheckedField::Message, FieldError::TooShort);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.to_string(),
            email: email.to_string(),
            company: String::new(),
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_form_reports_three_required_fields() {
        let errors = validate(&fields("", "", ""));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&CheckedField::Name], FieldError::Required);
        assert_eq!(errors[&CheckedField::Email], FieldError::Required);
        assert_eq!(errors[&CheckedField::Message], FieldError::Required);
    }

    #[test]
    fn whitespace_counts_as_blank() {
        let errors = validate(&fields("   ", "\t", "\n  "));
        assert_eq!(errors.len(), 3);
        assert!(errors.values().all(|e| *e == FieldError::Required));
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        let errors = validate(&fields("A", "not-an-email", "1234567890"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&CheckedField::Email), Some(&FieldError::InvalidFormat));
    }

    #[test]
    fn short_message_is_the_only_error() {
        let errors = validate(&fields("A", "a@b.com", "short"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&CheckedField::Message), Some(&FieldError::TooShort));
    }

    #[test]
    fn message_length_ignores_surrounding_whitespace() {
        let errors = validate(&fields("A", "a@b.com", "   123456789   "));
        assert_eq!(errors.get(&CheckedField::Message), Some(&FieldError::TooShort));
        assert!(validate(&fields("A", "a@b.com", "  1234567890 ")).is_empty());
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&fields("A", "a@b.com", "this is long enough")).is_empty());
    }

    #[test]
    fn email_pattern_is_minimal() {
        assert!(is_plausible_email("anna@företag.se"));
        assert!(is_plausible_email("x@y.z"));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("@b.com"));
        assert!(!is_plausible_email("a b@c d"));
    }

    #[test]
    fn messages_are_swedish() {
        assert_eq!(FieldError::Required.message(CheckedField::Name), "Namn är obligatoriskt");
        assert_eq!(
            FieldError::InvalidFormat.message(CheckedField::Email),
            "Vänligen ange en giltig e-postadress"
        );
        assert_eq!(
            FieldError::TooShort.message(CheckedField::Message),
            "Meddelandet måste vara minst 10 tecken"
        );
    }

    #[test]
    fn only_checked_fields_carry_errors() {
        assert_eq!(CheckedField::of(Field::Company), None);
        for field in Field::ALL {
            if let Some(checked) = CheckedField::of(field) {
                assert_eq!(CheckedField::from_key(checked.key()), Some(checked));
            }
        }
        let company_only = ContactFields {
            company: "x".to_string(),
            ..fields("A", "a@b.com", "this is long enough")
        };
        assert!(validate(&company_only).is_empty());
    }

    #[test]
    fn backend_field_kinds_map_back_to_errors() {
        let body: BTreeMap<String, String> = [
            ("email", "invalid_format"),
            ("message", "too_short"),
            ("company", "required"),
            ("name", "something_new"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let errors = field_errors_from_body(&body);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[&CheckedField::Email], FieldError::InvalidFormat);
        assert_eq!(errors[&CheckedField::Message], FieldError::TooShort);
    }
}
