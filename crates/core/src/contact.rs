//! Contact-form field validation and user-facing messages.
//!
//! Checks run in a fixed order and the first failure wins: required fields,
//! then email shape, then phone characters. The `Display` impl of
//! [`ContactError`] is the exact message shown to the visitor.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// local@domain.tld shape: no whitespace or extra `@`, and a dot somewhere
/// in the domain part.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Permissive phone check: ASCII digits, whitespace, hyphen, plus, parens.
static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("valid phone regex"));

/// Why a submission was rejected. `Display` is the user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

/// A contact request as read from the page, with surrounding whitespace
/// already removed from every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    /// Builds a submission from raw field values, trimming each one.
    pub fn from_raw(name: &str, email: &str, phone: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Validates the submission; the first failing check wins.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
            || self.message.is_empty()
        {
            return Err(ContactError::MissingFields);
        }
        if !EMAIL_SHAPE.is_match(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        if !PHONE_SHAPE.is_match(&self.phone) {
            return Err(ContactError::InvalidPhone);
        }
        Ok(())
    }

    /// The personalized acknowledgement shown after a valid submission.
    pub fn success_message(&self) -> String {
        format!(
            "Thank you, {}! Your message has been sent successfully.",
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactSubmission {
        ContactSubmission::from_raw("Ada Lovelace", "ada@example.com", "+47 (555) 123-456", "Hello!")
    }

    #[test]
    fn test_valid_submission_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_any_empty_field_is_rejected() {
        for field in 0..4 {
            let mut submission = valid();
            match field {
                0 => submission.name.clear(),
                1 => submission.email.clear(),
                2 => submission.phone.clear(),
                _ => submission.message.clear(),
            }
            assert_eq!(submission.validate(), Err(ContactError::MissingFields));
        }
    }

    #[test]
    fn test_whitespace_only_field_counts_as_missing() {
        let submission = ContactSubmission::from_raw("  ", "ada@example.com", "123", "hi");
        assert_eq!(submission.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let submission =
            ContactSubmission::from_raw("  Ada  ", " ada@example.com ", " 123 ", " hi ");
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields_beats_bad_email() {
        // Empty message and a broken email: the required-fields check runs first.
        let submission = ContactSubmission::from_raw("Ada", "not-an-email", "123", "");
        assert_eq!(submission.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn test_bad_email_beats_bad_phone() {
        let submission = ContactSubmission::from_raw("Ada", "no-at-sign", "not a phone", "hi");
        assert_eq!(submission.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_email_shapes() {
        let reject = ["plain", "missing@dot", "no@@example.com", "a b@example.com", "x@ example.com"];
        for email in reject {
            let submission = ContactSubmission::from_raw("Ada", email, "123", "hi");
            assert_eq!(
                submission.validate(),
                Err(ContactError::InvalidEmail),
                "expected rejection for {email:?}"
            );
        }
        let accept = ["ada@example.com", "a.b+c@mail.example.co.uk", "1@2.3"];
        for email in accept {
            let submission = ContactSubmission::from_raw("Ada", email, "123", "hi");
            assert_eq!(submission.validate(), Ok(()), "expected pass for {email:?}");
        }
    }

    #[test]
    fn test_phone_shapes() {
        let accept = ["12345678", "+47 (555) 123-456", "555 123 456", "(0)40-555"];
        for phone in accept {
            let submission = ContactSubmission::from_raw("Ada", "ada@example.com", phone, "hi");
            assert_eq!(submission.validate(), Ok(()), "expected pass for {phone:?}");
        }
        let reject = ["call me", "555x123", "½55"];
        for phone in reject {
            let submission = ContactSubmission::from_raw("Ada", "ada@example.com", phone, "hi");
            assert_eq!(
                submission.validate(),
                Err(ContactError::InvalidPhone),
                "expected rejection for {phone:?}"
            );
        }
    }

    #[test]
    fn test_error_messages_are_the_user_facing_strings() {
        assert_eq!(
            ContactError::MissingFields.to_string(),
            "Please fill in all fields."
        );
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(
            ContactError::InvalidPhone.to_string(),
            "Please enter a valid phone number."
        );
    }

    #[test]
    fn test_success_message_is_personalized() {
        assert_eq!(
            valid().success_message(),
            "Thank you, Ada Lovelace! Your message has been sent successfully."
        );
    }
}
