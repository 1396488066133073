//! Registration and credential payload validation.
//!
//! Checks run in a fixed order (presence, password length, email format)
//! and stop at the first failure, so a payload with several problems always
//! reports the same one.

use regex::Regex;

const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ValidationError {
    MissingFields,
    WeakPassword,
    InvalidEmail,
}

impl ValidationError {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::MissingFields => "All fields are required",
            Self::WeakPassword => "Password must be at least 6 characters long",
            Self::InvalidEmail => "Invalid email format",
        }
    }
}

/// A registration payload that passed validation. Fields borrow from the
/// request exactly as submitted, no trimming or case folding.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Registration<'a> {
    pub(crate) full_name: &'a str,
    pub(crate) email: &'a str,
    pub(crate) password: &'a str,
}

/// Validate a registration payload.
///
/// Absent and empty fields are equivalent. The password length is counted
/// in characters, not bytes.
pub(crate) fn validate_registration<'a>(
    full_name: Option<&'a str>,
    email: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<Registration<'a>, ValidationError> {
    let (Some(full_name), Some(email), Some(password)) = (full_name, email, password) else {
        return Err(ValidationError::MissingFields);
    };

    if full_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::WeakPassword);
    }

    if !valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(Registration {
        full_name,
        email,
        password,
    })
}

/// Email format check: one `@`, no whitespace, and a dot in the domain part.
pub(crate) fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_wins_over_everything() {
        assert_eq!(
            validate_registration(None, Some("a@b.co"), Some("longenough")),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_registration(Some("Ada"), None, Some("longenough")),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_registration(Some("Ada"), Some("a@b.co"), None),
            Err(ValidationError::MissingFields)
        );
        // Empty strings count as missing
        assert_eq!(
            validate_registration(Some(""), Some("a@b.co"), Some("longenough")),
            Err(ValidationError::MissingFields)
        );
        // Empty password is reported as missing, not weak
        assert_eq!(
            validate_registration(Some("Ada"), Some("a@b.co"), Some("")),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn short_password_reported_before_bad_email() {
        assert_eq!(
            validate_registration(Some("Ada"), Some("not-an-email"), Some("12345")),
            Err(ValidationError::WeakPassword)
        );
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // Six multibyte characters pass even though the byte count is larger
        let result = validate_registration(Some("Ada"), Some("a@b.co"), Some("ññññññ"));
        assert!(result.is_ok());

        let result = validate_registration(Some("Ada"), Some("a@b.co"), Some("ñññññ"));
        assert_eq!(result, Err(ValidationError::WeakPassword));
    }

    #[test]
    fn password_boundary_is_six() {
        assert!(validate_registration(Some("Ada"), Some("a@b.co"), Some("123456")).is_ok());
        assert_eq!(
            validate_registration(Some("Ada"), Some("a@b.co"), Some("12345")),
            Err(ValidationError::WeakPassword)
        );
    }

    #[test]
    fn invalid_email_shapes() {
        for email in [
            "plainaddress",
            "missing-at.example.com",
            "user@nodomain",
            "user@@example.com",
            "user @example.com",
            "user@exa mple.com",
            "@example.com",
            "user@",
        ] {
            assert_eq!(
                validate_registration(Some("Ada"), Some(email), Some("longenough")),
                Err(ValidationError::InvalidEmail),
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn valid_email_shapes() {
        for email in ["user@example.com", "a@b.co", "first.last@sub.domain.org"] {
            assert!(valid_email(email), "expected {email:?} to be accepted");
        }
    }

    #[test]
    fn no_normalization_applied() {
        // Leading whitespace is not trimmed, the address fails as-is
        assert_eq!(
            validate_registration(Some("Ada"), Some(" user@example.com"), Some("longenough")),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn validated_payload_borrows_inputs_verbatim() {
        let registration =
            validate_registration(Some("Ada Lovelace"), Some("ADA@Example.COM"), Some("123456"))
                .unwrap();
        assert_eq!(registration.full_name, "Ada Lovelace");
        assert_eq!(registration.email, "ADA@Example.COM");
        assert_eq!(registration.password, "123456");
    }
}
