//! # Form schemas — client-side validation for the auth screens
//!
//! Each form has a plain data record and a `validate_*` function that returns
//! a [`FormErrors`] map holding at most one message per field (the first check
//! that fails wins, which is what the pages render inline under each input).
//! Validation is purely local; submitting a valid form never issues a request.

use std::collections::BTreeMap;

/// Sign-in form state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignInData {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Sign-up form state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpData {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// First-error-per-field message map, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Record a message for a field unless one is already present.
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }
}

/// Validate the sign-in form against its schema.
pub fn validate_sign_in(data: &SignInData) -> FormErrors {
    let mut errors = FormErrors::default();

    if let Some(msg) = email_error(&data.email) {
        errors.push("email", msg);
    }
    if data.password.is_empty() {
        errors.push("password", "Password is required");
    } else if data.password.len() < 6 {
        errors.push("password", "Password must be at least 6 characters");
    }

    errors
}

/// Validate the sign-up form against its schema.
pub fn validate_sign_up(data: &SignUpData) -> FormErrors {
    let mut errors = FormErrors::default();

    if data.first_name.trim().is_empty() {
        errors.push("first_name", "First name is required");
    }
    if data.last_name.trim().is_empty() {
        errors.push("last_name", "Last name is required");
    }

    let username = data.username.trim();
    if username.is_empty() {
        errors.push("username", "Username is required");
    } else if username.len() < 3 {
        errors.push("username", "Username must be at least 3 characters");
    } else if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        errors.push("username", "Username may only contain letters, numbers and underscores");
    }

    if let Some(msg) = email_error(&data.email) {
        errors.push("email", msg);
    }

    if let Some(msg) = phone_error(&data.phone) {
        errors.push("phone", msg);
    }

    if data.password.is_empty() {
        errors.push("password", "Password is required");
    } else if data.password.len() < 8 {
        errors.push("password", "Password must be at least 8 characters");
    }

    errors
}

fn email_error(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Some("Email is required");
    }
    if !is_well_formed_email(email) {
        return Some("Please enter a valid email address");
    }
    None
}

/// Lightweight shape check: one `@`, non-empty local part, dotted domain.
fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    domain.contains('.') && labels.all(|l| !l.is_empty())
}

fn phone_error(phone: &str) -> Option<&'static str> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Some("Phone number is required");
    }
    let valid_chars = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !valid_chars || digits < 7 {
        return Some("Please enter a valid phone number");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_sign_up() -> SignUpData {
        SignUpData {
            first_name: "Emma".to_string(),
            last_name: "Parson".to_string(),
            username: "emma_p".to_string(),
            email: "emma@example.com".to_string(),
            phone: "+1 555 010 2030".to_string(),
            password: "Tr0ub4dor&3x".to_string(),
        }
    }

    #[test]
    fn test_valid_sign_up_has_no_errors() {
        assert!(validate_sign_up(&valid_sign_up()).is_empty());
    }

    #[test]
    fn test_invalid_email_only_flags_email() {
        let mut data = valid_sign_up();
        data.email = "not-an-email".to_string();

        let errors = validate_sign_up(&data);
        assert!(!errors.is_empty());
        assert!(errors.get("email").is_some());
        for field in ["first_name", "last_name", "username", "phone", "password"] {
            assert!(errors.get(field).is_none(), "unexpected error on {field}");
        }
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let data = SignUpData::default();
        let errors = validate_sign_up(&data);
        // Empty email reports the required message, not the shape message.
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_username_charset() {
        let mut data = valid_sign_up();
        data.username = "emma parson".to_string();
        assert!(validate_sign_up(&data).get("username").is_some());

        data.username = "em".to_string();
        assert_eq!(
            validate_sign_up(&data).get("username"),
            Some("Username must be at least 3 characters")
        );
    }

    #[test]
    fn test_short_password_rejected() {
        let mut data = valid_sign_up();
        data.password = "short1".to_string();
        assert_eq!(
            validate_sign_up(&data).get("password"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_sign_in_schema() {
        let ok = SignInData {
            email: "emma@example.com".to_string(),
            password: "secret1".to_string(),
            remember_me: true,
        };
        assert!(validate_sign_in(&ok).is_empty());

        let bad = SignInData {
            email: "emma@".to_string(),
            password: "12345".to_string(),
            remember_me: false,
        };
        let errors = validate_sign_in(&bad);
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.co", "first.last@sub.domain.org", "x+tag@y.io"] {
            assert!(is_well_formed_email(ok), "{ok} should be accepted");
        }
        for bad in ["", "plain", "@b.co", "a@b", "a b@c.com", "a@@b.co", "a@b..co"] {
            assert!(!is_well_formed_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_phone_shapes() {
        assert!(phone_error("(555) 010-2030").is_none());
        assert!(phone_error("call me").is_some());
        assert!(phone_error("12345").is_some());
    }
}
