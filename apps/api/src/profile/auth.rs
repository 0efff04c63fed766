//! Sign-up and log-in form validation. Validate-only: there is no
//! authentication backend, so passing validation simply clears the user
//! to move on to the profile screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// A single inline validation failure, keyed by the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_signup(form: &SignupForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.full_name.trim().is_empty() {
        errors.push(FieldError::new("fullName", "Full name is required"));
    }

    if form.email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !looks_like_email(&form.email) {
        errors.push(FieldError::new("email", "Please enter a valid email"));
    }

    if form.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if form.password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 8 characters",
        ));
    }

    if form.password != form.confirm_password {
        errors.push(FieldError::new("confirmPassword", "Passwords do not match"));
    }

    errors
}

pub fn validate_login(form: &LoginForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !looks_like_email(&form.email) {
        errors.push(FieldError::new("email", "Please enter a valid email"));
    }

    if form.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }

    errors
}

/// Shape check only: something@something.something, no whitespace in any
/// part. Deliverability is out of scope.
fn looks_like_email(s: &str) -> bool {
    let s = s.trim();
    let Some((local, rest)) = s.split_once('@') else {
        return false;
    };
    let Some((domain, tld)) = rest.rsplit_once('.') else {
        return false;
    };
    [local, domain, tld]
        .iter()
        .all(|part| !part.is_empty() && !part.contains(char::is_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupForm {
        SignupForm {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "engine1843".to_string(),
            confirm_password: "engine1843".to_string(),
        }
    }

    #[test]
    fn test_valid_signup_passes() {
        assert!(validate_signup(&signup()).is_empty());
    }

    #[test]
    fn test_signup_requires_full_name() {
        let mut form = signup();
        form.full_name = "  ".to_string();
        let errors = validate_signup(&form);
        assert_eq!(errors, vec![FieldError::new("fullName", "Full name is required")]);
    }

    #[test]
    fn test_signup_requires_email() {
        let mut form = signup();
        form.email = String::new();
        assert!(validate_signup(&form)
            .iter()
            .any(|e| e.field == "email" && e.message == "Email is required"));
    }

    #[test]
    fn test_signup_rejects_malformed_email() {
        for bad in ["no-at-sign.com", "missing@tld", "spaces in@example.com"] {
            let mut form = signup();
            form.email = bad.to_string();
            assert!(
                validate_signup(&form)
                    .iter()
                    .any(|e| e.field == "email" && e.message == "Please enter a valid email"),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_signup_rejects_short_password() {
        let mut form = signup();
        form.password = "short".to_string();
        form.confirm_password = "short".to_string();
        assert!(validate_signup(&form)
            .iter()
            .any(|e| e.field == "password" && e.message.contains("at least 8")));
    }

    #[test]
    fn test_signup_rejects_mismatched_confirmation() {
        let mut form = signup();
        form.confirm_password = "different1843".to_string();
        let errors = validate_signup(&form);
        assert_eq!(
            errors,
            vec![FieldError::new("confirmPassword", "Passwords do not match")]
        );
    }

    #[test]
    fn test_signup_collects_multiple_errors() {
        let form = SignupForm {
            full_name: String::new(),
            email: "bad".to_string(),
            password: "x".to_string(),
            confirm_password: "y".to_string(),
        };
        let fields: Vec<_> = validate_signup(&form).into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["fullName", "email", "password", "confirmPassword"]);
    }

    #[test]
    fn test_valid_login_passes() {
        let form = LoginForm {
            email: "ada@example.com".to_string(),
            password: "anything".to_string(),
        };
        assert!(validate_login(&form).is_empty());
    }

    #[test]
    fn test_login_has_no_password_length_rule() {
        let form = LoginForm {
            email: "ada@example.com".to_string(),
            password: "x".to_string(),
        };
        assert!(validate_login(&form).is_empty());
    }

    #[test]
    fn test_login_requires_email_and_password() {
        let form = LoginForm {
            email: String::new(),
            password: String::new(),
        };
        let fields: Vec<_> = validate_login(&form).into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["email", "password"]);
    }

    #[test]
    fn test_email_shape_accepts_subdomains_and_plus() {
        assert!(looks_like_email("dev+jobs@mail.example.co"));
        assert!(looks_like_email("a@b.c"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("user@.com"));
        assert!(!looks_like_email("user@domain."));
    }
}
