//! Login form rules.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Login form payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(custom(function = required_email))]
    pub email: String,

    #[validate(custom(function = required_password))]
    pub password: String,
}

/// `local@domain.tld` with no whitespace in any segment.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => {
            !name.is_empty()
                && !tld.is_empty()
                && !domain.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn required_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(field_error("required", "email is required"));
    }
    if !is_valid_email(email) {
        return Err(field_error("email", "email format is invalid"));
    }
    Ok(())
}

fn required_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(field_error("required", "password is required"));
    }
    if password.len() < 6 {
        return Err(field_error(
            "length",
            "password must be at least 6 characters",
        ));
    }
    Ok(())
}
