use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::errors::AppError;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").unwrap());

/// Body of `/register` and `/login`. Fields are optional so a missing field
/// surfaces as a validation error rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Checked credentials, ready for lookup or hashing.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl CredentialsRequest {
    /// Presence and email format checks shared by login and registration.
    pub fn validate(self) -> Result<Credentials, AppError> {
        let email = self.email.filter(|e| !e.is_empty());
        let password = self.password.filter(|p| !p.is_empty());
        let (Some(email), Some(password)) = (email, password) else {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ));
        };
        if !is_valid_email(&email) {
            return Err(AppError::Validation("Invalid email format".to_string()));
        }
        Ok(Credentials { email, password })
    }

    /// `validate` plus the minimum password length for new accounts.
    pub fn validate_new(self) -> Result<Credentials, AppError> {
        let credentials = self.validate()?;
        if credentials.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters long"
            )));
        }
        Ok(credentials)
    }
}
