use serde::{Deserialize, Serialize};

use crate::validate::required;
use crate::CoreError;

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Result<Self, CoreError> {
        let username = required("username", username)?;
        if password.is_empty() {
            return Err(CoreError::InvalidInput("password is required".into()));
        }
        Ok(Self {
            username,
            password: password.to_string(),
        })
    }
}

// Keep passwords out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub password_confirm: String,
}

impl Registration {
    pub fn new(username: &str, password: &str, password_confirm: &str) -> Result<Self, CoreError> {
        let Credentials { username, password } = Credentials::new(username, password)?;
        if password != password_confirm {
            return Err(CoreError::InvalidInput("passwords do not match".into()));
        }
        Ok(Self {
            username,
            password,
            password_confirm: password_confirm.to_string(),
        })
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Response of both auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_requires_matching_passwords() {
        assert!(Registration::new("ada", "secret", "secret").is_ok());
        let err = Registration::new("ada", "secret", "secreT").unwrap_err();
        assert_eq!(err, CoreError::InvalidInput("passwords do not match".into()));
    }

    #[test]
    fn registration_serializes_confirm_in_camel_case() {
        let body = Registration::new("ada", "pw", "pw").unwrap();
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["passwordConfirm"], "pw");
    }

    #[test]
    fn credentials_require_both_fields() {
        assert!(Credentials::new("", "pw").is_err());
        assert!(Credentials::new("ada", "").is_err());
    }

    #[test]
    fn debug_hides_password() {
        let creds = Credentials::new("ada", "hunter2").unwrap();
        let out = format!("{creds:?}");
        assert!(out.contains("ada"));
        assert!(!out.contains("hunter2"));
    }
}
