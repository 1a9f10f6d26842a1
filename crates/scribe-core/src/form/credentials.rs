//! Login and signup credentials.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScribeError};
use crate::form::FormBuffer;

/// Email/password pair used by both the login and the signup forms.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl FormBuffer for Credentials {
    const NAME: &'static str = "credentials";

    fn field_names() -> &'static [&'static str] {
        &["email", "password"]
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "email" => self.email = value.to_string(),
            "password" => self.password = value.to_string(),
            _ => {
                return Err(ScribeError::UnknownField {
                    form: Self::NAME,
                    field: name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn is_blank(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}
