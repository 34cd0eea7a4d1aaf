use serde::{Deserialize, Serialize};

use storefront_core::{Validate, ValidationErrors};

/// Login form fields (transport-agnostic).
///
/// Exactly `username` and `password`; any other field fails deserialization.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

// Keeps the password out of logs.
impl core::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}
