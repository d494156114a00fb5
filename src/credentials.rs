use std::fmt;

use zeroize::Zeroizing;

use crate::errors::{MirrorError, Result};

pub const USERNAME_ENV: &str = "DATASET_MIRROR_USERNAME";
pub const PASSWORD_ENV: &str = "DATASET_MIRROR_PASSWORD";

/// Dataset login, alive only for the download step. The password buffer is
/// wiped when the value is dropped.
pub struct Credentials {
    username: String,
    password: Zeroizing<String>,
}

impl Credentials {
    /// The username is trimmed. The password is kept byte for byte, so values
    /// the wgetrc parser would alter are refused instead of sent changed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` for an empty field, line breaks in either
    /// field, or a password with leading or trailing whitespace.
    pub fn new(username: String, password: Zeroizing<String>) -> Result<Self> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(invalid("username must not be empty"));
        }
        if has_line_break(&username) {
            return Err(invalid("username must not contain line breaks"));
        }
        if password.is_empty() {
            return Err(invalid("password must not be empty"));
        }
        if has_line_break(&password) {
            return Err(invalid("password must not contain line breaks"));
        }
        if password.trim() != password.as_str() {
            return Err(invalid("password must not start or end with whitespace"));
        }
        Ok(Self { username, password })
    }

    /// Build credentials from injected variables, for unattended runs.
    ///
    /// Returns `None` unless both variables are present and non-empty.
    pub fn from_lookup<F>(lookup: F) -> Option<Result<Self>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = lookup(USERNAME_ENV).filter(|v| !v.is_empty())?;
        let password = Zeroizing::new(lookup(PASSWORD_ENV).filter(|v| !v.is_empty())?);
        Some(Self::new(username, password))
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn invalid(reason: &str) -> MirrorError {
    MirrorError::InvalidCredentials(reason.to_string())
}

fn has_line_break(s: &str) -> bool {
    s.contains('\n') || s.contains('\r')
}
