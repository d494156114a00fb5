mod secret;
mod types;

pub use self::secret::{KeyOutcome, apply_key};
pub use self::types::{DefaultStdinHelper, SecretReader, StdinHelper, TerminalSecretReader};

pub use crate::testing::stdin_helpers::{TestSecretReader, TestStdinHelper};

use crate::credentials::Credentials;
use crate::errors::Result;

pub const USERNAME_PROMPT: &str = "Enter your PhysioNet username: ";
pub const PASSWORD_PROMPT: &str = "Enter your PhysioNet password: ";

/// Ask for the username on a visible line, then for the password with echo off
///
/// # Errors
///
/// Propagates read failures, cancellation, and invalid credential values.
pub fn prompt_credentials<S: StdinHelper, R: SecretReader>(
    stdin: &S,
    secrets: &R,
) -> Result<Credentials> {
    let username = stdin.read_line(USERNAME_PROMPT)?;
    let password = secrets.read_secret(PASSWORD_PROMPT)?;
    Credentials::new(username, password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MirrorError;

    #[test]
    fn prompts_build_credentials() {
        let stdin = TestStdinHelper {
            response: "jdoe\n".to_string(),
        };
        let secrets = TestSecretReader {
            response: Some("hunter2".to_string()),
        };
        let creds = prompt_credentials(&stdin, &secrets).unwrap();
        assert_eq!(creds.username(), "jdoe");
        assert_eq!(creds.password(), "hunter2");
    }

    #[test]
    fn cancelled_secret_prompt_is_an_error() {
        let stdin = TestStdinHelper {
            response: "jdoe".to_string(),
        };
        let secrets = TestSecretReader { response: None };
        let err = prompt_credentials(&stdin, &secrets).unwrap_err();
        assert!(matches!(err, MirrorError::PromptCancelled));
    }

    #[test]
    fn blank_username_is_rejected() {
        let stdin = TestStdinHelper {
            response: String::new(),
        };
        let secrets = TestSecretReader {
            response: Some("pw".to_string()),
        };
        assert!(prompt_credentials(&stdin, &secrets).is_err());
    }

    #[test]
    fn empty_secret_is_rejected_like_the_env_path() {
        let stdin = TestStdinHelper {
            response: "jdoe".to_string(),
        };
        let secrets = TestSecretReader {
            response: Some(String::new()),
        };
        let err = prompt_credentials(&stdin, &secrets).unwrap_err();
        assert!(matches!(err, MirrorError::InvalidCredentials(_)));
    }
}
