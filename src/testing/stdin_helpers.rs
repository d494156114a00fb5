use zeroize::Zeroizing;

use crate::errors::{MirrorError, Result};
use crate::read_interactive_input::{SecretReader, StdinHelper};

/// Test implementation that returns a predefined response
pub struct TestStdinHelper {
    pub response: String,
}

impl StdinHelper for TestStdinHelper {
    fn read_line(&self, _label: &str) -> Result<String> {
        Ok(self.response.clone())
    }
}

/// Test secret source; `None` behaves like the user pressing Ctrl+C
pub struct TestSecretReader {
    pub response: Option<String>,
}

impl SecretReader for TestSecretReader {
    fn read_secret(&self, _label: &str) -> Result<Zeroizing<String>> {
        self.response
            .clone()
            .map(Zeroizing::new)
            .ok_or(MirrorError::PromptCancelled)
    }
}
