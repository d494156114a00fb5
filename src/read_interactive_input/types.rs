use std::io::Write;

use reedline::{DefaultPrompt, Reedline, Signal};
use zeroize::Zeroizing;

use crate::errors::{MirrorError, Result};

/// Trait for reading a visible line of input, makes testing easier
pub trait StdinHelper {
    /// Print `label` and read one line, from stdin or a test double
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be read or the user cancels.
    fn read_line(&self, label: &str) -> Result<String>;
}

/// Trait for reading a secret without echoing it
pub trait SecretReader {
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or the user cancels.
    fn read_secret(&self, label: &str) -> Result<Zeroizing<String>>;
}

/// Default implementation that reads from the terminal with a line editor
pub struct DefaultStdinHelper;

impl StdinHelper for DefaultStdinHelper {
    fn read_line(&self, label: &str) -> Result<String> {
        print!("{label}");
        // flush stdout so prompt for sure displays
        std::io::stdout().flush()?;

        let mut editor = Reedline::create();

        match editor.read_line(&DefaultPrompt) {
            Ok(Signal::Success(buffer)) => Ok(buffer),
            Ok(Signal::CtrlC | Signal::CtrlD) => Err(MirrorError::PromptCancelled),
            Err(err) => Err(MirrorError::Prompt(format!("Error reading line: {err}"))),
        }
    }
}

/// Reads the secret in raw terminal mode so keystrokes are never echoed
pub struct TerminalSecretReader;

impl SecretReader for TerminalSecretReader {
    fn read_secret(&self, label: &str) -> Result<Zeroizing<String>> {
        super::secret::read_secret_from_terminal(label)
    }
}
