use crate::credentials::Credentials;
use crate::errors::Result;
use mockall::automock;
use std::path::Path;

/// Interface for launching the external transfer tools, mocked in tests
#[automock]
pub trait CommandHelper {
    fn exec_cmd(&self, program: &Path, args: Vec<String>) -> Result<()>;
}

/// Interface for obtaining the dataset credentials, mocked in tests
#[automock]
pub trait CredentialHelper {
    fn collect(&self) -> Result<Credentials>;
}

/// Default implementation of `CommandHelper` that runs the real process
pub struct DefaultCommandHelper;

impl CommandHelper for DefaultCommandHelper {
    fn exec_cmd(&self, program: &Path, args: Vec<String>) -> Result<()> {
        crate::utils::cmd_utils::exec_cmd(program, &args)
    }
}

/// Default implementation of `CredentialHelper`: environment first, then the terminal
pub struct DefaultCredentialHelper;

impl CredentialHelper for DefaultCredentialHelper {
    fn collect(&self) -> Result<Credentials> {
        if let Some(from_env) = Credentials::from_lookup(|name| std::env::var(name).ok()) {
            return from_env;
        }
        crate::read_interactive_input::prompt_credentials(
            &crate::read_interactive_input::DefaultStdinHelper,
            &crate::read_interactive_input::TerminalSecretReader,
        )
    }
}
