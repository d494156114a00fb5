use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Failed to execute '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{program}' exited with non-zero status: {status}")]
    CommandFailed {
        program: String,
        status: std::process::ExitStatus,
    },

    #[error("Credential prompt error: {0}")]
    Prompt(String),

    #[error("Prompt cancelled by user")]
    PromptCancelled,

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MirrorError>;
