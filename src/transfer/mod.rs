use std::fmt;

pub mod mirror;
pub mod sync;

pub use mirror::download_dataset;
pub use sync::{S3Target, sync_to_remote};

/// Result of one pipeline step, as reported at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    Failed,
    Skipped,
}

impl StepOutcome {
    #[must_use]
    pub fn is_failure(self) -> bool {
        self == StepOutcome::Failed
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepOutcome::Succeeded => "succeeded",
            StepOutcome::Failed => "failed",
            StepOutcome::Skipped => "skipped",
        };
        f.write_str(s)
    }
}
