pub mod args;
pub mod credentials;
pub mod errors;
pub mod interfaces;
pub mod orchestrator;
pub mod read_interactive_input;
pub mod transfer;
pub mod testing {
    pub mod stdin_helpers;
}
pub mod utils {
    pub mod cmd_utils;
    pub mod log_utils;
    pub mod path_utils;
}

pub use args::Args;
pub use orchestrator::{RunReport, run_app, run_with_helpers};
