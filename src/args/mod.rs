pub mod types;
mod validators;

pub use types::*;
pub use validators::{check_non_empty, parse_download_flag};

use clap::Parser;
use std::process;

/// Parse command line arguments and run the cross-field validation
///
/// Clap exits with a usage message on missing or malformed arguments;
/// a failed cross-field check exits with status 1.
#[must_use]
pub fn args_checks() -> Args {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    args
}
