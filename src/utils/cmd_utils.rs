use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use crate::errors::{MirrorError, Result};

/// Execute a command without capturing output; the tool writes straight to our terminal
///
/// # Errors
///
/// Returns `Spawn` if the program cannot be launched and `CommandFailed` on a
/// non-zero exit.
pub fn exec_cmd(program: &Path, args: &[String]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| MirrorError::Spawn {
            program: program.display().to_string(),
            source,
        })?;

    if !status.success() {
        return Err(MirrorError::CommandFailed {
            program: program.display().to_string(),
            status,
        });
    }

    Ok(())
}

/// Render a command line for logs, quoting arguments that contain whitespace
#[must_use]
pub fn display_cmd(program: &Path, args: &[String]) -> String {
    let mut parts = vec![quote(program.as_os_str())];
    parts.extend(args.iter().map(|a| quote(OsStr::new(a))));
    parts.join(" ")
}

fn quote(arg: &OsStr) -> String {
    let s = arg.to_string_lossy();
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        format!("'{}'", s.replace('\'', r"'\''"))
    } else {
        s.into_owned()
    }
}
