//! Stand-in for `wget` and `aws` in end-to-end tests.
//!
//! Every invocation appends one line to the file named by `MOCK_TOOL_LOG`:
//! the arguments joined by spaces, with the value after `--config` replaced
//! by the login found in that file. Exits 1 when any argument equals
//! `MOCK_TOOL_FAIL_ON`.

use std::env;
use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::Write;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("mock tool error: {err}");
            std::process::exit(3);
        }
    }
}

fn run() -> Result<i32, Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return Err("missing arguments".into());
    }

    let mut rendered = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        rendered.push(arg.clone());
        if arg == "--config" {
            let path = iter.next().ok_or("missing value for --config")?;
            rendered.push(describe_config(path)?);
        }
    }
    let line = rendered.join(" ");
    println!("mock tool: {line}");

    if let Ok(log) = env::var("MOCK_TOOL_LOG") {
        let mut file = OpenOptions::new().create(true).append(true).open(log)?;
        writeln!(file, "{line}")?;
    }

    let fail_on = env::var("MOCK_TOOL_FAIL_ON").ok();
    if fail_on.is_some_and(|token| args.iter().any(|a| *a == token)) {
        eprintln!("mock tool: failing as requested");
        return Ok(1);
    }
    Ok(0)
}

fn describe_config(path: &str) -> Result<String, Box<dyn Error>> {
    let body = fs::read_to_string(path)?;
    let value = |key: &str| {
        body.lines()
            .find_map(|l| l.strip_prefix(key))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };
    let user = value("user = ");
    let has_password = !value("password = ").is_empty();
    Ok(format!("<user={user} password_set={has_password}>"))
}
