//! Authenticated recursive download of the dataset tree with wget.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use zeroize::Zeroizing;

use crate::credentials::Credentials;
use crate::errors::Result;
use crate::interfaces::CommandHelper;
use crate::utils::cmd_utils::display_cmd;
use crate::utils::log_utils::Logger;

/// Shown in place of the credentials file when nothing is executed
pub const DRY_RUN_CONFIG_PLACEHOLDER: &str = "<credentials-wgetrc>";

/// wget arguments: recurse, skip unchanged by timestamp, resume partial
/// files, never ascend to the parent directory.
#[must_use]
pub fn mirror_args(url: &str, destination: &Path, config_file: &Path) -> Vec<String> {
    vec![
        "--config".to_string(),
        config_file.display().to_string(),
        "-r".to_string(),
        "-N".to_string(),
        "-c".to_string(),
        "-np".to_string(),
        "-P".to_string(),
        destination.display().to_string(),
        url.to_string(),
    ]
}

/// Write a private wgetrc holding the login. The file is deleted when the
/// returned handle is dropped.
///
/// # Errors
///
/// Returns an IO error if the temp file cannot be created or written.
pub fn write_credentials_wgetrc(credentials: &Credentials) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(".dataset-mirror-")
        .suffix(".wgetrc")
        .tempfile()?;
    let body = Zeroizing::new(format!(
        "user = {}\npassword = {}\n",
        credentials.username(),
        credentials.password()
    ));
    file.write_all(body.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Mirror `url` into `destination` with `wget_bin`.
///
/// # Errors
///
/// Returns an error if the credentials file cannot be written, the tool
/// cannot be launched, or it exits non-zero.
pub fn download_dataset<C: CommandHelper>(
    cmd_helper: &C,
    wget_bin: &Path,
    credentials: &Credentials,
    destination: &Path,
    url: &str,
    logger: &Logger,
) -> Result<()> {
    let config = write_credentials_wgetrc(credentials)?;
    let args = mirror_args(url, destination, config.path());
    logger.debug(&format!("Executing: {}", display_cmd(wget_bin, &args)));
    let result = cmd_helper.exec_cmd(wget_bin, args);
    drop(config);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::MockCommandHelper;
    use std::sync::{Arc, Mutex};

    fn creds() -> Credentials {
        Credentials::new("jdoe".to_string(), Zeroizing::new("s3cr3t pw".to_string())).unwrap()
    }

    #[test]
    fn args_carry_mirror_flags_in_order() {
        let args = mirror_args(
            "https://physionet.org/files/mimiciv/3.0/",
            Path::new("/data/mimic"),
            Path::new("/tmp/x.wgetrc"),
        );
        assert_eq!(
            args,
            [
                "--config",
                "/tmp/x.wgetrc",
                "-r",
                "-N",
                "-c",
                "-np",
                "-P",
                "/data/mimic",
                "https://physionet.org/files/mimiciv/3.0/"
            ]
        );
    }

    #[test]
    fn wgetrc_holds_login() {
        let file = write_credentials_wgetrc(&creds()).unwrap();
        let body = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(body, "user = jdoe\npassword = s3cr3t pw\n");
    }

    #[test]
    fn password_stays_off_the_command_line_and_file_is_removed() {
        let seen: Arc<Mutex<Option<(Vec<String>, std::path::PathBuf)>>> =
            Arc::new(Mutex::new(None));
        let seen_in_mock = Arc::clone(&seen);

        let mut cmd = MockCommandHelper::new();
        cmd.expect_exec_cmd().times(1).returning(move |_, args| {
            let config = std::path::PathBuf::from(&args[1]);
            assert!(config.is_file(), "credentials file must exist while wget runs");
            *seen_in_mock.lock().unwrap() = Some((args, config));
            Ok(())
        });

        download_dataset(
            &cmd,
            Path::new("wget"),
            &creds(),
            Path::new("/data/mimic"),
            "https://example.org/files/",
            &Logger::new(0),
        )
        .unwrap();

        let (args, config) = seen.lock().unwrap().take().unwrap();
        assert!(args.iter().all(|a| !a.contains("s3cr3t")));
        assert!(!config.exists(), "credentials file must be gone after the run");
    }
}
