use clap::Parser;
use std::path::PathBuf;

use super::validators::{check_non_empty, parse_download_flag, validate};
use crate::utils::path_utils::check_writable_dir;

pub const DEFAULT_DATASET_URL: &str = "https://physionet.org/files/mimiciv/3.0/";

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Mirror a credentialed PhysioNet dataset locally and sync it into an S3 bucket",
    long_about = None
)]
pub struct Args {
    /// Local directory to download files into; also the source of the S3 sync
    #[arg(
        short = 'p',
        long = "localpath",
        value_name = "PATH",
        value_parser = check_writable_dir
    )]
    pub local_path: PathBuf,

    /// S3 bucket to store raw data
    #[arg(short, long, value_parser = check_non_empty)]
    pub bucket: String,

    /// S3 bucket key. Leave empty for root.
    #[arg(short, long, default_value = "")]
    pub key: String,

    /// Enables local download of files. Anything but "false" keeps it on.
    #[arg(
        short,
        long,
        value_name = "BOOL",
        default_value = "true",
        action = clap::ArgAction::Set,
        value_parser = parse_download_flag
    )]
    pub download: bool,

    /// URL mirrored by the download step
    #[arg(long, value_name = "URL", default_value = DEFAULT_DATASET_URL)]
    pub dataset_url: String,

    /// Override the wget executable path
    #[arg(long, value_name = "PATH", default_value = "wget")]
    pub wget_bin: PathBuf,

    /// Override the aws cli executable path
    #[arg(long, value_name = "PATH", default_value = "aws")]
    pub aws_bin: PathBuf,

    /// Skip the S3 sync when the download fails
    #[arg(long)]
    pub stop_on_error: bool,

    /// Exit with status 1 if any step failed
    #[arg(long)]
    pub strict_exit: bool,

    /// Print the commands that would run without executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Validate cross-field constraints clap cannot express
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are inconsistent.
    pub fn validate(&self) -> Result<(), String> {
        validate(self)
    }

    /// Whether a failed step should let later steps run
    #[must_use]
    pub fn continue_on_error(&self) -> bool {
        !self.stop_on_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Result<Args, clap::Error> {
        let dir = std::env::temp_dir();
        let mut argv = vec![
            "dataset-s3-mirror".to_string(),
            "-p".to_string(),
            dir.to_string_lossy().into_owned(),
        ];
        argv.extend(extra.iter().map(|s| (*s).to_string()));
        Args::try_parse_from(argv)
    }

    #[test]
    fn defaults_match_documented_behavior() {
        let args = parse(&["-b", "bucket"]).unwrap();
        assert_eq!(args.key, "");
        assert!(args.download);
        assert!(args.continue_on_error());
        assert!(!args.strict_exit);
        assert_eq!(args.dataset_url, DEFAULT_DATASET_URL);
        assert_eq!(args.wget_bin, PathBuf::from("wget"));
        assert_eq!(args.aws_bin, PathBuf::from("aws"));
    }

    #[test]
    fn download_flag_accepts_false_in_any_case() {
        let args = parse(&["-b", "bucket", "-d", "FALSE"]).unwrap();
        assert!(!args.download);
        let args = parse(&["-b", "bucket", "--download", "False"]).unwrap();
        assert!(!args.download);
        let args = parse(&["-b", "bucket", "-d", "no"]).unwrap();
        assert!(args.download);
    }

    #[test]
    fn bucket_is_mandatory() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn empty_bucket_is_rejected() {
        let err = parse(&["-b", ""]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn local_path_is_mandatory() {
        let err = Args::try_parse_from(["dataset-s3-mirror", "-b", "bucket"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn validate_rejects_non_http_dataset_url() {
        let args = parse(&["-b", "bucket", "--dataset-url", "ftp://example.org/"]).unwrap();
        assert!(args.validate().is_err());
        let args = parse(&["-b", "bucket"]).unwrap();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bucket_with_path() {
        let args = parse(&["-b", "bucket/raw"]).unwrap();
        assert!(args.validate().unwrap_err().contains("--key"));
    }
}
