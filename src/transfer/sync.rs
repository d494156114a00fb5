use std::fmt;
use std::path::Path;

use crate::errors::Result;
use crate::interfaces::CommandHelper;
use crate::utils::cmd_utils::display_cmd;
use crate::utils::log_utils::Logger;

/// Bucket plus optional key prefix; an empty key addresses the bucket root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Target {
    bucket: String,
    key: String,
}

impl S3Target {
    #[must_use]
    pub fn new(bucket: &str, key: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            key: key.trim_start_matches('/').to_string(),
        }
    }
}

impl fmt::Display for S3Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

#[must_use]
pub fn sync_args(local_path: &Path, target: &S3Target) -> Vec<String> {
    vec![
        "s3".to_string(),
        "sync".to_string(),
        local_path.display().to_string(),
        target.to_string(),
    ]
}

/// One-way `aws s3 sync` of `local_path` into `target`. AWS credentials come
/// from the CLI's own configuration chain.
///
/// # Errors
///
/// Returns an error if the tool cannot be launched or exits non-zero.
pub fn sync_to_remote<C: CommandHelper>(
    cmd_helper: &C,
    aws_bin: &Path,
    local_path: &Path,
    target: &S3Target,
    logger: &Logger,
) -> Result<()> {
    let args = sync_args(local_path, target);
    logger.debug(&format!("Executing: {}", display_cmd(aws_bin, &args)));
    cmd_helper.exec_cmd(aws_bin, args)
}
