use std::path::Path;

use crate::args::Args;
use crate::interfaces::{
    CommandHelper, CredentialHelper, DefaultCommandHelper, DefaultCredentialHelper,
};
use crate::transfer::mirror::{DRY_RUN_CONFIG_PLACEHOLDER, mirror_args};
use crate::transfer::sync::sync_args;
use crate::transfer::{S3Target, StepOutcome, download_dataset, sync_to_remote};
use crate::utils::cmd_utils::display_cmd;
use crate::utils::log_utils::Logger;

/// Per-step outcome of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub download: StepOutcome,
    pub sync: StepOutcome,
}

impl RunReport {
    #[must_use]
    pub fn any_failed(&self) -> bool {
        self.download.is_failure() || self.sync.is_failure()
    }

    /// Process exit status. Failed steps only turn into a non-zero status
    /// when `strict_exit` is set.
    #[must_use]
    pub fn exit_code(&self, strict_exit: bool) -> i32 {
        i32::from(strict_exit && self.any_failed())
    }
}

/// Run the download and sync with the real tools and terminal
#[must_use]
pub fn run_app(args: &Args) -> RunReport {
    let logger = Logger::new(args.verbose);
    run_with_helpers(args, &DefaultCommandHelper, &DefaultCredentialHelper, &logger)
}

/// Download (when enabled), then sync. A failed step is logged and never
/// aborts the run unless `--stop-on-error` was given.
pub fn run_with_helpers<C: CommandHelper, K: CredentialHelper>(
    args: &Args,
    cmd_helper: &C,
    credential_helper: &K,
    logger: &Logger,
) -> RunReport {
    logger.normal("Mirror start");
    logger.normal(&format!("Download flag is set to: {}", args.download));
    if args.dry_run {
        logger.normal("Dry run: commands are printed, not executed");
    }

    let target = S3Target::new(&args.bucket, &args.key);

    let download = if args.download {
        download_step(args, cmd_helper, credential_helper, logger)
    } else {
        logger.info("Local download disabled, syncing existing files");
        StepOutcome::Skipped
    };

    let sync = if download.is_failure() && !args.continue_on_error() {
        logger.warn(&format!(
            "Skipping upload to {target} because the download failed"
        ));
        StepOutcome::Skipped
    } else {
        sync_step(args, cmd_helper, &target, logger)
    };

    let report = RunReport { download, sync };
    logger.info(&format!("Download {}, upload {}", report.download, report.sync));
    logger.normal("Mirror end");
    report
}

fn download_step<C: CommandHelper, K: CredentialHelper>(
    args: &Args,
    cmd_helper: &C,
    credential_helper: &K,
    logger: &Logger,
) -> StepOutcome {
    if args.dry_run {
        let planned = mirror_args(
            &args.dataset_url,
            &args.local_path,
            Path::new(DRY_RUN_CONFIG_PLACEHOLDER),
        );
        logger.normal(&format!(
            "Would execute: {}",
            display_cmd(&args.wget_bin, &planned)
        ));
        return StepOutcome::Succeeded;
    }

    let credentials = match credential_helper.collect() {
        Ok(credentials) => credentials,
        Err(e) => {
            logger.error(&format!("Error collecting credentials: {e}"));
            return StepOutcome::Failed;
        }
    };

    logger.normal(&format!(
        "Starting local download of files to {}",
        args.local_path.display()
    ));
    let result = download_dataset(
        cmd_helper,
        &args.wget_bin,
        &credentials,
        &args.local_path,
        &args.dataset_url,
        logger,
    );
    drop(credentials);

    match result {
        Ok(()) => {
            logger.normal(&format!(
                "Local download of files complete {}",
                args.local_path.display()
            ));
            StepOutcome::Succeeded
        }
        Err(e) => {
            logger.error(&format!("Error during download: {e}"));
            StepOutcome::Failed
        }
    }
}

fn sync_step<C: CommandHelper>(
    args: &Args,
    cmd_helper: &C,
    target: &S3Target,
    logger: &Logger,
) -> StepOutcome {
    if args.dry_run {
        let planned = sync_args(&args.local_path, target);
        logger.normal(&format!(
            "Would execute: {}",
            display_cmd(&args.aws_bin, &planned)
        ));
        return StepOutcome::Succeeded;
    }

    logger.normal(&format!("Starting upload to {target}"));
    match sync_to_remote(cmd_helper, &args.aws_bin, &args.local_path, target, logger) {
        Ok(()) => {
            logger.normal(&format!("Upload complete to {target}"));
            StepOutcome::Succeeded
        }
        Err(e) => {
            logger.error(&format!("Error during upload: {e}"));
            StepOutcome::Failed
        }
    }
}
