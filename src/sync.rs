//! Upload of the local image tree to object storage.
//!
//! Shells out to the `aws` CLI:
//!
//! ```text
//! aws s3 sync <images_dir>/ s3://<bucket>/<prefix> --profile <profile>
//! ```
//!
//! Exit status `2` means the sync ran but some files were skipped; that is
//! reported as [`SyncOutcome::Partial`] rather than an error.

use crate::config::StorageConfig;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("'aws' command not found; install the AWS CLI and make sure it is on PATH")]
    CliMissing,
    #[error("local image directory not found: {0}")]
    SourceMissing(String),
    #[error("sync failed with exit code {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Synced,
    /// Completed, but some files may not have been transferred.
    Partial,
}

/// Arguments passed to `aws` (the program name itself excluded).
pub fn sync_command_args(storage: &StorageConfig, images_dir: &Path) -> Vec<String> {
    // Trailing separator so the directory contents are synced, not the directory.
    let mut source = images_dir.to_string_lossy().into_owned();
    if !source.ends_with('/') {
        source.push('/');
    }
    vec![
        "s3".to_string(),
        "sync".to_string(),
        source,
        storage.s3_uri(),
        "--profile".to_string(),
        storage.aws_profile.clone(),
    ]
}

/// Sync `images_dir` to the configured bucket.
pub fn run_sync(storage: &StorageConfig, images_dir: &Path) -> Result<SyncOutcome, SyncError> {
    if !images_dir.is_dir() {
        return Err(SyncError::SourceMissing(images_dir.display().to_string()));
    }
    let args = sync_command_args(storage, images_dir);
    log::info!("Executing: aws {}", args.join(" "));
    run_command("aws", &args)
}

fn run_command(program: &str, args: &[String]) -> Result<SyncOutcome, SyncError> {
    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(SyncError::CliMissing),
        Err(e) => return Err(e.into()),
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    for line in stdout.lines() {
        log::info!("{line}");
    }
    for line in stderr.lines() {
        log::warn!("{line}");
    }

    match output.status.code() {
        Some(0) => {
            log::info!("Sync completed successfully");
            Ok(SyncOutcome::Synced)
        }
        Some(2) => {
            log::warn!("Sync completed, but some files may not have been transferred");
            Ok(SyncOutcome::Partial)
        }
        code => Err(SyncError::Failed {
            code,
            stderr: stderr.trim().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_for_default_storage() {
        let args = sync_command_args(&StorageConfig::default(), Path::new("docs/images"));
        assert_eq!(
            args,
            vec![
                "s3",
                "sync",
                "docs/images/",
                "s3://photos-joyfulphotographs-com/website-images/",
                "--profile",
                "joyful-photos",
            ]
        );
    }

    #[test]
    fn args_keep_existing_trailing_slash() {
        let storage = StorageConfig {
            bucket: "b".to_string(),
            prefix: "p/".to_string(),
            aws_profile: "me".to_string(),
        };
        let args = sync_command_args(&storage, Path::new("imgs/"));
        assert_eq!(args[2], "imgs/");
        assert_eq!(args[3], "s3://b/p/");
    }

    #[test]
    fn missing_source_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = run_sync(&StorageConfig::default(), &tmp.path().join("nope"));
        assert!(matches!(result, Err(SyncError::SourceMissing(_))));
    }

    #[test]
    fn missing_program_is_cli_missing() {
        let result = run_command("definitely-not-a-real-aws-binary", &[]);
        assert!(matches!(result, Err(SyncError::CliMissing)));
    }

    #[cfg(unix)]
    fn sh(script: &str) -> Result<SyncOutcome, SyncError> {
        run_command("sh", &["-c".to_string(), script.to_string()])
    }

    #[cfg(unix)]
    #[test]
    fn exit_codes_map_to_outcomes() {
        assert_eq!(sh("echo uploaded").unwrap(), SyncOutcome::Synced);
        assert_eq!(sh("exit 2").unwrap(), SyncOutcome::Partial);
        match sh("echo denied >&2; exit 1") {
            Err(SyncError::Failed { code, stderr }) => {
                assert_eq!(code, Some(1));
                assert_eq!(stderr, "denied");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
