// src/errors.rs

//! Crate-wide error types.
//!
//! Falling back from a missing local build to the installed CLI is not an
//! error and has no variant here; the only true failures are a child that
//! cannot be started or awaited, one variant per launch branch so the
//! message names what was being run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Failed to run local trulocal CLI: {0}")]
    LocalCli(std::io::Error),

    #[error("Failed to run trulocal from PATH: {0}")]
    Installed(std::io::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, LaunchError>;
