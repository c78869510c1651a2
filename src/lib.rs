// src/lib.rs

pub mod errors;
pub mod exec;
pub mod logging;
pub mod resolve;

use std::ffi::OsString;

use anyhow::Result;
use tracing::info;

use crate::exec::ChildExit;
use crate::resolve::{LaunchTarget, LauncherPaths};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - install-location discovery, once at startup
/// - local-vs-installed target resolution
/// - child spawn with inherited stdio and the project root as cwd
/// - termination capture for the caller to propagate
pub async fn run(args: Vec<OsString>) -> Result<ChildExit> {
    let paths = LauncherPaths::discover()?;

    let target = resolve::resolve_target_from_env(&paths);
    match &target {
        LaunchTarget::LocalCli(artifact) => {
            info!(artifact = %artifact.display(), "running local TrueLocal CLI build");
        }
        LaunchTarget::Installed => {
            info!(command = exec::fallback_command(), "running trulocal from PATH");
        }
    }

    let plan = exec::build_plan(&target, &args, &paths.project_root);
    let exit = exec::run_to_completion(plan).await?;
    Ok(exit)
}
