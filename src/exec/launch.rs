// src/exec/launch.rs

//! Child process spawn and wait.

use tracing::{debug, info};

use crate::errors::{LaunchError, Result};
use crate::exec::command::{LaunchKind, LaunchPlan};
use crate::exec::status::ChildExit;

/// Spawn the planned child process and wait for it to finish.
///
/// There is no timeout: the launcher suspends until the child exits. Spawn
/// and wait failures both surface as the branch-appropriate
/// [`LaunchError`].
pub async fn run_to_completion(plan: LaunchPlan) -> Result<ChildExit> {
    let kind = plan.kind;
    debug!(
        program = %plan.program.to_string_lossy(),
        args = ?plan.args,
        cwd = %plan.cwd.display(),
        "spawning child process"
    );

    let mut command = plan.into_command();
    let mut child = command.spawn().map_err(|err| launch_error(kind, err))?;
    info!(pid = child.id(), "child process started");

    let status = child.wait().await.map_err(|err| launch_error(kind, err))?;

    let exit = ChildExit::from_status(status);
    info!(?exit, "child process finished");
    Ok(exit)
}

fn launch_error(kind: LaunchKind, err: std::io::Error) -> LaunchError {
    match kind {
        LaunchKind::LocalCli => LaunchError::LocalCli(err),
        LaunchKind::Installed => LaunchError::Installed(err),
    }
}
