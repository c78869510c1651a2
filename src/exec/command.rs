// src/exec/command.rs

//! Launch plan construction.
//!
//! Builds a pure description of the child invocation (program, arguments,
//! working directory) from a [`LaunchTarget`], so tests can assert on the
//! exact invocation without spawning anything, then converts it into a
//! `tokio::process::Command` wired per the spawn contract.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

use crate::resolve::LaunchTarget;

/// Interpreter used to execute the local CLI bundle.
pub const NODE_COMMAND: &str = "node";

/// Installed CLI name resolved from `PATH` on non-Windows platforms.
pub const FALLBACK_COMMAND: &str = "trulocal";

/// Installed CLI name on Windows. npm installs it as a `.cmd` shim, which
/// only a shell can run, so it goes through `cmd /C`.
pub const FALLBACK_COMMAND_WINDOWS: &str = "trulocal.cmd";

/// Which resolution branch a plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchKind {
    LocalCli,
    Installed,
}

/// A fully determined child invocation.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub kind: LaunchKind,
    pub program: OsString,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
}

/// Name of the installed CLI on the current platform.
pub fn fallback_command() -> &'static str {
    if cfg!(windows) {
        FALLBACK_COMMAND_WINDOWS
    } else {
        FALLBACK_COMMAND
    }
}

/// Build the child invocation for a resolved target.
///
/// Forwarded arguments are appended verbatim, in order; the working
/// directory is always the launcher's project root.
pub fn build_plan(
    target: &LaunchTarget,
    forwarded: &[OsString],
    project_root: &Path,
) -> LaunchPlan {
    match target {
        LaunchTarget::LocalCli(artifact) => {
            let mut args = Vec::with_capacity(forwarded.len() + 1);
            args.push(artifact.clone().into_os_string());
            args.extend(forwarded.iter().cloned());
            LaunchPlan {
                kind: LaunchKind::LocalCli,
                program: OsString::from(NODE_COMMAND),
                args,
                cwd: project_root.to_path_buf(),
            }
        }
        LaunchTarget::Installed => {
            // Arguments stay tokenized through `cmd /C` rather than being
            // joined into a shell string; the child sees the forwarded list
            // exactly as given.
            let (program, mut args) = if cfg!(windows) {
                (
                    OsString::from("cmd"),
                    vec![
                        OsString::from("/C"),
                        OsString::from(FALLBACK_COMMAND_WINDOWS),
                    ],
                )
            } else {
                (OsString::from(FALLBACK_COMMAND), Vec::new())
            };
            args.extend(forwarded.iter().cloned());
            LaunchPlan {
                kind: LaunchKind::Installed,
                program,
                args,
                cwd: project_root.to_path_buf(),
            }
        }
    }
}

impl LaunchPlan {
    /// Convert into a ready-to-spawn command.
    ///
    /// Spawn contract: stdin, stdout and stderr are inherited from the
    /// launcher, the working directory is the launcher's project root, and
    /// the child sees the launcher's environment unmodified.
    pub fn into_command(self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .current_dir(&self.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}
