// src/resolve/target.rs

//! Selection between the local CLI build and the installed fallback.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::resolve::paths::LauncherPaths;

/// Environment override for the local CLI bundle path. A relative value is
/// resolved against the caller's working directory; an empty value counts
/// as unset.
pub const LOCAL_CLI_ENV: &str = "TRUELOCAL_LOCAL_CLI";

/// Which executable the launcher will hand control to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    /// Locally built CLI bundle, run through the node interpreter.
    LocalCli(PathBuf),
    /// Installed `trulocal`, resolved from the system search path.
    Installed,
}

/// The local CLI path to probe: the override when set and non-empty,
/// otherwise the default sibling-project candidate.
pub fn candidate_path(paths: &LauncherPaths, override_path: Option<&OsStr>, cwd: &Path) -> PathBuf {
    match override_path.filter(|raw| !raw.is_empty()) {
        Some(raw) => {
            let raw = Path::new(raw);
            if raw.is_absolute() {
                raw.to_path_buf()
            } else {
                cwd.join(raw)
            }
        }
        None => paths.default_candidate.clone(),
    }
}

/// Pick the launch target: a candidate that exists on disk wins; anything
/// else falls back to the installed command. A missing candidate is not an
/// error, and no other candidate is probed.
pub fn resolve_target(
    paths: &LauncherPaths,
    override_path: Option<&OsStr>,
    cwd: &Path,
) -> LaunchTarget {
    let candidate = candidate_path(paths, override_path, cwd);
    let exists = candidate.exists();
    debug!(
        candidate = %candidate.display(),
        exists,
        overridden = override_path.is_some(),
        "probed local CLI candidate"
    );

    if exists {
        LaunchTarget::LocalCli(candidate)
    } else {
        LaunchTarget::Installed
    }
}

/// Resolve using the real process environment: the `TRUELOCAL_LOCAL_CLI`
/// variable and the current working directory.
pub fn resolve_target_from_env(paths: &LauncherPaths) -> LaunchTarget {
    let override_path = env::var_os(LOCAL_CLI_ENV);
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_target(paths, override_path.as_deref(), &cwd)
}
