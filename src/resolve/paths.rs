// src/resolve/paths.rs

//! Filesystem layout derived from the launcher's own install location.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Paths derived once at startup from the running executable's location.
///
/// Expected layout, matching the repository the launcher ships in:
///
/// ```text
/// <project_root>/
///   scripts/trulocal            <- this binary (install_dir = scripts/)
/// <project_root>/../TrueLocal/dist/cli.js   <- default local CLI candidate
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherPaths {
    /// Directory containing the launcher executable.
    pub install_dir: PathBuf,
    /// One level above the install dir; every child runs with this cwd.
    pub project_root: PathBuf,
    /// Default local CLI bundle: two levels above the install dir, then the
    /// sibling project's build output.
    pub default_candidate: PathBuf,
}

impl LauncherPaths {
    /// Derive the layout from the running executable.
    ///
    /// Called once at startup; the result is passed down explicitly rather
    /// than held in global state.
    pub fn discover() -> Result<Self> {
        let exe = env::current_exe().context("locating the trulocal launcher executable")?;
        Ok(Self::from_executable(&exe))
    }

    /// Pure derivation from an executable path.
    pub fn from_executable(exe: &Path) -> Self {
        let install_dir = match exe.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let project_root = ancestor_or_self(&install_dir, 1);
        let default_candidate = ancestor_or_self(&install_dir, 2)
            .join("TrueLocal")
            .join("dist")
            .join("cli.js");

        Self {
            install_dir,
            project_root,
            default_candidate,
        }
    }
}

/// Walk `levels` parents up, stopping at the filesystem root (or at a bare
/// relative component) instead of running out of path.
fn ancestor_or_self(path: &Path, levels: usize) -> PathBuf {
    let mut current = path;
    for _ in 0..levels {
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent,
            _ => break,
        }
    }
    current.to_path_buf()
}
