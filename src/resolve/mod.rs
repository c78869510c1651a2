// src/resolve/mod.rs

//! Target resolution for the launcher.
//!
//! - [`paths`] derives the install-location layout (project root, default
//!   local CLI candidate) from the running executable, once at startup.
//! - [`target`] picks between the local CLI build and the installed
//!   fallback, honouring the `TRUELOCAL_LOCAL_CLI` override.

pub mod paths;
pub mod target;

pub use paths::LauncherPaths;
pub use target::{
    LOCAL_CLI_ENV, LaunchTarget, candidate_path, resolve_target, resolve_target_from_env,
};
