// src/exec/mod.rs

//! Child process execution.
//!
//! - [`command`] builds the launch plan (program, arguments, working
//!   directory) for a resolved target and converts it into a
//!   `tokio::process::Command` per the spawn contract.
//! - [`launch`] spawns the child and waits for it, with no timeout.
//! - [`status`] mirrors the child's termination (exit code or signal) back
//!   onto the launcher process.

pub mod command;
pub mod launch;
pub mod status;

pub use command::{LaunchKind, LaunchPlan, build_plan, fallback_command};
pub use launch::run_to_completion;
pub use status::ChildExit;
