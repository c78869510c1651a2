// tests/common/mod.rs

//! Shared helpers for launcher integration tests.
//!
//! End-to-end tests run the real binary (via `CARGO_BIN_EXE_trulocal`) with
//! a private `PATH` holding fake `node` / `trulocal` shims, so no real
//! tooling is needed. A shim records its argv NUL-separated so argument
//! fidelity can be asserted exactly. Unix only; the shims are POSIX sh.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The launcher binary under test.
pub fn launcher() -> Command {
    Command::new(env!("CARGO_BIN_EXE_trulocal"))
}

/// Install an executable shim script named `name` into `dir`.
pub fn install_shim(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    let script = format!("#!/bin/sh\n{body}\n");
    fs::write(&path, script).expect("write shim script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod shim");
    path
}

/// Shim body that records `"$@"` NUL-separated into `record`.
///
/// The redirect creates `record` even for an empty argv, so the file's
/// existence doubles as proof the shim ran.
pub fn recording_body(record: &Path) -> String {
    format!(
        r#"for a in "$@"; do printf '%s\0' "$a"; done > "{}""#,
        record.display()
    )
}

/// Parse a NUL-separated argv recording, preserving empty arguments.
pub fn read_recorded_args(record: &Path) -> Vec<String> {
    let raw = fs::read(record).expect("read argv record");
    let mut args: Vec<String> = raw
        .split(|b| *b == 0)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect();
    // The trailing separator turns into one empty tail entry on split.
    if args.last().is_some_and(String::is_empty) {
        args.pop();
    }
    args
}
