// src/exec/status.rs

//! Termination mirroring: reproduce the child's exit in the launcher.

use std::process::ExitStatus;

/// How the child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// Exited with a code. A status carrying no usable code maps to 1.
    Code(i32),
    /// Terminated by a signal.
    #[cfg(unix)]
    Signal(i32),
}

impl ChildExit {
    /// Classify a wait status. A terminating signal wins over the exit
    /// code.
    pub fn from_status(status: ExitStatus) -> ChildExit {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;

            if let Some(signo) = status.signal() {
                return ChildExit::Signal(signo);
            }
        }

        ChildExit::Code(status.code().unwrap_or(1))
    }

    /// Mirror the child's termination onto this process. Never returns.
    ///
    /// An exit code is passed through as-is. A signal is re-raised against
    /// the launcher itself so the parent observes the same termination.
    pub fn propagate(self) -> ! {
        match self {
            ChildExit::Code(code) => std::process::exit(code),
            #[cfg(unix)]
            ChildExit::Signal(signo) => reraise(signo),
        }
    }
}

/// Re-raise `signo` against the current process, falling back to exit 1 if
/// the signal cannot be re-raised or does not terminate us.
#[cfg(unix)]
fn reraise(signo: i32) -> ! {
    use nix::sys::signal::{self, SigHandler, Signal};

    if let Ok(sig) = Signal::try_from(signo) {
        // Rust starts processes with SIGPIPE ignored; reset the disposition
        // so a re-raised SIGPIPE actually terminates.
        unsafe {
            let _ = signal::signal(sig, SigHandler::SigDfl);
        }
        let _ = signal::raise(sig);
    }

    std::process::exit(1)
}
