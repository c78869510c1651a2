// src/main.rs

use std::ffi::OsString;

use trulocal::exec::ChildExit;
use trulocal::{logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(exit) => exit.propagate(),
        Err(err) => {
            eprintln!("trulocal error: {err:?}");
            std::process::exit(1);
        }
    }
}

/// Everything after `argv[0]` is forwarded to the child verbatim; the
/// launcher itself takes no flags.
async fn run_main() -> anyhow::Result<ChildExit> {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    logging::init_logging()?;
    run(args).await
}
