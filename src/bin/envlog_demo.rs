#![deny(unsafe_code)]

//! Demonstration binary: initialize from `ENVLOG` and emit records from a
//! handful of components.
//!
//! ```text
//! ENVLOG=info envlog-demo
//! ENVLOG=debug,myapp.database=trace envlog-demo
//! ENVLOG=warn,myapp=info envlog-demo
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(error) = envlog::try_init() {
        eprintln!("envlog-demo: {error}");
        return ExitCode::FAILURE;
    }

    log::debug!(target: "myapp", "application starting (debug)");
    log::info!(target: "myapp", "application initialized (info)");

    log::debug!(target: "myapp.database", "connection pool created (debug)");
    log::info!(target: "myapp.database", "database connected (info)");

    log::debug!(target: "myapp.api", "api server starting (debug)");
    log::info!(target: "myapp.api", "api server listening on port 8080 (info)");

    log::debug!(target: "somelib", "library function called (debug)");
    log::info!(target: "somelib", "library initialized (info)");
    log::warn!(target: "somelib", "library warning (warning)");

    println!("try rerunning with different ENVLOG values:");
    println!("  ENVLOG=info envlog-demo");
    println!("  ENVLOG=debug envlog-demo");
    println!("  ENVLOG=warn,myapp=debug envlog-demo");
    println!("  ENVLOG=warn,myapp.database=debug envlog-demo");

    ExitCode::SUCCESS
}
