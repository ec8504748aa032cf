//! FILENAME: app/src/main.rs
// PURPOSE: Entry point of the `calc` binary.

use std::process::ExitCode;

fn main() -> ExitCode {
    app_lib::run()
}
