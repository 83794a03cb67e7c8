use std::process::ExitCode;

use clap::Parser;
use month1::{Cli, run};

fn main() -> ExitCode {
    // Writing to a closed pipe (`month1 events | head`) should end the
    // process quietly instead of panicking inside println!
    #[cfg(unix)]
    restore_default_sigpipe();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(unix)]
fn restore_default_sigpipe() {
    // SAFETY: called once at startup before any other thread exists
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
