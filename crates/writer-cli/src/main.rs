//! # writer
//!
//! Writes an argument-supplied string to an argument-supplied file path,
//! creating or truncating the target, and logs the attempt and outcome.
//!
//! Success is silent; every failure is reported on standard error and
//! logged at error severity, and the process exits 1.

use std::ffi::OsString;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::error;

/// Write a string to a file, creating or truncating it
#[derive(Parser)]
#[command(name = "writer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path of the file to write
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// String to write to the file
    #[arg(value_name = "STRING", allow_hyphen_values = true)]
    string: OsString,
}

fn main() -> ExitCode {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    writer_core::logging::init();

    let span = tracing::info_span!("writer", pid = std::process::id());
    let _guard = span.enter();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_outcome(err),
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    writer_core::write_file(&cli.file, cli.string.as_bytes())?;
    Ok(())
}

/// Usage mistakes exit 1, not clap's default 2; help and version exit 0.
fn report_parse_outcome(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            let _ = err.print();
            let observed = std::env::args_os().count().saturating_sub(1);
            error!(observed, "invalid number of arguments");
            ExitCode::FAILURE
        }
    }
}
