use std::ffi::OsString;
use std::process::ExitStatus;
use std::sync::mpsc::{channel, Receiver};

use clap::{error::ErrorKind, Parser};
use colored::*;

use crate::batch_command::BatchCommand;
use crate::cli_args::{CliArgs, USAGE};
use crate::launch_error::LaunchError;

const SEPARATOR: &str = "==============================================";

/// Parses the given command line (program name first) and runs the
/// launcher, returning the status the process should exit with.
pub fn run_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CliArgs::try_parse_from(args) {
        Ok(args) => StdioLauncher::new(args).run(),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                // Help and version output go to stdout and aren't failures.
                if let Err(print_err) = err.print() {
                    eprintln!("Error: {:?}", print_err);
                    return 1;
                }
                0
            }
            _ => {
                let err = LaunchError::Usage(err.to_string());
                show_error(&err);
                err.exit_code()
            }
        },
    }
}

/// Runs one launch against the real stdio streams.
pub struct StdioLauncher {
    args: CliArgs,
}

impl StdioLauncher {
    pub fn new(args: CliArgs) -> Self {
        StdioLauncher { args }
    }

    pub fn run(&self) -> i32 {
        match self.run_impl() {
            Ok(()) => 0,
            Err(err) => {
                show_error(&err);
                err.exit_code()
            }
        }
    }

    fn run_impl(&self) -> Result<(), LaunchError> {
        let resolved = self.args.resolve_parameters();

        // Echo before validating, so users see what was understood even
        // when something required is missing.
        println!("{}", resolved);

        let params = resolved.validate()?;
        let command = BatchCommand::new(self.args.executable.as_str(), &params);

        println!("\n{}", "Executing batch command:".bold());
        println!("{}", command);
        println!("\n{}\n", SEPARATOR);

        if self.args.dry_run {
            println!("{}", "Dry run, not executing.".yellow());
            return Ok(());
        }

        let (tx, rx) = channel();
        if let Err(err) = ctrlc::set_handler(move || {
            let _ = tx.send(());
        }) {
            eprintln!(
                "{}",
                format!("WARNING: Failed to set Ctrl-C handler ({}).", err).yellow()
            );
        }

        execute(&command, &rx)
    }
}

/// Runs the command with inherited stdio and waits for it to finish.
///
/// While waiting, Ctrl-C is left for the child to act on (it shares our
/// terminal). `interrupts` receives a message per Ctrl-C, and we only
/// note that one happened.
pub fn execute(command: &BatchCommand, interrupts: &Receiver<()>) -> Result<(), LaunchError> {
    let status = command
        .to_process()
        .status()
        .map_err(|error| LaunchError::Spawn {
            program: command.program().to_owned(),
            error,
        })?;

    if interrupts.try_recv().is_ok() {
        eprintln!(
            "{}",
            "CTRL-C pressed, batch process has exited.".yellow()
        );
    }

    match exit_code_of(status) {
        0 => Ok(()),
        exit_code => Err(LaunchError::ExternalProcess { exit_code }),
    }
}

fn exit_code_of(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = status.signal() {
        128 + signal
    } else if status.core_dumped() {
        255
    } else {
        1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> i32 {
    1
}

fn show_error(err: &LaunchError) {
    match err {
        LaunchError::Usage(_) => {
            eprintln!("{}", err);
            println!("{}", USAGE);
        }
        LaunchError::MissingParameters(_) => {
            eprintln!("{}", err.to_string().red());
            println!("{}", USAGE);
        }
        LaunchError::Spawn { .. } | LaunchError::ExternalProcess { .. } => {
            eprintln!("{}", err.to_string().red());
        }
    }
}
