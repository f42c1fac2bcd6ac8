use std::{error::Error, fmt::Display, io};

/// Exit status for a command line that couldn't be parsed.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Exit status for every other launcher-side failure.
pub const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Debug)]
pub enum LaunchError {
    /// The command line was malformed. Holds the parser's rendered message.
    Usage(String),
    /// One or more required flags were absent, named by flag.
    MissingParameters(Vec<&'static str>),
    /// The external environment couldn't be started at all.
    Spawn { program: String, error: io::Error },
    /// The external environment ran but reported failure.
    ExternalProcess { exit_code: i32 },
}

impl LaunchError {
    /// The status this launcher should exit with when failing with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Usage(_) => USAGE_EXIT_CODE,
            LaunchError::MissingParameters(_) => FAILURE_EXIT_CODE,
            LaunchError::Spawn { .. } => FAILURE_EXIT_CODE,
            // A child can only land here with a non-zero code, but never
            // let a failure masquerade as success.
            LaunchError::ExternalProcess { exit_code } => {
                if *exit_code == 0 {
                    FAILURE_EXIT_CODE
                } else {
                    *exit_code
                }
            }
        }
    }
}

impl Error for LaunchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LaunchError::Spawn { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchError::Usage(message) => write!(f, "{}", message.trim_end()),
            LaunchError::MissingParameters(flags) => {
                let flags = flags
                    .iter()
                    .map(|flag| format!("--{flag}"))
                    .collect::<Vec<_>>();
                write!(f, "Missing required parameter(s): {}", flags.join(", "))
            }
            LaunchError::Spawn { program, error } => {
                write!(f, "Failed to start '{}': {}", program, error)
            }
            LaunchError::ExternalProcess { exit_code } => {
                write!(f, "Batch process failed with exit code {}", exit_code)
            }
        }
    }
}
