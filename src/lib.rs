mod batch_command;
mod cli_args;
mod launch_error;
mod launch_parameters;
mod list_parser;
mod literal;
mod stdio_launcher;

pub use batch_command::{call_expression, wrap_in_try_catch, BatchCommand};
pub use cli_args::{CliArgs, USAGE};
pub use launch_error::LaunchError;
pub use launch_parameters::{
    LaunchParameters, ResolvedParameters, DEFAULT_ARRAYS, DEFAULT_TASKS,
};
pub use list_parser::{ArrayList, TaskList};
pub use literal::{cell_array, string_literal, vector};
pub use stdio_launcher::{execute, run_from_args, StdioLauncher};
