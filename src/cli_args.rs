use clap::Parser;

use crate::batch_command::DEFAULT_EXECUTABLE;
use crate::launch_parameters::ResolvedParameters;
use crate::list_parser::{parse_text, ArrayList, TaskList};

pub const USAGE: &str = "Usage:
  run_main --data_dir <path> --results_dir <path> --is_dev <0|1> [--arrays a1,a2,a3] [--tasks t1,t2,t3]

Example:
  run_main --data_dir ./data --results_dir ./results --is_dev 1 --arrays benchmark2,eigenmike --tasks 1,3,5";

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    args_override_self = true,
    infer_long_args = true
)]
pub struct CliArgs {
    /// Directory containing the input data.
    #[arg(long = "data_dir", value_name = "PATH", value_parser = parse_text)]
    pub data_dir: Option<String>,

    /// Directory that results are written to.
    #[arg(long = "results_dir", value_name = "PATH", value_parser = parse_text)]
    pub results_dir: Option<String>,

    /// Development mode flag, usually 0 or 1.
    #[arg(long = "is_dev", value_name = "0|1", allow_negative_numbers = true)]
    pub is_dev: Option<i64>,

    /// Comma-separated array configurations [default: benchmark2,eigenmike,dicit,dummy]
    #[arg(long = "arrays", value_name = "A1,A2,...")]
    pub arrays: Option<ArrayList>,

    /// Comma-separated task identifiers [default: 1,2,3,4,5,6]
    #[arg(long = "tasks", value_name = "T1,T2,...", allow_hyphen_values = true)]
    pub tasks: Option<TaskList>,

    /// Program used to run the batch command.
    #[arg(
        long = "matlab",
        value_name = "PROGRAM",
        env = "MATLAB_EXECUTABLE",
        default_value = DEFAULT_EXECUTABLE
    )]
    pub executable: String,

    /// Print the batch command without running it.
    #[arg(long = "dry_run")]
    pub dry_run: bool,
}

impl CliArgs {
    /// Applies list defaults. Required values stay optional here so that
    /// they can be echoed before being validated.
    pub fn resolve_parameters(&self) -> ResolvedParameters {
        ResolvedParameters::new(
            self.data_dir.clone(),
            self.results_dir.clone(),
            self.is_dev,
            self.arrays.clone().map(|list| list.0),
            self.tasks.clone().map(|list| list.0),
        )
    }
}
