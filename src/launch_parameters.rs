use std::fmt::Display;

use crate::launch_error::LaunchError;

pub const DEFAULT_ARRAYS: [&str; 4] = ["benchmark2", "eigenmike", "dicit", "dummy"];

pub const DEFAULT_TASKS: [i64; 6] = [1, 2, 3, 4, 5, 6];

/// Everything read off the command line, with list defaults applied but
/// before checking that the required values are present.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameters {
    pub data_dir: Option<String>,
    pub results_dir: Option<String>,
    pub is_dev: Option<i64>,
    pub arrays: Vec<String>,
    pub tasks: Vec<i64>,
}

/// A complete parameter set for one invocation of `main`.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchParameters {
    pub data_dir: String,
    pub results_dir: String,
    pub is_dev: i64,
    pub arrays: Vec<String>,
    pub tasks: Vec<i64>,
}

pub fn default_arrays() -> Vec<String> {
    DEFAULT_ARRAYS.iter().map(|name| name.to_string()).collect()
}

pub fn default_tasks() -> Vec<i64> {
    DEFAULT_TASKS.to_vec()
}

impl ResolvedParameters {
    pub fn new(
        data_dir: Option<String>,
        results_dir: Option<String>,
        is_dev: Option<i64>,
        arrays: Option<Vec<String>>,
        tasks: Option<Vec<i64>>,
    ) -> Self {
        ResolvedParameters {
            data_dir,
            results_dir,
            is_dev,
            arrays: arrays.unwrap_or_else(default_arrays),
            tasks: tasks.unwrap_or_else(default_tasks),
        }
    }

    /// Checks that every required value is present, reporting all of the
    /// missing ones at once.
    pub fn validate(self) -> Result<LaunchParameters, LaunchError> {
        let mut missing = vec![];
        if self.data_dir.is_none() {
            missing.push("data_dir");
        }
        if self.results_dir.is_none() {
            missing.push("results_dir");
        }
        if self.is_dev.is_none() {
            missing.push("is_dev");
        }
        match (self.data_dir, self.results_dir, self.is_dev) {
            (Some(data_dir), Some(results_dir), Some(is_dev)) => Ok(LaunchParameters {
                data_dir,
                results_dir,
                is_dev,
                arrays: self.arrays,
                tasks: self.tasks,
            }),
            _ => Err(LaunchError::MissingParameters(missing)),
        }
    }
}

fn or_none<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|value| value.to_string())
        .unwrap_or_else(|| "None".to_string())
}

/// The human-readable echo of what was parsed, one line per parameter
/// in a fixed order.
impl Display for ResolvedParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Parsed parameters:")?;
        writeln!(f, "data_dir    = {}", or_none(&self.data_dir))?;
        writeln!(f, "results_dir = {}", or_none(&self.results_dir))?;
        writeln!(f, "is_dev      = {}", or_none(&self.is_dev))?;
        writeln!(f, "arrays      = {:?}", self.arrays)?;
        write!(f, "tasks       = {:?}", self.tasks)
    }
}
