use std::{borrow::Cow, fmt::Display, process::Command};

use crate::launch_parameters::LaunchParameters;
use crate::literal::{cell_array, string_literal, vector};

/// The entry point every invocation calls.
pub const ENTRY_POINT: &str = "main";

/// Flag that puts the environment in non-interactive batch mode.
pub const BATCH_FLAG: &str = "-batch";

pub const DEFAULT_EXECUTABLE: &str = "matlab";

/// Builds `main(dataDir, resultsDir, isDev, arrays, tasks);`.
pub fn call_expression(params: &LaunchParameters) -> String {
    format!(
        "{}({}, {}, {}, {}, {});",
        ENTRY_POINT,
        string_literal(&params.data_dir),
        string_literal(&params.results_dir),
        params.is_dev,
        cell_array(&params.arrays),
        vector(&params.tasks)
    )
}

/// Wraps a statement so that the environment exits with 0 when it succeeds,
/// and prints the error report and exits with 1 when anything inside it
/// throws.
pub fn wrap_in_try_catch<T: AsRef<str>>(statement: T) -> String {
    format!(
        "try, {} catch ME, disp(getReport(ME)), exit(1), end, exit(0);",
        statement.as_ref()
    )
}

/// A fully assembled invocation of the external environment.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchCommand {
    program: String,
    script: String,
}

impl BatchCommand {
    pub fn new<T: Into<String>>(program: T, params: &LaunchParameters) -> Self {
        BatchCommand {
            program: program.into(),
            script: wrap_in_try_catch(call_expression(params)),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The script passed to the environment as its single batch argument.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// The full argument vector, program first.
    pub fn argv(&self) -> Vec<&str> {
        vec![self.program.as_str(), BATCH_FLAG, self.script.as_str()]
    }

    /// Builds a process that runs this command with inherited stdio.
    /// No shell sits in between, so the script is never re-split.
    pub fn to_process(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.arg(BATCH_FLAG).arg(&self.script);
        command
    }
}

/// Renders the argument vector with shell quoting applied, so that the
/// printed line can be pasted back into a terminal.
impl Display for BatchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let quoted = self
            .argv()
            .into_iter()
            .map(|arg| shell_escape::escape(Cow::Borrowed(arg)))
            .collect::<Vec<_>>();
        write!(f, "{}", quoted.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use crate::batch_command::{call_expression, wrap_in_try_catch, BatchCommand};
    use crate::launch_parameters::{default_arrays, default_tasks, LaunchParameters};

    fn params() -> LaunchParameters {
        LaunchParameters {
            data_dir: "./data".into(),
            results_dir: "./results".into(),
            is_dev: 1,
            arrays: vec!["benchmark2".into(), "eigenmike".into()],
            tasks: vec![1, 3, 5],
        }
    }

    #[test]
    fn call_expression_works() {
        assert_eq!(
            call_expression(&params()),
            "main('./data', './results', 1, {'benchmark2','eigenmike'}, [1 3 5]);"
        );
    }

    #[test]
    fn call_expression_contains_defaults_verbatim() {
        let params = LaunchParameters {
            arrays: default_arrays(),
            tasks: default_tasks(),
            is_dev: 0,
            ..params()
        };
        assert_eq!(
            call_expression(&params),
            "main('./data', './results', 0, {'benchmark2','eigenmike','dicit','dummy'}, [1 2 3 4 5 6]);"
        );
    }

    #[test]
    fn call_expression_escapes_quotes_in_paths() {
        let params = LaunchParameters {
            data_dir: "/tmp/it's".into(),
            ..params()
        };
        assert!(call_expression(&params).starts_with("main('/tmp/it''s', './results', "));
    }

    #[test]
    fn try_catch_wrapper_works() {
        assert_eq!(
            wrap_in_try_catch("main();"),
            "try, main(); catch ME, disp(getReport(ME)), exit(1), end, exit(0);"
        );
    }

    #[test]
    fn argv_passes_the_script_as_one_argument() {
        let command = BatchCommand::new("matlab", &params());
        assert_eq!(
            command.argv(),
            vec![
                "matlab",
                "-batch",
                "try, main('./data', './results', 1, {'benchmark2','eigenmike'}, [1 3 5]); \
                 catch ME, disp(getReport(ME)), exit(1), end, exit(0);"
            ]
        );
    }

    #[test]
    fn process_uses_the_configured_program() {
        let command = BatchCommand::new("/opt/matlab/bin/matlab", &params());
        let process = command.to_process();
        assert_eq!(process.get_program(), "/opt/matlab/bin/matlab");
        let args = process.get_args().collect::<Vec<_>>();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0], "-batch");
        assert_eq!(args[1], command.script());
    }

    #[test]
    #[cfg(unix)]
    fn display_quotes_for_the_shell() {
        let command = BatchCommand::new("matlab", &params());
        assert_eq!(
            command.to_string(),
            "matlab -batch 'try, main('\\''./data'\\'', '\\''./results'\\'', 1, \
             {'\\''benchmark2'\\'','\\''eigenmike'\\''}, [1 3 5]); \
             catch ME, disp(getReport(ME)), exit(1), end, exit(0);'"
        );
    }
}
