use std::str::FromStr;

/// The list of array configurations passed via `--arrays`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayList(pub Vec<String>);

/// The list of task identifiers passed via `--tasks`.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskList(pub Vec<i64>);

/// Splits a comma-separated flag value into its tokens, failing if any
/// token is empty (which also covers an entirely empty value).
fn split_tokens(value: &str) -> Result<Vec<&str>, String> {
    let tokens = value.split(',').collect::<Vec<_>>();
    if let Some(index) = tokens.iter().position(|token| token.is_empty()) {
        return Err(format!(
            "empty entry at position {} in '{}'",
            index + 1,
            value
        ));
    }
    Ok(tokens)
}

/// Rejects characters that can't appear inside a single-line quoted literal.
pub fn parse_text(value: &str) -> Result<String, String> {
    if let Some(ch) = value.chars().find(|ch| ch.is_control()) {
        return Err(format!(
            "value contains an unsupported control character ({:?})",
            ch
        ));
    }
    Ok(value.to_owned())
}

impl FromStr for ArrayList {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let names = split_tokens(value)?
            .into_iter()
            .map(parse_text)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ArrayList(names))
    }
}

impl FromStr for TaskList {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let tasks = split_tokens(value)?
            .into_iter()
            .map(|token| {
                token
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| format!("'{}' is not an integer task identifier", token))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TaskList(tasks))
    }
}

#[cfg(test)]
mod tests {
    use crate::list_parser::{parse_text, ArrayList, TaskList};

    #[test]
    fn it_parses_array_lists_in_order() {
        assert_eq!(
            "eigenmike,benchmark2".parse::<ArrayList>(),
            Ok(ArrayList(vec!["eigenmike".into(), "benchmark2".into()]))
        );
        assert_eq!(
            "dummy".parse::<ArrayList>(),
            Ok(ArrayList(vec!["dummy".into()]))
        );
    }

    #[test]
    fn it_trims_whitespace_around_tasks() {
        assert_eq!(
            " 1, 3 ,5".parse::<TaskList>(),
            Ok(TaskList(vec![1, 3, 5]))
        );
    }

    #[test]
    fn it_keeps_array_names_verbatim() {
        assert_eq!(
            "dicit , dummy".parse::<ArrayList>(),
            Ok(ArrayList(vec!["dicit ".into(), " dummy".into()]))
        );
    }

    #[test]
    fn it_parses_negative_and_signed_tasks() {
        assert_eq!("-1,+2".parse::<TaskList>(), Ok(TaskList(vec![-1, 2])));
    }

    #[test]
    fn it_rejects_empty_entries() {
        for value in ["", ",", "a,,b", "a,"] {
            assert!(value.parse::<ArrayList>().is_err(), "parsing '{value}'");
        }
        for value in ["", "1,,2", "3,", "1, ,2"] {
            assert!(value.parse::<TaskList>().is_err(), "parsing '{value}'");
        }
    }

    #[test]
    fn it_rejects_non_integer_tasks() {
        for value in ["x", "1,x", "1.5", "1 2"] {
            assert!(value.parse::<TaskList>().is_err(), "parsing '{value}'");
        }
    }

    #[test]
    fn it_rejects_control_characters() {
        assert!(parse_text("./data\n").is_err());
        assert!("bench\tmark".parse::<ArrayList>().is_err());
        assert_eq!(parse_text("./my data"), Ok("./my data".to_string()));
    }
}
