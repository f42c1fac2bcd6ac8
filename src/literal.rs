/// Renders a value as a single-quoted char literal.
///
/// Embedded quotes are doubled, which is how the environment escapes
/// them, so the value can never terminate the literal early.
pub fn string_literal<T: AsRef<str>>(value: T) -> String {
    format!("'{}'", value.as_ref().replace('\'', "''"))
}

/// Renders strings as a cell array literal, e.g. `['a','b']` becomes
/// `{'a','b'}`.
pub fn cell_array<T: AsRef<str>>(strings: &[T]) -> String {
    let items = strings.iter().map(string_literal).collect::<Vec<_>>();
    format!("{{{}}}", items.join(","))
}

/// Renders numbers as a row vector literal, e.g. `[1,2,3]` becomes `[1 2 3]`.
pub fn vector(numbers: &[i64]) -> String {
    let items = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>();
    format!("[{}]", items.join(" "))
}
