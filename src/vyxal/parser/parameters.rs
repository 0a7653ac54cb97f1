//! Identifier sanitizing and function signature extraction

use once_cell::sync::Lazy;
use regex::Regex;

use crate::vyxal::ast::ParameterSpec;
use crate::vyxal::lexer::Token;

/// Splits a function signature into name and parameter segments
pub const SIGNATURE_SEPARATOR: char = ':';

static NON_IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z_]").unwrap());

fn joined(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.text.as_str()).collect()
}

/// Reduce text to ASCII letters and `_`
pub fn sanitize(text: &str) -> String {
    NON_IDENTIFIER.replace_all(text, "").into_owned()
}

/// The sanitized identifier spelled by a branch, used for loop variables and
/// function references
pub fn variable_name(tokens: &[Token]) -> String {
    sanitize(&joined(tokens))
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(char::is_numeric)
}

/// Classify one signature segment after the function name
pub fn parameter_spec(segment: &str) -> ParameterSpec {
    if segment == "*" {
        ParameterSpec::Variadic
    } else if is_numeric(segment) {
        ParameterSpec::Fixed(segment.to_string())
    } else {
        ParameterSpec::Named(sanitize(segment))
    }
}

/// Split a `name:param:...` branch into the verbatim name and its parameters
pub fn parse_signature(tokens: &[Token]) -> (String, Vec<ParameterSpec>) {
    let text = joined(tokens);
    let mut segments = text.split(SIGNATURE_SEPARATOR);
    let name = segments.next().unwrap_or_default().to_string();
    let parameters = segments.map(parameter_spec).collect();
    (name, parameters)
}

/// Flat form of [`parse_signature`]: the name followed by every parameter
pub fn process_parameters(tokens: &[Token]) -> Vec<String> {
    let (name, parameters) = parse_signature(tokens);
    std::iter::once(name)
        .chain(parameters.iter().map(|p| p.as_str().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vyxal::lexer::tokenize;

    #[test]
    fn test_process_parameters() {
        assert_eq!(
            process_parameters(&tokenize("f:a:3:*")),
            vec!["f", "a", "3", "*"]
        );
    }

    #[test]
    fn test_name_only() {
        assert_eq!(process_parameters(&tokenize("foo")), vec!["foo"]);
        assert_eq!(process_parameters(&[]), vec![""]);
    }

    #[test]
    fn test_named_parameters_are_sanitized() {
        let (name, parameters) = parse_signature(&tokenize("g:x1y:12:*:_z"));
        assert_eq!(name, "g");
        assert_eq!(
            parameters,
            vec![
                ParameterSpec::Named("xy".to_string()),
                ParameterSpec::Fixed("12".to_string()),
                ParameterSpec::Variadic,
                ParameterSpec::Named("_z".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_segment_is_an_empty_name() {
        assert_eq!(parameter_spec(""), ParameterSpec::Named(String::new()));
    }

    #[test]
    fn test_variable_name() {
        assert_eq!(variable_name(&tokenize("branchA")), "branchA");
        assert_eq!(variable_name(&tokenize("x 1_y")), "x_y");
        assert_eq!(variable_name(&[]), "");
    }
}
