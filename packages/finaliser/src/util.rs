//! Utility Functions
//!
//! Identifier checks and string quoting shared by the snippet provider and the
//! finalisers.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// ASCII identifier that does not start with a digit
static VALID_IDENTIFIER_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_$][0-9a-zA-Z_$]*$").unwrap());

/// Words that cannot be used as bare property names by pre-ES5 engines
pub static RESERVED_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
        "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally", "for",
        "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "NaN",
        "new", "null", "package", "private", "protected", "public", "return", "static", "super",
        "switch", "this", "throw", "true", "try", "typeof", "undefined", "var", "void", "while",
        "with", "yield",
    ]
    .into_iter()
    .collect()
});

pub fn is_valid_identifier(name: &str) -> bool {
    VALID_IDENTIFIER_REGEXP.is_match(name)
}

pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES.contains(name)
}

/// Wrap `input` in single quotes, escaping what would end or break the literal
pub fn single_quote(input: &str) -> String {
    let mut escaped = input.replace('\\', "\\\\");
    escaped = escaped.replace('\'', "\\'");
    escaped = escaped.replace('\n', "\\n");
    escaped = escaped.replace('\r', "\\r");
    format!("'{}'", escaped)
}

/// Wrap `input` in double quotes using JSON string escaping
pub fn double_quote(input: &str) -> String {
    serde_json::to_string(input).unwrap_or_else(|_| format!("\"{}\"", input))
}
