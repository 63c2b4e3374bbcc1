//! Property Definitions
//!
//! Renders one property of the export surface either as a plain assignment or
//! as an enumerable getter that re-reads its source on every access.

use crate::output::snippets::{CodeSnippets, DirectReturnOptions};
use crate::util::single_quote;

/// Loop variable of the wildcard copy loop
pub const LOOP_VARIABLE: &str = "k";

/// How a forwarded value reaches the export surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Copied once at initialisation
    Static(String),
    /// Read through a getter on every access
    LiveGetter(String),
}

impl Binding {
    pub fn new(expression: impl Into<String>, needs_live_binding: bool) -> Self {
        if needs_live_binding {
            Binding::LiveGetter(expression.into())
        } else {
            Binding::Static(expression.into())
        }
    }

    pub fn expression(&self) -> &str {
        match self {
            Binding::Static(expression) | Binding::LiveGetter(expression) => expression,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Binding::LiveGetter(_))
    }
}

/// Key of the defined property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKey<'a> {
    Name(&'a str),
    /// The current key of the wildcard copy loop
    LoopVariable,
}

impl PropertyKey<'_> {
    fn access(&self, snippets: &CodeSnippets) -> String {
        match self {
            PropertyKey::Name(name) => snippets.get_property_access(name),
            PropertyKey::LoopVariable => format!("[{}]", LOOP_VARIABLE),
        }
    }

    fn literal(&self) -> String {
        match self {
            PropertyKey::Name(name) => single_quote(name),
            PropertyKey::LoopVariable => LOOP_VARIABLE.to_string(),
        }
    }
}

/// Render `binding` onto `exports` under `key`, without a trailing separator.
/// `depth` is the indentation level of the statement itself.
pub fn define_property(
    key: PropertyKey<'_>,
    binding: &Binding,
    snippets: &CodeSnippets,
    indent: &str,
    depth: usize,
) -> String {
    let (sp, n) = (snippets.space, snippets.n);
    match binding {
        Binding::Static(expression) => {
            format!("exports{}{sp}={sp}{expression}", key.access(snippets))
        }
        Binding::LiveGetter(expression) => {
            let (left, right) = snippets.get_direct_return_function(
                &[],
                DirectReturnOptions {
                    function_return: true,
                    line_break_indent: None,
                    name: None,
                },
            );
            let outer = indent.repeat(depth);
            let inner = indent.repeat(depth + 1);
            format!(
                "Object.defineProperty(exports,{sp}{key},{sp}{{{n}{inner}enumerable:{sp}true,{n}{inner}get:{sp}{left}{expression}{right}{n}{outer}}})",
                key = key.literal(),
            )
        }
    }
}

/// Copy of the current loop key from `source` onto `exports`
pub fn define_loop_property(
    source: &str,
    needs_live_binding: bool,
    snippets: &CodeSnippets,
    indent: &str,
) -> String {
    let binding = Binding::new(format!("{}[{}]", source, LOOP_VARIABLE), needs_live_binding);
    define_property(PropertyKey::LoopVariable, &binding, snippets, indent, 1)
}
