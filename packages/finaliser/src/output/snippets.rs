//! Code Snippets
//!
//! Formatting primitives derived once from the generated-code options: the
//! whitespace unit, line and statement separators, the declaration keyword and
//! the function templates used for getter thunks and loop callbacks.

use crate::config::GeneratedCodeOptions;
use crate::util::{double_quote, is_reserved_name, is_valid_identifier};

/// Options for [`CodeSnippets::get_function_intro`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionIntroOptions<'a> {
    pub is_async: bool,
    pub name: Option<&'a str>,
}

/// Indentation used when the body of a direct-return function goes on its own line
#[derive(Debug, Clone, Copy)]
pub struct LineBreakIndent<'a> {
    pub base: &'a str,
    pub t: &'a str,
}

/// Options for [`CodeSnippets::get_direct_return_function`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectReturnOptions<'a> {
    pub function_return: bool,
    pub line_break_indent: Option<LineBreakIndent<'a>>,
    pub name: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnippets {
    /// Optional whitespace (`_`)
    pub space: &'static str,
    /// Line separator
    pub n: &'static str,
    /// Statement separator
    pub s: &'static str,
    /// Declaration keyword, `const` or `var`
    pub cnst: &'static str,
    arrow_functions: bool,
    reserved_names_as_props: bool,
}

impl CodeSnippets {
    pub fn new(options: &GeneratedCodeOptions) -> Self {
        let (space, n, s) = if options.compact {
            ("", "", "")
        } else {
            (" ", "\n", ";")
        };
        CodeSnippets {
            space,
            n,
            s,
            cnst: if options.const_bindings { "const" } else { "var" },
            arrow_functions: options.arrow_functions,
            reserved_names_as_props: options.reserved_names_as_props,
        }
    }

    pub fn arrow_functions(&self) -> bool {
        self.arrow_functions
    }

    /// `function name (a, b) `
    pub fn get_non_arrow_function_intro(
        &self,
        parameters: &[&str],
        options: FunctionIntroOptions<'_>,
    ) -> String {
        format!(
            "{}function{}{}({}){}",
            if options.is_async { "async " } else { "" },
            options.name.map(|name| format!(" {}", name)).unwrap_or_default(),
            self.space,
            parameters.join(format!(",{}", self.space).as_str()),
            self.space
        )
    }

    /// Start of a function expression up to its body
    pub fn get_function_intro(&self, parameters: &[&str], options: FunctionIntroOptions<'_>) -> String {
        if !self.arrow_functions {
            return self.get_non_arrow_function_intro(parameters, options);
        }
        let single_parameter = parameters.len() == 1;
        let async_string = if options.is_async {
            format!("async{}", if single_parameter { " " } else { self.space })
        } else {
            String::new()
        };
        let declaration = options
            .name
            .map(|name| format!("{} {}{}={}", self.cnst, name, self.space, self.space))
            .unwrap_or_default();
        let parameter_list = if single_parameter {
            parameters[0].to_string()
        } else {
            format!("({})", parameters.join(format!(",{}", self.space).as_str()))
        };
        format!(
            "{}{}{}{}=>{}",
            declaration, async_string, parameter_list, self.space, self.space
        )
    }

    /// Left and right parts surrounding the returned expression of a function
    /// whose body is a single return
    pub fn get_direct_return_function(
        &self,
        parameters: &[&str],
        options: DirectReturnOptions<'_>,
    ) -> (String, String) {
        let intro = self.get_function_intro(
            parameters,
            FunctionIntroOptions {
                is_async: false,
                name: options.name,
            },
        );
        let body_break = options
            .line_break_indent
            .map(|indent| format!("{}{}{}", self.n, indent.base, indent.t));
        let closing_break = options
            .line_break_indent
            .map(|indent| format!("{}{}", self.n, indent.base));

        if self.arrow_functions {
            let left = format!("{}{}", intro, body_break.unwrap_or_default());
            let right = format!(
                "{}{}",
                if options.name.is_some() { ";" } else { "" },
                closing_break.unwrap_or_default()
            );
            (left, right)
        } else {
            let left = format!(
                "{}{{{}{}",
                intro,
                body_break.unwrap_or_else(|| self.space.to_string()),
                if options.function_return { "return " } else { "" }
            );
            let right = format!(
                "{}{}}}",
                self.s,
                closing_break.unwrap_or_else(|| self.space.to_string())
            );
            (left, right)
        }
    }

    pub fn is_valid_property_name(&self, name: &str) -> bool {
        if self.reserved_names_as_props {
            is_valid_identifier(name)
        } else {
            !is_reserved_name(name) && is_valid_identifier(name)
        }
    }

    /// `.name` or `["name"]`
    pub fn get_property_access(&self, name: &str) -> String {
        if self.is_valid_property_name(name) {
            format!(".{}", name)
        } else {
            format!("[{}]", double_quote(name))
        }
    }
}

impl Default for CodeSnippets {
    fn default() -> Self {
        CodeSnippets::new(&GeneratedCodeOptions::default())
    }
}
