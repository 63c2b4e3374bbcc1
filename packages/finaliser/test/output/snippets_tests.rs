//! Code Snippets Tests
//!
//! Formatting primitives for each generated-code preset

use bundle_finaliser::output::snippets::{
    DirectReturnOptions, FunctionIntroOptions, LineBreakIndent,
};
use bundle_finaliser::{CodeSnippets, GeneratedCodeOptions};

fn es5() -> CodeSnippets {
    CodeSnippets::new(&GeneratedCodeOptions::es5())
}

fn es2015() -> CodeSnippets {
    CodeSnippets::new(&GeneratedCodeOptions::es2015())
}

fn compact(options: GeneratedCodeOptions) -> CodeSnippets {
    CodeSnippets::new(&GeneratedCodeOptions {
        compact: true,
        ..options
    })
}

mod separators {
    use super::*;

    #[test]
    fn should_use_whitespace_when_not_compact() {
        let snippets = es5();
        assert_eq!(snippets.space, " ");
        assert_eq!(snippets.n, "\n");
        assert_eq!(snippets.s, ";");
        assert_eq!(snippets.cnst, "var");
    }

    #[test]
    fn should_drop_whitespace_when_compact() {
        let snippets = compact(GeneratedCodeOptions::es2015());
        assert_eq!(snippets.space, "");
        assert_eq!(snippets.n, "");
        assert_eq!(snippets.s, "");
        assert_eq!(snippets.cnst, "const");
    }
}

mod function_intro {
    use super::*;

    #[test]
    fn should_render_function_keyword() {
        let snippets = es5();
        assert_eq!(
            snippets.get_function_intro(&["k"], FunctionIntroOptions::default()),
            "function (k) "
        );
        assert_eq!(
            snippets.get_function_intro(
                &["a", "b"],
                FunctionIntroOptions {
                    is_async: true,
                    name: Some("load")
                }
            ),
            "async function load (a, b) "
        );
    }

    #[test]
    fn should_render_arrows() {
        let snippets = es2015();
        assert_eq!(
            snippets.get_function_intro(&["k"], FunctionIntroOptions::default()),
            "k => "
        );
        assert_eq!(
            snippets.get_function_intro(&[], FunctionIntroOptions::default()),
            "() => "
        );
        assert_eq!(
            snippets.get_function_intro(
                &["a", "b"],
                FunctionIntroOptions {
                    is_async: true,
                    name: Some("load")
                }
            ),
            "const load = async (a, b) => "
        );
    }

    #[test]
    fn should_render_compact_function_keyword() {
        let snippets = compact(GeneratedCodeOptions::es5());
        assert_eq!(
            snippets.get_function_intro(&["a", "b"], FunctionIntroOptions::default()),
            "function(a,b)"
        );
    }
}

mod direct_return_function {
    use super::*;

    fn getter() -> DirectReturnOptions<'static> {
        DirectReturnOptions {
            function_return: true,
            line_break_indent: None,
            name: None,
        }
    }

    #[test]
    fn should_wrap_in_a_function_body() {
        let (left, right) = es5().get_direct_return_function(&[], getter());
        assert_eq!(format!("{}x{}", left, right), "function () { return x; }");
    }

    #[test]
    fn should_use_an_expression_arrow() {
        let (left, right) = es2015().get_direct_return_function(&[], getter());
        assert_eq!(format!("{}x{}", left, right), "() => x");
    }

    #[test]
    fn should_break_lines_when_asked() {
        let options = DirectReturnOptions {
            line_break_indent: Some(LineBreakIndent {
                base: "\t",
                t: "\t",
            }),
            ..getter()
        };
        let (left, right) = es5().get_direct_return_function(&["a"], options);
        assert_eq!(
            format!("{}x{}", left, right),
            "function (a) {\n\t\treturn x;\n\t}"
        );
        let (left, right) = es2015().get_direct_return_function(&["a"], options);
        assert_eq!(format!("{}x{}", left, right), "a => \n\t\tx\n\t");
    }

    #[test]
    fn should_terminate_named_arrows() {
        let options = DirectReturnOptions {
            name: Some("get"),
            ..getter()
        };
        let (left, right) = es2015().get_direct_return_function(&[], options);
        assert_eq!(format!("{}x{}", left, right), "const get = () => x;");
    }

    #[test]
    fn should_render_compact_getters() {
        let (left, right) = compact(GeneratedCodeOptions::es5()).get_direct_return_function(&[], getter());
        assert_eq!(format!("{}x{}", left, right), "function(){return x}");
    }
}

mod property_access {
    use super::*;

    #[test]
    fn should_use_dot_access_for_identifiers() {
        assert_eq!(es5().get_property_access("foo"), ".foo");
        assert_eq!(es5().get_property_access("$_1"), ".$_1");
        assert_eq!(es5().get_property_access("default"), ".default");
    }

    #[test]
    fn should_bracket_other_names() {
        assert_eq!(es5().get_property_access("1a"), "[\"1a\"]");
        assert_eq!(es5().get_property_access("a-b"), "[\"a-b\"]");
        assert_eq!(es5().get_property_access("a\"b"), "[\"a\\\"b\"]");
    }

    #[test]
    fn should_bracket_reserved_names_when_disallowed() {
        let snippets = CodeSnippets::new(&GeneratedCodeOptions {
            reserved_names_as_props: false,
            ..GeneratedCodeOptions::es5()
        });
        assert_eq!(snippets.get_property_access("default"), "[\"default\"]");
        assert_eq!(snippets.get_property_access("foo"), ".foo");
    }
}
