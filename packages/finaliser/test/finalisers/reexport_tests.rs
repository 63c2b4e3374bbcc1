//! Re-exported Import Name Tests
//!
//! Which expression is read for a forwarded name, per dependency kind and interop

use bundle_finaliser::chunk::ExportName;
use bundle_finaliser::finalisers::get_reexported_import_name;
use bundle_finaliser::{ChunkDependency, CodeSnippets, FinaliserError, GetInterop, InteropType};

fn resolve(
    dependency: &ChunkDependency,
    imported: &str,
    external_live_bindings: bool,
    interop: &dyn GetInterop,
) -> Result<String, FinaliserError> {
    get_reexported_import_name(
        dependency,
        &ExportName::from(imported),
        external_live_bindings,
        interop,
        &CodeSnippets::default(),
    )
}

fn external_foo() -> ChunkDependency {
    ChunkDependency::external("foo", "foo")
        .with_default_variable("foo__default")
        .with_namespace_variable("foo__namespace")
}

mod default_import {
    use super::*;

    #[test]
    fn should_read_the_default_helper_property_with_live_bindings() {
        let dep = external_foo();
        assert_eq!(
            resolve(&dep, "default", true, &InteropType::Auto).unwrap(),
            "foo__default.default"
        );
        assert_eq!(
            resolve(&dep, "default", true, &InteropType::Compat).unwrap(),
            "foo__default.default"
        );
    }

    #[test]
    fn should_read_the_default_helper_value_without_live_bindings() {
        let dep = external_foo();
        assert_eq!(
            resolve(&dep, "default", false, &InteropType::Auto).unwrap(),
            "foo__default"
        );
    }

    #[test]
    fn should_read_the_module_property_for_es_modules() {
        let dep = external_foo();
        assert_eq!(
            resolve(&dep, "default", false, &InteropType::EsModule).unwrap(),
            "foo.default"
        );
    }

    #[test]
    fn should_read_the_module_value_for_default_interop() {
        let dep = external_foo();
        assert_eq!(
            resolve(&dep, "default", true, &InteropType::Default).unwrap(),
            "foo"
        );
        assert_eq!(
            resolve(&dep, "default", true, &InteropType::DefaultOnly).unwrap(),
            "foo"
        );
    }

    #[test]
    fn should_not_need_a_default_variable_without_helper() {
        let dep = ChunkDependency::external("foo", "foo");
        assert_eq!(
            resolve(&dep, "default", true, &InteropType::EsModule).unwrap(),
            "foo.default"
        );
    }

    #[test]
    fn should_ask_the_resolver_for_the_dependency_id() {
        let dep = ChunkDependency::external("foo", "foo-id").with_default_variable("foo__default");
        let interop = |id: &str| {
            if id == "foo-id" {
                InteropType::Auto
            } else {
                InteropType::Default
            }
        };
        assert_eq!(
            resolve(&dep, "default", false, &interop).unwrap(),
            "foo__default"
        );
    }

    #[test]
    fn should_fail_when_the_helper_variable_is_missing() {
        let dep = ChunkDependency::external("foo", "foo");
        assert_eq!(
            resolve(&dep, "default", true, &InteropType::Auto),
            Err(FinaliserError::MissingDefaultVariable {
                id: "foo".to_string()
            })
        );
    }

    #[test]
    fn should_read_siblings_by_their_mode() {
        let named = ChunkDependency::sibling("chunk", "./chunk.js");
        let default_only = ChunkDependency::sibling("chunk", "./chunk.js").with_named_exports_mode(false);
        assert_eq!(
            resolve(&named, "default", true, &InteropType::Auto).unwrap(),
            "chunk.default"
        );
        assert_eq!(
            resolve(&default_only, "default", true, &InteropType::Auto).unwrap(),
            "chunk"
        );
    }
}

mod namespace_import {
    use super::*;

    #[test]
    fn should_wrap_default_only_siblings() {
        let dep = ChunkDependency::sibling("chunk", "./chunk.js")
            .with_named_exports_mode(false)
            .with_namespace_variable("chunk__namespace");
        assert_eq!(
            resolve(&dep, "*", true, &InteropType::Default).unwrap(),
            "chunk__namespace"
        );
    }

    #[test]
    fn should_read_named_siblings_directly() {
        let dep = ChunkDependency::sibling("chunk", "./chunk.js");
        assert_eq!(
            resolve(&dep, "*", true, &InteropType::Default).unwrap(),
            "chunk"
        );
    }

    #[test]
    fn should_wrap_externals_with_a_namespace_helper() {
        let dep = external_foo();
        for interop in [
            InteropType::Auto,
            InteropType::Compat,
            InteropType::Default,
            InteropType::DefaultOnly,
        ] {
            assert_eq!(resolve(&dep, "*", true, &interop).unwrap(), "foo__namespace");
        }
        assert_eq!(resolve(&dep, "*", true, &InteropType::EsModule).unwrap(), "foo");
    }

    #[test]
    fn should_fail_when_the_namespace_variable_is_missing() {
        let dep = ChunkDependency::sibling("chunk", "./chunk.js").with_named_exports_mode(false);
        assert_eq!(
            resolve(&dep, "*", true, &InteropType::Default),
            Err(FinaliserError::MissingNamespaceVariable {
                id: "./chunk.js".to_string()
            })
        );
    }
}

mod named_import {
    use super::*;

    #[test]
    fn should_read_a_property() {
        let dep = external_foo();
        assert_eq!(resolve(&dep, "bar", true, &InteropType::Auto).unwrap(), "foo.bar");
    }

    #[test]
    fn should_bracket_non_identifier_names() {
        let dep = ChunkDependency::sibling("chunk", "./chunk.js");
        assert_eq!(
            resolve(&dep, "my-name", true, &InteropType::Default).unwrap(),
            "chunk[\"my-name\"]"
        );
    }
}
