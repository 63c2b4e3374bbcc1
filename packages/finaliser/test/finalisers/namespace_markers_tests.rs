//! Namespace Marker Tests

use bundle_finaliser::{get_namespace_markers, CodeSnippets, GeneratedCodeOptions, NamespaceMarkers};

#[test]
fn should_be_empty_without_named_exports() {
    let markers = NamespaceMarkers::ES_MODULE | NamespaceMarkers::TO_STRING_TAG;
    assert_eq!(get_namespace_markers(false, markers, &CodeSnippets::default()), "");
}

#[test]
fn should_be_empty_when_no_marker_is_requested() {
    assert_eq!(
        get_namespace_markers(true, NamespaceMarkers::empty(), &CodeSnippets::default()),
        ""
    );
}

#[test]
fn should_emit_the_es_module_flag() {
    assert_eq!(
        get_namespace_markers(true, NamespaceMarkers::ES_MODULE, &CodeSnippets::default()),
        "Object.defineProperty(exports, '__esModule', { value: true });"
    );
}

#[test]
fn should_emit_the_string_tag() {
    assert_eq!(
        get_namespace_markers(true, NamespaceMarkers::TO_STRING_TAG, &CodeSnippets::default()),
        "exports[Symbol.toStringTag] = 'Module';"
    );
}

#[test]
fn should_join_both_markers_with_one_separator() {
    let markers = NamespaceMarkers::from_options(true, true);
    assert_eq!(
        get_namespace_markers(true, markers, &CodeSnippets::default()),
        "Object.defineProperty(exports, '__esModule', { value: true });\nexports[Symbol.toStringTag] = 'Module';"
    );
}

#[test]
fn should_emit_compact_markers() {
    let snippets = CodeSnippets::new(&GeneratedCodeOptions {
        compact: true,
        ..GeneratedCodeOptions::es5()
    });
    let markers = NamespaceMarkers::from_options(true, true);
    assert_eq!(
        get_namespace_markers(true, markers, &snippets),
        "Object.defineProperty(exports,'__esModule',{value:true});exports[Symbol.toStringTag]='Module';"
    );
}

#[test]
fn should_map_options_to_flags() {
    assert_eq!(NamespaceMarkers::from_options(false, false), NamespaceMarkers::empty());
    assert_eq!(
        NamespaceMarkers::from_options(true, false),
        NamespaceMarkers::ES_MODULE
    );
    assert_eq!(
        NamespaceMarkers::from_options(false, true),
        NamespaceMarkers::TO_STRING_TAG
    );
}
