//! Namespace Markers
//!
//! Statements that tell consumers the export surface is a module namespace.

use bitflags::bitflags;

use crate::output::snippets::CodeSnippets;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NamespaceMarkers: u8 {
        /// `exports.__esModule = true`, read by interop helpers
        const ES_MODULE = 1 << 0;
        /// `exports[Symbol.toStringTag] = 'Module'`
        const TO_STRING_TAG = 1 << 1;
    }
}

impl NamespaceMarkers {
    pub fn from_options(es_module: bool, to_string_tag: bool) -> Self {
        let mut markers = NamespaceMarkers::empty();
        markers.set(NamespaceMarkers::ES_MODULE, es_module);
        markers.set(NamespaceMarkers::TO_STRING_TAG, to_string_tag);
        markers
    }
}

pub fn get_es_module_export(snippets: &CodeSnippets) -> String {
    let sp = snippets.space;
    format!("Object.defineProperty(exports,{sp}'__esModule',{sp}{{{sp}value:{sp}true{sp}}});")
}

pub fn get_namespace_to_string_export(snippets: &CodeSnippets) -> String {
    let sp = snippets.space;
    format!("exports[Symbol.toStringTag]{sp}={sp}'Module';")
}

/// Markers for a unit; always empty unless the unit has named exports
pub fn get_namespace_markers(
    has_named_exports: bool,
    markers: NamespaceMarkers,
    snippets: &CodeSnippets,
) -> String {
    if !has_named_exports {
        return String::new();
    }
    let mut statements = Vec::with_capacity(2);
    if markers.contains(NamespaceMarkers::ES_MODULE) {
        statements.push(get_es_module_export(snippets));
    }
    if markers.contains(NamespaceMarkers::TO_STRING_TAG) {
        statements.push(get_namespace_to_string_export(snippets));
    }
    statements.join(snippets.n)
}
