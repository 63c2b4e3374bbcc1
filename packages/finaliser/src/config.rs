//! Finaliser Configuration
//!
//! Serde-backed options controlling code style, interop policy and the
//! namespace markers. Field names follow the camelCase spelling used by
//! bundler configuration files.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{FinaliserError, Result};
use crate::finalisers::{ExportBlockOptions, NamespaceMarkers};
use crate::interop::{GetInterop, InteropType};
use crate::output::snippets::CodeSnippets;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedCodeOptions {
    /// Drop optional whitespace, line breaks and trailing semicolons
    pub compact: bool,
    pub arrow_functions: bool,
    pub const_bindings: bool,
    /// Allow reserved words after a dot (`exports.default`)
    pub reserved_names_as_props: bool,
}

impl Default for GeneratedCodeOptions {
    fn default() -> Self {
        Self::es5()
    }
}

impl GeneratedCodeOptions {
    pub fn es5() -> Self {
        GeneratedCodeOptions {
            compact: false,
            arrow_functions: false,
            const_bindings: false,
            reserved_names_as_props: true,
        }
    }

    pub fn es2015() -> Self {
        GeneratedCodeOptions {
            compact: false,
            arrow_functions: true,
            const_bindings: true,
            reserved_names_as_props: true,
        }
    }

    /// Look up a named preset
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "es5" => Some(Self::es5()),
            "es2015" => Some(Self::es2015()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinaliserConfig {
    pub generated_code: GeneratedCodeOptions,
    /// Read re-exported external values through getters
    pub external_live_bindings: bool,
    /// Add the `__esModule` marker to named-export output
    pub es_module: bool,
    /// Add the `Symbol.toStringTag` marker to named-export output
    pub namespace_to_string_tag: bool,
    /// One level of indentation
    pub indent: String,
    /// Prefix of the single-value statement in default-only mode
    pub mechanism: String,
    /// Classification for externals without an override
    pub interop: InteropType,
    /// Classification per external module id
    pub interop_overrides: IndexMap<String, InteropType>,
}

impl Default for FinaliserConfig {
    fn default() -> Self {
        FinaliserConfig {
            generated_code: GeneratedCodeOptions::default(),
            external_live_bindings: true,
            es_module: true,
            namespace_to_string_tag: false,
            indent: "\t".to_string(),
            mechanism: "return ".to_string(),
            interop: InteropType::default(),
            interop_overrides: IndexMap::new(),
        }
    }
}

impl FinaliserConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FinaliserError::InvalidConfig(e.to_string()))
    }

    pub fn snippets(&self) -> CodeSnippets {
        CodeSnippets::new(&self.generated_code)
    }

    pub fn markers(&self) -> NamespaceMarkers {
        NamespaceMarkers::from_options(self.es_module, self.namespace_to_string_tag)
    }

    /// Compact output is never indented
    pub fn effective_indent(&self) -> &str {
        if self.generated_code.compact {
            ""
        } else {
            &self.indent
        }
    }

    pub fn export_block_options(&self, named_exports_mode: bool) -> ExportBlockOptions<'_> {
        ExportBlockOptions {
            named_exports_mode,
            external_live_bindings: self.external_live_bindings,
            indent: self.effective_indent(),
            mechanism: &self.mechanism,
        }
    }
}

impl GetInterop for FinaliserConfig {
    fn get_interop(&self, id: &str) -> InteropType {
        self.interop_overrides
            .get(id)
            .copied()
            .unwrap_or(self.interop)
    }
}
