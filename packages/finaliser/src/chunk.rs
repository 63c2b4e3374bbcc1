//! Chunk Export Data
//!
//! Read-only snapshots of what a unit exports and what it forwards from its
//! dependencies, as handed over by the chunk graph.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FinaliserError, Result};

/// Name used for the "entire surface" in re-export specifiers
pub const WILDCARD: &str = "*";

/// Name of the default export
pub const DEFAULT: &str = "default";

/// One binding the current unit exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkExport {
    /// Public name on the export surface
    pub exported: String,
    /// Expression holding the value inside the unit
    pub local: String,
}

impl ChunkExport {
    pub fn new(exported: impl Into<String>, local: impl Into<String>) -> Self {
        ChunkExport {
            exported: exported.into(),
            local: local.into(),
        }
    }
}

/// An export name in a re-export specifier, or the `*` wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExportName {
    Named(String),
    Wildcard,
}

impl ExportName {
    pub fn named(name: impl Into<String>) -> Self {
        ExportName::from(name.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            ExportName::Named(name) => name,
            ExportName::Wildcard => WILDCARD,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, ExportName::Wildcard)
    }
}

impl From<String> for ExportName {
    fn from(name: String) -> Self {
        if name == WILDCARD {
            ExportName::Wildcard
        } else {
            ExportName::Named(name)
        }
    }
}

impl From<&str> for ExportName {
    fn from(name: &str) -> Self {
        ExportName::from(name.to_string())
    }
}

impl From<ExportName> for String {
    fn from(name: ExportName) -> Self {
        match name {
            ExportName::Named(name) => name,
            ExportName::Wildcard => WILDCARD.to_string(),
        }
    }
}

impl fmt::Display for ExportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A binding forwarded from a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReexportSpecifier {
    pub reexported: ExportName,
    pub imported: ExportName,
    /// Consumers must observe writes made after initialisation
    #[serde(default)]
    pub needs_live_binding: bool,
}

impl ReexportSpecifier {
    pub fn named(
        reexported: impl Into<String>,
        imported: impl Into<String>,
        needs_live_binding: bool,
    ) -> Self {
        ReexportSpecifier {
            reexported: ExportName::named(reexported),
            imported: ExportName::named(imported),
            needs_live_binding,
        }
    }

    /// `export * from '...'`
    pub fn wildcard(needs_live_binding: bool) -> Self {
        ReexportSpecifier {
            reexported: ExportName::Wildcard,
            imported: ExportName::Wildcard,
            needs_live_binding,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.reexported.is_wildcard()
    }

    /// A wildcard may only be forwarded as a wildcard.
    pub fn validate(&self, id: &str) -> Result<()> {
        if self.reexported.is_wildcard() == self.imported.is_wildcard() {
            return Ok(());
        }
        Err(FinaliserError::MalformedWildcardReexport {
            id: id.to_string(),
            reexported: self.reexported.to_string(),
            imported: self.imported.to_string(),
        })
    }
}

/// Where a dependency comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencySource {
    /// Another output unit of the same build
    Sibling,
    /// A module left external to the bundle
    External,
}

/// One edge from the current unit to another unit or an external module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkDependency {
    /// Variable bound to the dependency's runtime value
    pub name: String,
    /// Module id, passed to the interop resolver
    pub id: String,
    pub source: DependencySource,
    #[serde(default = "default_named_exports_mode")]
    pub named_exports_mode: bool,
    #[serde(default)]
    pub default_variable_name: Option<String>,
    #[serde(default)]
    pub namespace_variable_name: Option<String>,
    #[serde(default)]
    pub reexports: Option<Vec<ReexportSpecifier>>,
}

fn default_named_exports_mode() -> bool {
    true
}

impl ChunkDependency {
    pub fn new(name: impl Into<String>, id: impl Into<String>, source: DependencySource) -> Self {
        ChunkDependency {
            name: name.into(),
            id: id.into(),
            source,
            named_exports_mode: true,
            default_variable_name: None,
            namespace_variable_name: None,
            reexports: None,
        }
    }

    pub fn sibling(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(name, id, DependencySource::Sibling)
    }

    pub fn external(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(name, id, DependencySource::External)
    }

    pub fn with_named_exports_mode(mut self, named_exports_mode: bool) -> Self {
        self.named_exports_mode = named_exports_mode;
        self
    }

    pub fn with_default_variable(mut self, name: impl Into<String>) -> Self {
        self.default_variable_name = Some(name.into());
        self
    }

    pub fn with_namespace_variable(mut self, name: impl Into<String>) -> Self {
        self.namespace_variable_name = Some(name.into());
        self
    }

    pub fn with_reexports(mut self, reexports: Vec<ReexportSpecifier>) -> Self {
        self.reexports = Some(reexports);
        self
    }

    pub fn is_sibling(&self) -> bool {
        self.source == DependencySource::Sibling
    }

    pub fn reexports(&self) -> &[ReexportSpecifier] {
        self.reexports.as_deref().unwrap_or_default()
    }

    pub fn default_variable(&self) -> Result<&str> {
        self.default_variable_name
            .as_deref()
            .ok_or_else(|| FinaliserError::MissingDefaultVariable {
                id: self.id.clone(),
            })
    }

    pub fn namespace_variable(&self) -> Result<&str> {
        self.namespace_variable_name
            .as_deref()
            .ok_or_else(|| FinaliserError::MissingNamespaceVariable {
                id: self.id.clone(),
            })
    }
}
