#![deny(clippy::all)]

/**
 * Bundle Finaliser
 *
 * Export wiring for property-based module formats (CommonJS `exports`, AMD factory return)
 */

#[cfg(feature = "napi-bindings")]
use napi::{Error as NapiError, Status};
#[cfg(feature = "napi-bindings")]
use napi_derive::napi;

pub mod chunk;
pub mod config;
mod error;
pub mod finalisers;
pub mod interop;
pub mod output;
pub mod util;

// Re-exports
pub use chunk::{ChunkDependency, ChunkExport, DependencySource, ExportName, ReexportSpecifier};
pub use config::{FinaliserConfig, GeneratedCodeOptions};
pub use error::{FinaliserError, Result};
pub use finalisers::{
    get_export_block, get_namespace_markers, ExportBlockOptions, NamespaceMarkers,
};
pub use interop::{GetInterop, InteropType};
pub use output::snippets::CodeSnippets;

/// A single unit as handed over by the host (Node.js binding and CLI share this shape)
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitDescriptor {
    pub name: String,
    pub named_exports_mode: bool,
    pub exports: Vec<ChunkExport>,
    pub dependencies: Vec<ChunkDependency>,
}

impl UnitDescriptor {
    /// Named-exports mode with a non-empty export surface
    pub fn has_named_exports(&self) -> bool {
        self.named_exports_mode
            && (!self.exports.is_empty() || self.dependencies.iter().any(|d| !d.reexports().is_empty()))
    }
}

/// Render the namespace markers followed by the export block for one unit
pub fn render_unit(unit: &UnitDescriptor, config: &FinaliserConfig) -> Result<String> {
    let snippets = config.snippets();
    let options = config.export_block_options(unit.named_exports_mode);
    let block = get_export_block(&unit.exports, &unit.dependencies, config, &snippets, &options)?;
    let markers = get_namespace_markers(unit.has_named_exports(), config.markers(), &snippets);
    Ok(format!("{}{}", markers, block))
}

/// Render the export block of a unit described as JSON
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn get_export_block_json(
    unit_json: String,
    options_json: Option<String>,
) -> napi::Result<String> {
    let unit: UnitDescriptor = serde_json::from_str(&unit_json)
        .map_err(|e| NapiError::new(Status::InvalidArg, format!("invalid unit: {}", e)))?;
    let config = match options_json {
        Some(json) => FinaliserConfig::from_json(&json)
            .map_err(|e| NapiError::new(Status::InvalidArg, e.to_string()))?,
        None => FinaliserConfig::default(),
    };

    render_unit(&unit, &config).map_err(|e| NapiError::new(Status::GenericFailure, e.to_string()))
}

/// Get finaliser version
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
