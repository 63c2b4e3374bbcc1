//! Finalisers Module
//!
//! Trailing export section of units rendered in property-based module formats

pub mod define_property;
pub mod export_block;
pub mod namespace_markers;
pub mod reexport;

pub use define_property::{define_property, Binding, PropertyKey};
pub use export_block::{get_export_block, ExportBlockOptions};
pub use namespace_markers::{get_namespace_markers, NamespaceMarkers};
pub use reexport::get_reexported_import_name;
