//! Re-exported Import Names
//!
//! The expression to read for one name forwarded from one dependency.

use crate::chunk::{ChunkDependency, DependencySource, ExportName, DEFAULT};
use crate::error::Result;
use crate::interop::GetInterop;
use crate::output::snippets::CodeSnippets;

pub fn get_reexported_import_name(
    dependency: &ChunkDependency,
    imported: &ExportName,
    external_live_bindings: bool,
    interop: &dyn GetInterop,
    snippets: &CodeSnippets,
) -> Result<String> {
    match imported {
        ExportName::Named(name) if name == DEFAULT => {
            get_default_import_name(dependency, external_live_bindings, interop, snippets)
        }
        ExportName::Named(name) => Ok(format!(
            "{}{}",
            dependency.name,
            snippets.get_property_access(name)
        )),
        ExportName::Wildcard => get_namespace_import_name(dependency, interop),
    }
}

fn get_default_import_name(
    dependency: &ChunkDependency,
    external_live_bindings: bool,
    interop: &dyn GetInterop,
    snippets: &CodeSnippets,
) -> Result<String> {
    match dependency.source {
        DependencySource::External => {
            let interop_type = interop.get_interop(&dependency.id);
            let variable_name = match interop_type.default_helper() {
                Some(_) => dependency.default_variable()?,
                None => dependency.name.as_str(),
            };
            if interop_type.is_default_a_property(external_live_bindings) {
                Ok(format!(
                    "{}{}",
                    variable_name,
                    snippets.get_property_access(DEFAULT)
                ))
            } else {
                Ok(variable_name.to_string())
            }
        }
        // A default-only sibling exposes its default as the unit value itself
        DependencySource::Sibling if dependency.named_exports_mode => Ok(format!(
            "{}{}",
            dependency.name,
            snippets.get_property_access(DEFAULT)
        )),
        DependencySource::Sibling => Ok(dependency.name.clone()),
    }
}

fn get_namespace_import_name(
    dependency: &ChunkDependency,
    interop: &dyn GetInterop,
) -> Result<String> {
    let wrapped = match dependency.source {
        DependencySource::Sibling => !dependency.named_exports_mode,
        DependencySource::External => interop
            .get_interop(&dependency.id)
            .namespace_helper()
            .is_some(),
    };
    if wrapped {
        Ok(dependency.namespace_variable()?.to_string())
    } else {
        Ok(dependency.name.clone())
    }
}
