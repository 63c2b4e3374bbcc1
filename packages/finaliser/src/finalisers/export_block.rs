//! Export Block
//!
//! Synthesizes the statements that populate `exports` for one unit.
//!
//! In named-exports mode the block is built from three passes whose order
//! encodes precedence:
//!
//! 1. specific re-exports,
//! 2. direct exports, which overwrite same-named specific re-exports,
//! 3. wildcard re-exports, which only claim keys `exports` does not own yet.
//!
//! In default-only mode the unit exposes a single value through `mechanism`.

use tracing::debug;

use super::define_property::{define_loop_property, define_property, Binding, PropertyKey, LOOP_VARIABLE};
use super::reexport::get_reexported_import_name;
use crate::chunk::{ChunkDependency, ChunkExport, ExportName, DEFAULT};
use crate::error::Result;
use crate::interop::GetInterop;
use crate::output::snippets::{CodeSnippets, FunctionIntroOptions};

/// Value of a default-only unit without any export
const UNDEFINED: &str = "undefined";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportBlockOptions<'a> {
    pub named_exports_mode: bool,
    /// Read re-exported external values through getters
    pub external_live_bindings: bool,
    /// One level of indentation
    pub indent: &'a str,
    /// Prefix of the single-value statement, `return ` for AMD or `module.exports = ` for CommonJS
    pub mechanism: &'a str,
}

impl Default for ExportBlockOptions<'static> {
    fn default() -> Self {
        ExportBlockOptions {
            named_exports_mode: true,
            external_live_bindings: true,
            indent: "\t",
            mechanism: "return ",
        }
    }
}

pub fn get_export_block(
    exports: &[ChunkExport],
    dependencies: &[ChunkDependency],
    interop: &dyn GetInterop,
    snippets: &CodeSnippets,
    options: &ExportBlockOptions<'_>,
) -> Result<String> {
    let n = snippets.n;
    if !options.named_exports_mode {
        let value = get_single_default_export(
            exports,
            dependencies,
            interop,
            options.external_live_bindings,
            snippets,
        )?;
        debug!(value = %value, "rendering default-only export");
        return Ok(format!("{n}{n}{}{};", options.mechanism, value));
    }

    for dependency in dependencies {
        for specifier in dependency.reexports() {
            specifier.validate(&dependency.id)?;
        }
    }

    let mut statements = Vec::new();
    push_specific_reexports(&mut statements, dependencies, interop, snippets, options)?;
    push_direct_exports(&mut statements, exports, snippets);
    push_wildcard_reexports(&mut statements, dependencies, snippets, options.indent);

    debug!(
        statements = statements.len(),
        exports = exports.len(),
        dependencies = dependencies.len(),
        "rendered named export block"
    );

    if statements.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("{n}{n}{}", statements.join(n)))
}

fn get_single_default_export(
    exports: &[ChunkExport],
    dependencies: &[ChunkDependency],
    interop: &dyn GetInterop,
    external_live_bindings: bool,
    snippets: &CodeSnippets,
) -> Result<String> {
    if let Some(export) = exports.first() {
        return Ok(export.local.clone());
    }
    let first_reexport = dependencies.iter().find_map(|dependency| {
        dependency
            .reexports()
            .first()
            .map(|specifier| (dependency, specifier))
    });
    match first_reexport {
        Some((dependency, specifier)) => {
            specifier.validate(&dependency.id)?;
            get_reexported_import_name(
                dependency,
                &specifier.imported,
                external_live_bindings,
                interop,
                snippets,
            )
        }
        None => Ok(UNDEFINED.to_string()),
    }
}

fn push_specific_reexports(
    statements: &mut Vec<String>,
    dependencies: &[ChunkDependency],
    interop: &dyn GetInterop,
    snippets: &CodeSnippets,
    options: &ExportBlockOptions<'_>,
) -> Result<()> {
    for dependency in dependencies {
        for specifier in dependency.reexports() {
            let ExportName::Named(reexported) = &specifier.reexported else {
                continue;
            };
            let import_name = get_reexported_import_name(
                dependency,
                &specifier.imported,
                options.external_live_bindings,
                interop,
                snippets,
            )?;
            let binding = Binding::new(import_name, specifier.needs_live_binding);
            statements.push(format!(
                "{};",
                define_property(PropertyKey::Name(reexported), &binding, snippets, options.indent, 0)
            ));
        }
    }
    Ok(())
}

fn push_direct_exports(statements: &mut Vec<String>, exports: &[ChunkExport], snippets: &CodeSnippets) {
    let sp = snippets.space;
    for ChunkExport { exported, local } in exports {
        let lhs = format!("exports{}", snippets.get_property_access(exported));
        // Already on the export surface
        if exported == local || lhs == *local {
            continue;
        }
        statements.push(format!("{lhs}{sp}={sp}{local};"));
    }
}

fn push_wildcard_reexports(
    statements: &mut Vec<String>,
    dependencies: &[ChunkDependency],
    snippets: &CodeSnippets,
    indent: &str,
) {
    let CodeSnippets { space: sp, n, s, cnst, .. } = *snippets;
    let k = LOOP_VARIABLE;
    for dependency in dependencies {
        let name = &dependency.name;
        for specifier in dependency.reexports().iter().filter(|spec| spec.is_wildcard()) {
            let definition = define_loop_property(name, specifier.needs_live_binding, snippets, indent);
            let copy_property_if_necessary = format!(
                "{{{n}{indent}if{sp}({k}{sp}!=={sp}'{DEFAULT}'{sp}&&{sp}!exports.hasOwnProperty({k})){sp}{definition}{s}{n}}}"
            );
            // A `var` loop variable is shared, each live getter needs its own `k`
            let statement = if cnst == "var" && specifier.needs_live_binding {
                let intro = snippets.get_function_intro(&[k], FunctionIntroOptions::default());
                format!("Object.keys({name}).forEach({intro}{copy_property_if_necessary});")
            } else {
                format!("for{sp}({cnst} {k} in {name}){sp}{copy_property_if_necessary}")
            };
            statements.push(statement);
        }
    }
}
