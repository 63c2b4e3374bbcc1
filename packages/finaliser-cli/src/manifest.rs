use anyhow::Context;
use bundle_finaliser::{FinaliserConfig, UnitDescriptor};
use glob::glob;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Units of one build plus the options they are finalised with
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub units: Vec<UnitDescriptor>,
    pub options: FinaliserConfig,
}

impl Manifest {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid manifest {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let manifest: Manifest = serde_json::from_str(content)?;
        Ok(manifest)
    }
}

/// Command-line overrides applied on top of a manifest's options
#[derive(Debug, Default, Clone)]
pub struct OptionOverrides {
    pub compact: bool,
    pub arrow_functions: bool,
    pub const_bindings: bool,
    pub mechanism: Option<String>,
}

impl OptionOverrides {
    pub fn apply(&self, config: &mut FinaliserConfig) {
        if self.compact {
            config.generated_code.compact = true;
        }
        if self.arrow_functions {
            config.generated_code.arrow_functions = true;
        }
        if self.const_bindings {
            config.generated_code.const_bindings = true;
        }
        if let Some(mechanism) = &self.mechanism {
            config.mechanism = mechanism.clone();
        }
    }
}

/// Expand manifest arguments; anything that is not an existing file is treated as a glob pattern
pub fn resolve_manifest_paths(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        let path = PathBuf::from(input);
        if path.is_file() {
            paths.push(path);
            continue;
        }
        let matches: Vec<PathBuf> = glob(input)
            .map_err(|e| anyhow::anyhow!("Failed to read glob pattern {}: {}", input, e))?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            anyhow::bail!("No manifest found for {}", input);
        }
        paths.extend(matches);
    }
    Ok(paths)
}
