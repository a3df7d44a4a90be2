//! Declaration manifest: the command-line stand-in for annotation discovery
//!
//! ```toml
//! [[module]]
//! name = "Economy"
//! package = "org.example"
//! dependencies = [{ id = "chat", version = "2.0", optional = true }]
//!
//! [[core]]
//! name = "LibCube"
//! package = "org.cubeengine.libcube"
//! ```

use anyhow::{Context, Result};
use cubegen_core::{DependencyDescriptor, ElementKind, ElementSource, ModuleDeclaration};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default, rename = "module")]
    modules: Vec<ModuleEntry>,
    #[serde(default, rename = "core")]
    cores: Vec<CoreEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModuleEntry {
    name: String,
    package: String,
    #[serde(default)]
    dependencies: Vec<DependencyDescriptor>,
}

/// Core elements cannot declare dependencies
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CoreEntry {
    name: String,
    package: String,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Every declaration in generation order
    pub fn declarations(&self) -> Vec<ModuleDeclaration> {
        ElementKind::ALL
            .into_iter()
            .flat_map(|kind| self.elements_annotated_with(kind))
            .collect()
    }
}

impl ElementSource for Manifest {
    fn elements_annotated_with(&self, kind: ElementKind) -> Vec<ModuleDeclaration> {
        match kind {
            ElementKind::Module => self
                .modules
                .iter()
                .map(|m| ModuleDeclaration {
                    simple_name: m.name.clone(),
                    package: m.package.clone(),
                    kind,
                    dependencies: m.dependencies.clone(),
                })
                .collect(),
            ElementKind::Core => self
                .cores
                .iter()
                .map(|c| ModuleDeclaration::core(c.name.clone(), c.package.clone()))
                .collect(),
        }
    }
}
