//! Fully resolved generation context for one element

use crate::declaration::{ElementKind, ModuleDeclaration};
use crate::dependency::{merge_with_core, DependencyDescriptor};
use crate::identifiers::Identifiers;
use crate::options::ProcessingOptions;
use serde::Serialize;

/// Everything the renderer interpolates, built once per element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedDescriptor {
    pub kind: ElementKind,
    pub package: String,
    pub simple_name: String,
    #[serde(flatten)]
    pub identifiers: Identifiers,
    /// Value of the `<UPPER>_VERSION` constant
    pub version: String,
    pub description: String,
    pub url: String,
    /// `<team> Team`
    pub authors: String,
    pub source_version: String,
    pub dependencies: Vec<DependencyDescriptor>,
}

impl GeneratedDescriptor {
    /// Each option is resolved once and shared by the names, metadata and
    /// dependency list
    pub fn resolve(declaration: &ModuleDeclaration, options: &ProcessingOptions) -> Self {
        let resolved = options.resolve_for(&declaration.simple_name);
        let identifiers = Identifiers::new(&declaration.simple_name, &resolved);
        let dependencies = merge_with_core(
            &declaration.dependencies,
            declaration.kind,
            &resolved.libcube_version,
        );

        Self {
            kind: declaration.kind,
            package: declaration.package.clone(),
            simple_name: declaration.simple_name.clone(),
            identifiers,
            version: resolved.version,
            description: resolved.description,
            url: resolved.url,
            authors: format!("{} Team", resolved.team),
            source_version: resolved.source_version,
            dependencies,
        }
    }

    /// Name the wrapper source is registered under: `<package>.Plugin<Name>`
    pub fn source_name(&self) -> String {
        format!("{}.{}", self.package, self.identifiers.class_name)
    }
}
