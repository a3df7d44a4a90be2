//! Dependency descriptors and the implicit core dependency

use crate::declaration::ElementKind;
use crate::options::ProcessingOptions;
use serde::{Deserialize, Serialize};

/// Plugin id of the core library every module depends on
pub const CORE_DEPENDENCY_ID: &str = "cubeengine-core";

/// One inter-plugin requirement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyDescriptor {
    /// Plugin id of the dependency
    #[serde(alias = "value")]
    pub id: String,

    /// Version expression, copied verbatim into the generated annotation
    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub optional: bool,
}

impl DependencyDescriptor {
    pub fn new(id: impl Into<String>, version: impl Into<String>, optional: bool) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            optional,
        }
    }

    pub fn required(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(id, version, false)
    }
}

/// The dependency every module gets on the core library
fn core_dependency(libcube_version: impl Into<String>) -> DependencyDescriptor {
    DependencyDescriptor::required(CORE_DEPENDENCY_ID, libcube_version)
}

/// Final dependency list for an element.
///
/// Modules get a required `cubeengine-core` dependency appended after their
/// declared dependencies; core elements keep their list unchanged. An
/// explicit dependency on the core is not de-duplicated.
pub fn merged_dependencies(
    declared: &[DependencyDescriptor],
    kind: ElementKind,
    options: &ProcessingOptions,
) -> Vec<DependencyDescriptor> {
    merge_with_core(declared, kind, &options.libcube_version())
}

/// [`merged_dependencies`] with the libcube version already resolved
pub(crate) fn merge_with_core(
    declared: &[DependencyDescriptor],
    kind: ElementKind,
    libcube_version: &str,
) -> Vec<DependencyDescriptor> {
    let mut dependencies = declared.to_vec();
    if !kind.is_core() {
        dependencies.push(core_dependency(libcube_version));
    }
    dependencies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OPTION_LIBCUBE_VERSION;
    use pretty_assertions::assert_eq;

    fn chat() -> DependencyDescriptor {
        DependencyDescriptor::new("chat", "2.0", true)
    }

    #[test]
    fn test_core_element_keeps_declared_list() {
        let options = ProcessingOptions::new().with(OPTION_LIBCUBE_VERSION, "3.2");

        assert!(merged_dependencies(&[], ElementKind::Core, &options).is_empty());
        assert_eq!(
            merged_dependencies(&[chat()], ElementKind::Core, &options),
            vec![chat()]
        );
    }

    #[test]
    fn test_module_gets_core_dependency_last() {
        let options = ProcessingOptions::new().with(OPTION_LIBCUBE_VERSION, "3.2");

        let merged = merged_dependencies(&[chat()], ElementKind::Module, &options);

        assert_eq!(
            merged,
            vec![
                chat(),
                DependencyDescriptor::new("cubeengine-core", "3.2", false)
            ]
        );
    }

    #[test]
    fn test_core_dependency_version_falls_back() {
        let merged = merged_dependencies(&[], ElementKind::Module, &ProcessingOptions::new());
        assert_eq!(
            merged,
            vec![DependencyDescriptor::required(CORE_DEPENDENCY_ID, "unknown")]
        );
    }

    #[test]
    fn test_explicit_core_dependency_is_kept_twice() {
        let options = ProcessingOptions::new().with(OPTION_LIBCUBE_VERSION, "3.2");
        let explicit = DependencyDescriptor::required(CORE_DEPENDENCY_ID, "3.0");

        let merged = merged_dependencies(&[explicit.clone()], ElementKind::Module, &options);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], explicit);
        assert_eq!(merged[1].id, CORE_DEPENDENCY_ID);
        assert_eq!(merged[1].version, "3.2");
    }
}
