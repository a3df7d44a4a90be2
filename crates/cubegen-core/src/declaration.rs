//! Annotated elements handed to the generator

use crate::dependency::DependencyDescriptor;
use serde::Serialize;

const ANNOTATION_PACKAGE: &str = "org.cubeengine.processor.";

/// Which annotation marked the element
///
/// Both kinds go through the same pipeline. A core element never gets the
/// implicit core dependency and its wrapper does not import `LibCube`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Module,
    Core,
}

impl ElementKind {
    /// Kinds in the order a processing round generates them
    pub const ALL: [ElementKind; 2] = [ElementKind::Module, ElementKind::Core];

    pub fn is_core(self) -> bool {
        matches!(self, ElementKind::Core)
    }

    /// Fully-qualified name of the marking annotation
    pub fn annotation(self) -> String {
        match self {
            ElementKind::Module => format!("{}Module", ANNOTATION_PACKAGE),
            ElementKind::Core => format!("{}Core", ANNOTATION_PACKAGE),
        }
    }
}

/// A type declaration discovered by the driver
///
/// The driver guarantees `simple_name` is a type name and `package` is its
/// enclosing package; neither is checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDeclaration {
    pub simple_name: String,
    pub package: String,
    pub kind: ElementKind,
    /// Declared dependencies, in declaration order
    pub dependencies: Vec<DependencyDescriptor>,
}

impl ModuleDeclaration {
    pub fn module(simple_name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
            package: package.into(),
            kind: ElementKind::Module,
            dependencies: Vec::new(),
        }
    }

    pub fn core(simple_name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
            package: package.into(),
            kind: ElementKind::Core,
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, dependency: DependencyDescriptor) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// `<package>.<SimpleName>`, used for the wrapper's import line
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.simple_name)
    }
}
