//! End-to-end generation through the in-memory sink

use cubegen_core::dependency::CORE_DEPENDENCY_ID;
use cubegen_core::options::{OPTION_ID, OPTION_LIBCUBE_VERSION, OPTION_NAME, OPTION_VERSION};
use cubegen_core::{
    DependencyDescriptor, ElementKind, ElementSource, MemorySink, ModuleDeclaration,
    ProcessingOptions, Processor,
};
use pretty_assertions::assert_eq;

fn economy_options() -> ProcessingOptions {
    ProcessingOptions::new()
        .with(OPTION_ID, "economy")
        .with(OPTION_NAME, "Economy Module")
        .with(OPTION_VERSION, "1.0")
        .with(OPTION_LIBCUBE_VERSION, "3.2")
}

struct SingleElement(ModuleDeclaration);

impl ElementSource for SingleElement {
    fn elements_annotated_with(&self, kind: ElementKind) -> Vec<ModuleDeclaration> {
        if self.0.kind == kind {
            vec![self.0.clone()]
        } else {
            vec![]
        }
    }
}

#[test]
fn test_module_without_dependencies() {
    let processor = Processor::new(economy_options());
    let decl = ModuleDeclaration::module("Economy", "org.example");

    let descriptor = processor.describe(&decl);

    assert_eq!(descriptor.identifiers.qualified_id, "cubeengine-economy");
    assert_eq!(
        descriptor.identifiers.display_name,
        "CubeEngine - Economy Module"
    );
    assert_eq!(descriptor.identifiers.class_name, "PluginEconomy");
    assert_eq!(
        descriptor.dependencies,
        vec![DependencyDescriptor::new(CORE_DEPENDENCY_ID, "3.2", false)]
    );
}

#[test]
fn test_core_without_dependencies() {
    let processor = Processor::new(economy_options());
    let decl = ModuleDeclaration::core("Economy", "org.example");
    let mut sink = MemorySink::new();

    let report = processor
        .process(&SingleElement(decl.clone()), &mut sink)
        .unwrap();

    assert!(processor.describe(&decl).dependencies.is_empty());
    assert_eq!(report.count(ElementKind::Core), 1);

    let source = sink.source("org.example.PluginEconomy").unwrap();
    assert!(!source.contains("import org.cubeengine.libcube.LibCube;"));
    assert!(source.contains("dependencies = {})"));
}

#[test]
fn test_declared_dependency_precedes_core() {
    let processor = Processor::new(economy_options());
    let decl = ModuleDeclaration::module("Economy", "org.example")
        .with_dependency(DependencyDescriptor::new("chat", "2.0", true));

    let ids: Vec<_> = processor
        .describe(&decl)
        .dependencies
        .into_iter()
        .map(|d| d.id)
        .collect();

    assert_eq!(ids, vec!["chat".to_string(), CORE_DEPENDENCY_ID.to_string()]);
}

#[test]
fn test_generated_artifacts_in_sink() {
    let processor = Processor::new(economy_options());
    let decl = ModuleDeclaration::module("Economy", "org.example");
    let mut sink = MemorySink::new();

    let artifact = processor.generate(&decl, &mut sink).unwrap();

    assert_eq!(artifact.source, "org.example.PluginEconomy");
    assert_eq!(artifact.resource, "assets/cubeengine-economy/lang/en_us.lang");
    assert_eq!(sink.resource(&artifact.resource), Some(&b""[..]));

    let source = sink.source(&artifact.source).unwrap();
    assert!(source.starts_with("package org.example;\n\n"));
    assert!(source.contains("import org.cubeengine.libcube.LibCube;\n"));
    assert!(source.contains(
        "        dependencies = {@Dependency(id = \"cubeengine-core\", version = \"3.2\", optional = false)})\n"
    ));
}

#[test]
fn test_generation_is_repeatable() {
    let processor = Processor::new(economy_options());
    let decl = ModuleDeclaration::module("Economy", "org.example");
    let mut first = MemorySink::new();
    let mut second = MemorySink::new();

    processor.generate(&decl, &mut first).unwrap();
    processor.generate(&decl, &mut second).unwrap();

    assert_eq!(
        first.source("org.example.PluginEconomy"),
        second.source("org.example.PluginEconomy")
    );
}
