//! Processing-round driver

use crate::declaration::{ElementKind, ModuleDeclaration};
use crate::descriptor::GeneratedDescriptor;
use crate::emit::{emit, ArtifactSink};
use crate::error::GeneratorResult;
use crate::options::ProcessingOptions;
use crate::render::render;

/// Supplies annotated elements for one processing round
///
/// Discovery belongs to the build driver; the processor only consumes it.
pub trait ElementSource {
    /// Elements carrying the annotation for `kind`, in discovery order
    fn elements_annotated_with(&self, kind: ElementKind) -> Vec<ModuleDeclaration>;

    /// True for the final round, which only signals completion
    fn processing_over(&self) -> bool {
        false
    }
}

/// What was generated for one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ElementKind,
    pub qualified_id: String,
    pub source: String,
    pub resource: String,
}

/// Summary of a processing round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundReport {
    pub artifacts: Vec<GeneratedArtifact>,
}

impl RoundReport {
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn count(&self, kind: ElementKind) -> usize {
        self.artifacts.iter().filter(|a| a.kind == kind).count()
    }
}

/// Generates plugin wrappers with a fixed set of build options
#[derive(Debug, Clone, Default)]
pub struct Processor {
    options: ProcessingOptions,
}

impl Processor {
    pub fn new(options: ProcessingOptions) -> Self {
        Self { options }
    }

    /// Resolve the descriptor for `declaration` without writing anything
    pub fn describe(&self, declaration: &ModuleDeclaration) -> GeneratedDescriptor {
        GeneratedDescriptor::resolve(declaration, &self.options)
    }

    /// Run one round: every module element, then every core element.
    ///
    /// The final round generates nothing. The first failing element aborts
    /// the round; artifacts written before it stay in the sink.
    pub fn process(
        &self,
        source: &dyn ElementSource,
        sink: &mut dyn ArtifactSink,
    ) -> GeneratorResult<RoundReport> {
        let mut report = RoundReport::default();

        if source.processing_over() {
            tracing::debug!("Final processing round, nothing to generate");
            return Ok(report);
        }

        for kind in ElementKind::ALL {
            for declaration in source.elements_annotated_with(kind) {
                report.artifacts.push(self.generate(&declaration, sink)?);
            }
        }

        tracing::info!(
            modules = report.count(ElementKind::Module),
            cores = report.count(ElementKind::Core),
            "Plugin generation round complete"
        );

        Ok(report)
    }

    /// Run the full pipeline for a single element
    pub fn generate(
        &self,
        declaration: &ModuleDeclaration,
        sink: &mut dyn ArtifactSink,
    ) -> GeneratorResult<GeneratedArtifact> {
        let descriptor = self.describe(declaration);

        tracing::debug!(
            element = %declaration.qualified_name(),
            annotation = %declaration.kind.annotation(),
            plugin_id = %descriptor.identifiers.qualified_id,
            dependencies = descriptor.dependencies.len(),
            "Generating plugin wrapper"
        );

        let source_text = render(declaration, &descriptor);
        let emitted = emit(sink, &descriptor, &source_text)?;

        Ok(GeneratedArtifact {
            kind: declaration.kind,
            qualified_id: descriptor.identifiers.qualified_id,
            source: emitted.source,
            resource: emitted.resource,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::MemorySink;
    use crate::error::GeneratorError;
    use pretty_assertions::assert_eq;
    use std::io::{self, Write};

    struct Round {
        over: bool,
        elements: Vec<ModuleDeclaration>,
    }

    impl ElementSource for Round {
        fn elements_annotated_with(&self, kind: ElementKind) -> Vec<ModuleDeclaration> {
            self.elements
                .iter()
                .filter(|e| e.kind == kind)
                .cloned()
                .collect()
        }

        fn processing_over(&self) -> bool {
            self.over
        }
    }

    fn round(over: bool) -> Round {
        Round {
            over,
            elements: vec![
                ModuleDeclaration::core("LibCube", "org.cubeengine.libcube"),
                ModuleDeclaration::module("Economy", "org.example"),
                ModuleDeclaration::module("Chat", "org.example.chat"),
            ],
        }
    }

    /// Accepts `limit` sources, then refuses to open more
    struct LimitedSink {
        inner: MemorySink,
        limit: usize,
    }

    impl ArtifactSink for LimitedSink {
        fn create_source(&mut self, qualified_name: &str) -> io::Result<Box<dyn Write + '_>> {
            if self.limit == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "filer closed"));
            }
            self.limit -= 1;
            self.inner.create_source(qualified_name)
        }

        fn create_resource(
            &mut self,
            package: &str,
            relative_name: &str,
        ) -> io::Result<Box<dyn Write + '_>> {
            self.inner.create_resource(package, relative_name)
        }
    }

    #[test]
    fn test_modules_generated_before_cores() {
        let mut sink = MemorySink::new();

        let report = Processor::default().process(&round(false), &mut sink).unwrap();

        let sources: Vec<_> = report.artifacts.iter().map(|a| a.source.as_str()).collect();
        assert_eq!(
            sources,
            vec![
                "org.example.PluginEconomy",
                "org.example.chat.PluginChat",
                "org.cubeengine.libcube.PluginLibCube",
            ]
        );
        assert_eq!(report.count(ElementKind::Module), 2);
        assert_eq!(report.count(ElementKind::Core), 1);
        assert_eq!(sink.resource_paths().count(), 3);
    }

    #[test]
    fn test_final_round_generates_nothing() {
        let mut sink = MemorySink::new();

        let report = Processor::default().process(&round(true), &mut sink).unwrap();

        assert!(report.is_empty());
        assert_eq!(sink.source_names().count(), 0);
    }

    #[test]
    fn test_failure_aborts_round_and_keeps_earlier_output() {
        let mut sink = LimitedSink {
            inner: MemorySink::new(),
            limit: 1,
        };

        let err = Processor::default().process(&round(false), &mut sink).unwrap_err();

        assert!(matches!(err, GeneratorError::OpenSink { .. }));
        assert_eq!(err.artifact(), "org.example.chat.PluginChat");
        assert!(sink.inner.source("org.example.PluginEconomy").is_some());
        assert!(sink.inner.source("org.cubeengine.libcube.PluginLibCube").is_none());
    }
}
