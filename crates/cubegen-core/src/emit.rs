//! Writing generated artifacts through an output sink

use crate::descriptor::GeneratedDescriptor;
use crate::error::{GeneratorError, GeneratorResult};
use std::collections::BTreeMap;
use std::io::{self, BufWriter, Write};

/// Package the language resource is created under
pub const RESOURCE_PACKAGE: &str = "assets";

/// Resource path below `assets/` for a plugin id
pub fn lang_resource_name(qualified_id: &str) -> String {
    format!("{}/lang/en_us.lang", qualified_id)
}

/// Where generated artifacts go
///
/// Each returned writer is scoped to one artifact and is released when
/// dropped, whether or not writing succeeded.
pub trait ArtifactSink {
    /// Open a source file for the fully-qualified type `qualified_name`
    fn create_source(&mut self, qualified_name: &str) -> io::Result<Box<dyn Write + '_>>;

    /// Open a resource file `relative_name` under `package`
    fn create_resource(
        &mut self,
        package: &str,
        relative_name: &str,
    ) -> io::Result<Box<dyn Write + '_>>;
}

/// Names of the artifacts written for one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedArtifacts {
    pub source: String,
    pub resource: String,
}

/// Write the rendered wrapper source and an empty language resource.
///
/// The first failure aborts; anything already written is left in place.
pub fn emit(
    sink: &mut dyn ArtifactSink,
    descriptor: &GeneratedDescriptor,
    source_text: &str,
) -> GeneratorResult<EmittedArtifacts> {
    let source = descriptor.source_name();
    write_artifact(&source, sink.create_source(&source), source_text)?;
    tracing::debug!(artifact = %source, bytes = source_text.len(), "Wrote plugin source");

    let resource_name = lang_resource_name(&descriptor.identifiers.qualified_id);
    let resource = format!("{}/{}", RESOURCE_PACKAGE, resource_name);
    write_artifact(
        &resource,
        sink.create_resource(RESOURCE_PACKAGE, &resource_name),
        "",
    )?;
    tracing::debug!(artifact = %resource, "Wrote language resource");

    Ok(EmittedArtifacts { source, resource })
}

fn write_artifact(
    artifact: &str,
    opened: io::Result<Box<dyn Write + '_>>,
    contents: &str,
) -> GeneratorResult<()> {
    let writer = opened.map_err(|e| GeneratorError::open_sink(artifact, e))?;
    let mut writer = BufWriter::new(writer);
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| GeneratorError::write(artifact, e))
}

/// Sink that keeps every artifact in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    sources: BTreeMap<String, Vec<u8>>,
    resources: BTreeMap<String, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a source, keyed by qualified type name
    pub fn source(&self, qualified_name: &str) -> Option<&str> {
        self.sources
            .get(qualified_name)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Contents of a resource, keyed by `<package>/<relative name>`
    pub fn resource(&self, path: &str) -> Option<&[u8]> {
        self.resources.get(path).map(Vec::as_slice)
    }

    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    pub fn resource_paths(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }
}

impl ArtifactSink for MemorySink {
    fn create_source(&mut self, qualified_name: &str) -> io::Result<Box<dyn Write + '_>> {
        let buffer = self.sources.entry(qualified_name.to_string()).or_default();
        buffer.clear();
        Ok(Box::new(buffer))
    }

    fn create_resource(
        &mut self,
        package: &str,
        relative_name: &str,
    ) -> io::Result<Box<dyn Write + '_>> {
        let buffer = self
            .resources
            .entry(format!("{}/{}", package, relative_name))
            .or_default();
        buffer.clear();
        Ok(Box::new(buffer))
    }
}
