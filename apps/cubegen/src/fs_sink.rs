//! Filesystem output for generated artifacts

use cubegen_core::ArtifactSink;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes sources and resources below an output root, javac-filer style:
/// `org.example.PluginEconomy` lands at `org/example/PluginEconomy.java`.
#[derive(Debug, Clone)]
pub struct FilesystemSink {
    root: PathBuf,
}

impl FilesystemSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn source_path(&self, qualified_name: &str) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(qualified_name.split('.'));
        path.set_extension("java");
        path
    }

    pub fn resource_path(&self, package: &str, relative_name: &str) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(package.split('.').filter(|segment| !segment.is_empty()));
        path.join(relative_name)
    }
}

fn create_file(path: &Path) -> io::Result<Box<dyn Write>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(Box::new(File::create(path)?))
}

impl ArtifactSink for FilesystemSink {
    fn create_source(&mut self, qualified_name: &str) -> io::Result<Box<dyn Write + '_>> {
        create_file(&self.source_path(qualified_name))
    }

    fn create_resource(
        &mut self,
        package: &str,
        relative_name: &str,
    ) -> io::Result<Box<dyn Write + '_>> {
        create_file(&self.resource_path(package, relative_name))
    }
}
