//! Error handling for plugin wrapper generation

use thiserror::Error;

/// Result type alias for convenience
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors that abort generation for an element
///
/// Missing options are never errors; they resolve to fallbacks. The only
/// failures are on the output side, and they are never retried.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeneratorError {
    /// The sink refused to create an artifact
    #[error("Failed to open artifact {artifact}")]
    OpenSink {
        artifact: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing an opened artifact failed
    #[error("Failed to write artifact {artifact}")]
    Write {
        artifact: String,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    /// Create a new sink acquisition error
    pub fn open_sink(artifact: impl Into<String>, source: std::io::Error) -> Self {
        Self::OpenSink {
            artifact: artifact.into(),
            source,
        }
    }

    /// Create a new write error
    pub fn write(artifact: impl Into<String>, source: std::io::Error) -> Self {
        Self::Write {
            artifact: artifact.into(),
            source,
        }
    }

    /// Name of the artifact that failed
    pub fn artifact(&self) -> &str {
        match self {
            Self::OpenSink { artifact, .. } | Self::Write { artifact, .. } => artifact,
        }
    }
}
