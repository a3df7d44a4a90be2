//! Plugin wrapper generation for CubeEngine modules
//!
//! Every class annotated as a module (or as the core) gets a companion
//! `Plugin<Name>` wrapper that registers it with the Sponge plugin loader,
//! plus an empty English language resource.
//!
//! # Pipeline
//!
//! For each element the generator runs the same steps:
//! - resolve build options ([`ProcessingOptions`])
//! - merge declared dependencies with the implicit core dependency
//! - derive class and constant names ([`Identifiers`])
//! - render the wrapper source ([`render`])
//! - emit both artifacts through an [`ArtifactSink`]
//!
//! [`Processor`] drives the pipeline across a whole processing round.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod declaration;
pub mod dependency;
pub mod descriptor;
pub mod emit;
pub mod error;
pub mod identifiers;
pub mod options;
pub mod processor;
pub mod render;

// Re-exports
pub use declaration::{ElementKind, ModuleDeclaration};
pub use dependency::{merged_dependencies, DependencyDescriptor};
pub use descriptor::GeneratedDescriptor;
pub use emit::{emit, ArtifactSink, EmittedArtifacts, MemorySink};
pub use error::{GeneratorError, GeneratorResult};
pub use identifiers::{derive_identifiers, Identifiers};
pub use options::{ProcessingOptions, ResolvedOptions};
pub use processor::{ElementSource, GeneratedArtifact, Processor, RoundReport};
pub use render::render;
