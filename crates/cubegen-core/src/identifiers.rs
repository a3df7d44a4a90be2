//! Names derived from an element's simple name

use crate::options::{ProcessingOptions, ResolvedOptions};
use serde::Serialize;

pub const PLUGIN_CLASS_PREFIX: &str = "Plugin";
pub const QUALIFIED_ID_PREFIX: &str = "cubeengine-";
pub const DISPLAY_NAME_PREFIX: &str = "CubeEngine - ";

/// Generated names for one element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifiers {
    /// `Plugin<SimpleName>`
    pub class_name: String,
    /// Upper-cased simple name, prefix of the generated constants
    pub upper_name: String,
    /// `cubeengine-<id>`
    pub qualified_id: String,
    /// `CubeEngine - <name>`
    pub display_name: String,
}

impl Identifiers {
    /// Build the names from options already resolved for `simple_name`
    pub fn new(simple_name: &str, resolved: &ResolvedOptions) -> Self {
        Self {
            class_name: format!("{}{}", PLUGIN_CLASS_PREFIX, simple_name),
            upper_name: simple_name.to_uppercase(),
            qualified_id: format!("{}{}", QUALIFIED_ID_PREFIX, resolved.module_id),
            display_name: format!("{}{}", DISPLAY_NAME_PREFIX, resolved.module_name),
        }
    }

    /// Name of the generated id constant
    pub fn id_constant(&self) -> String {
        format!("{}_ID", self.upper_name)
    }

    /// Name of the generated version constant
    pub fn version_constant(&self) -> String {
        format!("{}_VERSION", self.upper_name)
    }
}

/// Derive the generated names. Pure in `(simple_name, options)`.
pub fn derive_identifiers(simple_name: &str, options: &ProcessingOptions) -> Identifiers {
    Identifiers::new(simple_name, &options.resolve_for(simple_name))
}
