//! Build options and their fallbacks
//!
//! Options arrive as a flat string map (javac `-A` style). Nothing here
//! fails: an absent option resolves to its documented fallback.

use std::collections::BTreeMap;

pub const OPTION_VERSION: &str = "cubeengine.module.version";
pub const OPTION_ID: &str = "cubeengine.module.id";
pub const OPTION_NAME: &str = "cubeengine.module.name";
pub const OPTION_DESCRIPTION: &str = "cubeengine.module.description";
pub const OPTION_TEAM: &str = "cubeengine.module.team";
pub const OPTION_URL: &str = "cubeengine.module.url";
pub const OPTION_SOURCE_VERSION: &str = "cubeengine.module.sourceversion";
pub const OPTION_LIBCUBE_VERSION: &str = "cubeengine.module.libcube.version";
pub const OPTION_SPONGE_VERSION: &str = "cubeengine.module.sponge.version";

/// Fallback for every option except id and url
pub const UNKNOWN: &str = "unknown";

/// Left in place when the build did not inject a git revision
pub const SOURCE_VERSION_PLACEHOLDER: &str = "${githead.branch}-${githead.commit}";

/// Every option key the generator understands
pub const SUPPORTED_OPTIONS: &[&str] = &[
    OPTION_VERSION,
    OPTION_ID,
    OPTION_NAME,
    OPTION_DESCRIPTION,
    OPTION_TEAM,
    OPTION_URL,
    OPTION_SOURCE_VERSION,
    OPTION_LIBCUBE_VERSION,
    OPTION_SPONGE_VERSION,
];

/// Read-only option map shared by every element of a round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingOptions {
    values: BTreeMap<String, String>,
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys that are not in [`SUPPORTED_OPTIONS`]
    pub fn unsupported_keys(&self) -> Vec<&str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|key| !SUPPORTED_OPTIONS.contains(key))
            .collect()
    }

    /// Look up `name`, falling back to `fallback` when absent.
    ///
    /// The source revision also falls back to [`UNKNOWN`] when it still holds
    /// [`SOURCE_VERSION_PLACEHOLDER`].
    pub fn resolve(&self, name: &str, fallback: &str) -> String {
        match self.get(name) {
            Some(SOURCE_VERSION_PLACEHOLDER) if name == OPTION_SOURCE_VERSION => UNKNOWN.to_string(),
            Some(value) => value.to_string(),
            None => fallback.to_string(),
        }
    }

    pub fn version(&self) -> String {
        self.resolve(OPTION_VERSION, UNKNOWN)
    }

    /// Module id, defaulting to the lower-cased simple name
    pub fn module_id(&self, simple_name: &str) -> String {
        self.resolve(OPTION_ID, &simple_name.to_lowercase())
    }

    pub fn module_name(&self) -> String {
        self.resolve(OPTION_NAME, UNKNOWN)
    }

    pub fn description(&self) -> String {
        self.resolve(OPTION_DESCRIPTION, UNKNOWN)
    }

    pub fn team(&self) -> String {
        self.resolve(OPTION_TEAM, UNKNOWN)
    }

    pub fn url(&self) -> String {
        self.resolve(OPTION_URL, "")
    }

    pub fn source_version(&self) -> String {
        self.resolve(OPTION_SOURCE_VERSION, UNKNOWN)
    }

    pub fn libcube_version(&self) -> String {
        self.resolve(OPTION_LIBCUBE_VERSION, UNKNOWN)
    }

    /// Resolve every option for one element
    pub fn resolve_for(&self, simple_name: &str) -> ResolvedOptions {
        ResolvedOptions {
            version: self.version(),
            module_id: self.module_id(simple_name),
            module_name: self.module_name(),
            description: self.description(),
            team: self.team(),
            url: self.url(),
            source_version: self.source_version(),
            libcube_version: self.libcube_version(),
        }
    }
}

impl From<BTreeMap<String, String>> for ProcessingOptions {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

/// All options resolved for a single element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub version: String,
    pub module_id: String,
    pub module_name: String,
    pub description: String,
    pub team: String,
    pub url: String,
    pub source_version: String,
    pub libcube_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_options_use_fallbacks() {
        let options = ProcessingOptions::new();

        assert_eq!(
            options.resolve_for("Economy"),
            ResolvedOptions {
                version: "unknown".to_string(),
                module_id: "economy".to_string(),
                module_name: "unknown".to_string(),
                description: "unknown".to_string(),
                team: "unknown".to_string(),
                url: String::new(),
                source_version: "unknown".to_string(),
                libcube_version: "unknown".to_string(),
            }
        );
    }

    #[test]
    fn test_present_option_wins_over_fallback() {
        let options = ProcessingOptions::new()
            .with(OPTION_ID, "eco")
            .with(OPTION_URL, "https://cubeengine.org");

        assert_eq!(options.module_id("Economy"), "eco");
        assert_eq!(options.url(), "https://cubeengine.org");
        assert_eq!(options.resolve("not.an.option", "fallback"), "fallback");
    }

    #[test]
    fn test_source_version_placeholder_is_unknown() {
        let options = ProcessingOptions::new().with(OPTION_SOURCE_VERSION, SOURCE_VERSION_PLACEHOLDER);
        assert_eq!(options.source_version(), "unknown");

        let options = ProcessingOptions::new().with(OPTION_SOURCE_VERSION, "master-1a2b3c4");
        assert_eq!(options.source_version(), "master-1a2b3c4");
    }

    #[test]
    fn test_placeholder_only_special_for_source_version() {
        let options = ProcessingOptions::new().with(OPTION_VERSION, SOURCE_VERSION_PLACEHOLDER);
        assert_eq!(options.version(), SOURCE_VERSION_PLACEHOLDER);
    }

    #[test]
    fn test_empty_value_is_not_absent() {
        let options = ProcessingOptions::new().with(OPTION_NAME, "");
        assert_eq!(options.module_name(), "");
    }

    #[test]
    fn test_unsupported_keys() {
        let options = ProcessingOptions::new()
            .with(OPTION_VERSION, "1.0")
            .with(OPTION_SPONGE_VERSION, "7.1")
            .with("cubeengine.module.colour", "blue");

        assert_eq!(options.unsupported_keys(), vec!["cubeengine.module.colour"]);
    }
}
