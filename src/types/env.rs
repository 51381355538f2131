use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::EnvError;
use crate::tools::{ToolArgs, ToolRegistry};
use crate::types::env_toml::EnvToml;
use crate::types::value::ConfigValue;

/// Well-known environment keys seeded from the release configuration. The
/// spellings match what the hosting build framework threads through every
/// package descriptor.
pub mod keys {
    pub const PLATFORM: &str = "PLATFORM";
    pub const CONTAINER_NAME: &str = "CONTAINERNAME";
    pub const GAUDI_LIBS: &str = "gaudiLibs";
    pub const ROOT_LIBS: &str = "rootLibs";
}

/// One effect a tool recorded against the environment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Registration {
    /// Libraries appended to the consumer link line.
    Library { names: Vec<String> },
    /// A package source path added to the include search path.
    PackagePath { package: String },
    /// Another package's dependency declarations pulled in wholesale.
    PackageDeps { package: String },
}

/// Mutable environment state the tools operate on. Split out of `BuildEnv`
/// so a tool can borrow it mutably while the registry owning the tool is
/// borrowed immutably.
#[derive(Debug, Default, Clone)]
pub struct EnvState {
    values: BTreeMap<String, ConfigValue>,
    /// Libraries consumers must link, in registration order. Duplicates are
    /// kept: link order and pruning are the downstream linker step's business.
    pub linked_libraries: Vec<String>,
    /// Package source paths added to the include search path.
    pub package_paths: Vec<String>,
    registrations: Vec<Registration>,
}

impl EnvState {
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Hard string lookup. A missing key is the caller's precondition
    /// violation and surfaces as an error.
    pub fn get_str(&self, key: &str) -> Result<&str, EnvError> {
        match self.values.get(key) {
            Some(ConfigValue::Str(s)) => Ok(s.as_str()),
            Some(other) => Err(EnvError::WrongKind {
                key: key.to_string(),
                expected: "string",
                found: other.kind(),
            }),
            None => Err(EnvError::MissingKey(key.to_string())),
        }
    }

    /// Soft string lookup with a default for absent or non-string values.
    pub fn get_str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.values.get(key) {
            Some(ConfigValue::Str(s)) => s.as_str(),
            _ => default,
        }
    }

    pub fn get_list(&self, key: &str) -> Result<&[String], EnvError> {
        match self.values.get(key) {
            Some(ConfigValue::List(items)) => Ok(items.as_slice()),
            Some(other) => Err(EnvError::WrongKind {
                key: key.to_string(),
                expected: "list",
                found: other.kind(),
            }),
            None => Err(EnvError::MissingKey(key.to_string())),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Append a registration to the ordered log and hand a copy back to the
    /// recording tool so callers can collect the actions they caused.
    pub fn record(&mut self, registration: Registration) -> Registration {
        self.registrations.push(registration.clone());
        registration
    }

    pub fn registrations(&self) -> &[Registration] {
        self.registrations.as_slice()
    }
}

/// The build environment a package descriptor registers against: typed
/// configuration values plus the set of named tools invocable against them.
/// Borrowed mutably for the duration of one `generate` call; registrations
/// accumulate in place.
pub struct BuildEnv {
    state: EnvState,
    tools: ToolRegistry,
}

impl BuildEnv {
    /// An empty environment carrying the builtin framework tools.
    pub fn new() -> Self {
        Self::with_tools(ToolRegistry::with_builtin_tools())
    }

    pub fn with_tools(tools: ToolRegistry) -> Self {
        BuildEnv {
            state: EnvState::default(),
            tools,
        }
    }

    /// Seed the well-known keys from a release manifest.
    pub fn from_manifest(manifest: &EnvToml) -> Self {
        let mut env = Self::new();
        env.state.set(keys::PLATFORM, manifest.platform.name.clone());
        env.state.set(
            keys::CONTAINER_NAME,
            manifest.platform.container.clone().unwrap_or_default(),
        );
        env.state
            .set(keys::GAUDI_LIBS, manifest.libs.gaudi.clone());
        env.state.set(keys::ROOT_LIBS, manifest.libs.root.clone());
        env
    }

    pub fn state(&self) -> &EnvState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EnvState {
        &mut self.state
    }

    /// Invoke a registered tool by name. The tool mutates the environment
    /// state and returns the registration it recorded.
    pub fn tool(&mut self, name: &str, args: &ToolArgs) -> Result<Registration, EnvError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| EnvError::ToolNotFound(name.to_string()))?;
        tool.run(&mut self.state, args)
    }

    pub fn get_str(&self, key: &str) -> Result<&str, EnvError> {
        self.state.get_str(key)
    }

    pub fn get_str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.state.get_str_or(key, default)
    }

    pub fn get_list(&self, key: &str) -> Result<&[String], EnvError> {
        self.state.get_list(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.state.set(key, value);
    }

    pub fn registrations(&self) -> &[Registration] {
        self.state.registrations()
    }
}

impl Default for BuildEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_str_missing() {
        let env = BuildEnv::new();
        assert_eq!(
            env.get_str(keys::PLATFORM),
            Err(EnvError::MissingKey("PLATFORM".to_string()))
        );
    }

    #[test]
    fn test_get_str_wrong_kind() {
        let mut env = BuildEnv::new();
        env.set(keys::GAUDI_LIBS, vec!["GaudiKernel"]);
        assert!(matches!(
            env.get_str(keys::GAUDI_LIBS),
            Err(EnvError::WrongKind { expected: "string", .. })
        ));
    }

    #[test]
    fn test_get_str_or_default() {
        let mut env = BuildEnv::new();
        assert_eq!(env.get_str_or(keys::CONTAINER_NAME, ""), "");
        env.set(keys::CONTAINER_NAME, "GlastRelease");
        assert_eq!(env.get_str_or(keys::CONTAINER_NAME, ""), "GlastRelease");
    }

    #[test]
    fn test_from_manifest_seeds_keys() {
        let manifest = EnvToml::default();
        let env = BuildEnv::from_manifest(&manifest);
        assert_eq!(env.get_str(keys::PLATFORM).unwrap(), "linux");
        assert_eq!(env.get_str_or(keys::CONTAINER_NAME, ""), "");
        assert!(!env.get_list(keys::GAUDI_LIBS).unwrap().is_empty());
        assert!(!env.get_list(keys::ROOT_LIBS).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_tool() {
        let mut env = BuildEnv::new();
        let err = env.tool("linkFortran", &crate::tools::ToolArgs::None);
        assert_eq!(
            err,
            Err(EnvError::ToolNotFound("linkFortran".to_string()))
        );
    }
}
