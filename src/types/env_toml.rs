pub mod sections;
pub use sections::*;

mod tests;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use self::sections::libs::LibsSection;
use self::sections::platform::PlatformSection;
use crate::errors::EnvTomlError;
use crate::errors::ValidationResult;

/// File name the release configuration is read from and written to.
pub const MANIFEST_FILE: &str = "relenv.toml";

/// EnvToml: the release configuration that seeds a build environment,
/// inspired by pyproject.toml format with hierarchical sections.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EnvToml {
    pub platform: PlatformSection,
    pub libs: LibsSection,
    /// Free-form tool configuration table, passed through untouched.
    pub tool: Option<serde_json::Value>,
    #[serde(skip)]
    pub raw: String,
}

impl Default for EnvToml {
    fn default() -> Self {
        EnvToml {
            platform: PlatformSection::default(),
            libs: LibsSection::default(),
            tool: None,
            raw: String::new(),
        }
    }
}

impl EnvToml {
    /// Parse from raw TOML text, keeping the original text around. Parsing
    /// goes through `toml_edit` so later format-preserving edits stay
    /// possible.
    pub fn from_string(raw: String) -> Result<Self, EnvTomlError> {
        if raw.trim().is_empty() {
            return Err(EnvTomlError::EmptyFile);
        }
        let manifest = toml_edit::DocumentMut::from_str(&raw)
            .map_err(EnvTomlError::TomlSyntax)?;
        let manifest = toml_edit::de::from_document(manifest)
            .map_err(EnvTomlError::TomlSchema)?;
        Ok(Self { raw, ..manifest })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self, EnvTomlError> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(EnvTomlError::NotFound);
        }
        let raw = fs::read_to_string(&path)?;
        Self::from_string(raw)
    }

    pub fn write_to_dir(&self, dir: &Path) -> Result<(), EnvTomlError> {
        let content = self.to_toml()?;
        fs::write(dir.join(MANIFEST_FILE), content)?;
        Ok(())
    }

    /// Package and library names: leading letter, then letters, digits,
    /// `_`, `.` or `-`.
    pub fn validate_package_name(name: &str) -> ValidationResult {
        let re = Regex::new(r"^[a-zA-Z][a-zA-Z0-9._-]*$").unwrap();
        if re.is_match(name) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(format!("invalid package name: {}", name))
        }
    }

    /// Structural checks beyond what the schema enforces.
    pub fn validate(&self) -> Result<(), EnvTomlError> {
        if self.platform.name.trim().is_empty() {
            return Err(EnvTomlError::MissingPlatformName);
        }
        for name in self.libs.gaudi.iter().chain(self.libs.root.iter()) {
            if let ValidationResult::Invalid(_) = Self::validate_package_name(name) {
                return Err(EnvTomlError::InvalidPackageName(name.clone()));
            }
        }
        Ok(())
    }
}
