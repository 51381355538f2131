use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvTomlError {
	#[error("TOML syntax error: {0}")]
	TomlSyntax(#[from] toml_edit::TomlError),
	#[error("TOML schema error: {0}")]
	TomlSchema(#[from] toml_edit::de::Error),
	#[error("TOML deserialization error: {0}")]
	TomlDe(#[from] toml::de::Error),
	#[error("TOML serialization error: {0}")]
	TomlSer(#[from] toml::ser::Error),
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("relenv.toml not found")]
	NotFound,
	#[error("relenv.toml is empty")]
	EmptyFile,
	#[error("Missing required field: platform.name")]
	MissingPlatformName,
	#[error("Invalid package name: {0}")]
	InvalidPackageName(String),
}

#[derive(Debug, PartialEq)]
pub enum ValidationResult {
	Valid,
	Invalid(String),
}
