use thiserror::Error;
use toml;

/// Crate-wide error type to avoid `Box<dyn Error>` in public APIs.
#[derive(Error, Debug)]
pub enum RelenvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML edit error: {0}")]
    TomlEdit(#[from] toml_edit::TomlError),

    #[error("TOML schema error: {0}")]
    TomlSchema(#[from] toml_edit::de::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Environment error: {0}")]
    Env(#[from] crate::errors::EnvError),

    #[error("Manifest error: {0}")]
    EnvToml(#[from] crate::errors::EnvTomlError),

    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("Package unavailable: {0}")]
    PackageUnavailable(String),
}
