// Central error aggregation module. This file defines the global
// `RelenvError` and re-exports commonly used error types under
// `crate::errors::*`.
pub mod env;
pub mod env_toml;
pub mod relenv;

pub use env::EnvError;
pub use env_toml::EnvTomlError;
pub use env_toml::ValidationResult;

pub use relenv::RelenvError;
pub type Result<T> = std::result::Result<T, RelenvError>;
