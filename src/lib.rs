pub mod errors;
pub mod registrar;
pub mod tools;
pub mod types;
pub mod utils;

pub use errors::{RelenvError, Result};
pub use registrar::{DescriptorSet, NtupleWriterSvc, PackageDescriptor};
pub use types::env::{BuildEnv, EnvState, Registration};
pub use types::env_toml::EnvToml;
pub use types::options::RegisterOptions;
pub use types::value::ConfigValue;
