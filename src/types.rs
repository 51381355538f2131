pub mod env;
pub mod env_toml;
pub mod options;
pub mod value;
