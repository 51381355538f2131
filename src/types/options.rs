use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
/// Options for a single `generate` call.
pub struct RegisterOptions {
    /// Register only this package's dependencies, not its own library.
    pub deps_only: bool,
}

impl RegisterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deps_only(mut self, deps_only: bool) -> Self {
        self.deps_only = deps_only;
        self
    }
}

impl Default for RegisterOptions {
    fn default() -> Self {
        RegisterOptions { deps_only: false }
    }
}
