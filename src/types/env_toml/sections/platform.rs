use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
/// Target platform the environment is built for.
pub struct PlatformSection {
    /// Platform name as the build framework reports it (e.g. "linux",
    /// "win32", "darwin").
    pub name: String,
    /// Name of the containing release when packages build as one container
    /// (e.g. "GlastRelease"); absent for standalone package builds.
    pub container: Option<String>,
}

impl Default for PlatformSection {
    fn default() -> Self {
        PlatformSection {
            name: "linux".to_string(),
            container: None,
        }
    }
}
