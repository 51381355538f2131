use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
/// Shared library lists every package in the release links against.
pub struct LibsSection {
    /// Gaudi framework libraries.
    pub gaudi: Vec<String>,
    /// ROOT I/O and analysis libraries.
    pub root: Vec<String>,
}

impl Default for LibsSection {
    fn default() -> Self {
        LibsSection {
            gaudi: vec!["GaudiKernel".to_string()],
            root: vec![
                "Core".to_string(),
                "Tree".to_string(),
                "Hist".to_string(),
                "Matrix".to_string(),
                "Physics".to_string(),
            ],
        }
    }
}
