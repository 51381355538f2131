pub mod add_library;
pub mod facilities;
pub mod find_pkg_path;

pub use add_library::{AddLibrary, ADD_LIBRARY};
pub use facilities::{FacilitiesLib, FACILITIES_LIB};
pub use find_pkg_path::{FindPkgPath, FIND_PKG_PATH};

use std::collections::BTreeMap;

use crate::errors::EnvError;
use crate::types::env::{EnvState, Registration};

/// Typed stand-in for the keyword arguments a build tool is invoked with.
/// Each tool accepts exactly one shape and rejects the rest.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolArgs {
    None,
    Library { library: Vec<String> },
    Package { package: String },
}

impl ToolArgs {
    pub fn library<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ToolArgs::Library {
            library: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn package(name: impl Into<String>) -> Self {
        ToolArgs::Package {
            package: name.into(),
        }
    }
}

/// A named build effect invocable against the environment. Tools mutate the
/// environment state and record what they did in its registration log.
pub trait Tool: Send + Sync + 'static {
    fn name(&self) -> &str;
    fn run(&self, state: &mut EnvState, args: &ToolArgs) -> Result<Registration, EnvError>;
}

type BoxTool = Box<dyn Tool>;

/// Registry of tools, dispatched by name. The hosting framework registers
/// its own tools through the same seam the builtins use.
pub struct ToolRegistry {
    tools: BTreeMap<String, BoxTool>,
}

impl ToolRegistry {
    pub fn empty() -> Self {
        ToolRegistry {
            tools: BTreeMap::new(),
        }
    }

    /// Registry carrying the three framework tools package descriptors rely
    /// on: `addLibrary`, `findPkgPath` and `facilitiesLib`.
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(AddLibrary));
        registry.register(Box::new(FindPkgPath));
        registry.register(Box::new(FacilitiesLib));
        registry
    }

    pub fn register(&mut self, tool: BoxTool) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    pub fn names(&self) -> Vec<&String> {
        self.tools.keys().collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_builtin_tools()
    }
}
