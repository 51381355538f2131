use crate::errors::EnvError;
use crate::tools::{Tool, ToolArgs};
use crate::types::env::{EnvState, Registration};

pub const FIND_PKG_PATH: &str = "findPkgPath";

/// `findPkgPath`: adds a package's source path to the include search path.
/// Container builds on Windows need this; every other layout resolves
/// headers through the release root. No value is returned to the caller.
pub struct FindPkgPath;

impl Tool for FindPkgPath {
    fn name(&self) -> &str {
        FIND_PKG_PATH
    }

    fn run(&self, state: &mut EnvState, args: &ToolArgs) -> Result<Registration, EnvError> {
        let ToolArgs::Package { package } = args else {
            return Err(EnvError::BadToolArgs {
                tool: FIND_PKG_PATH.to_string(),
                expected: "package = \"..\"",
            });
        };
        state.package_paths.push(package.clone());
        Ok(state.record(Registration::PackagePath {
            package: package.clone(),
        }))
    }
}
