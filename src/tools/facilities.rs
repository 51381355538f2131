use crate::errors::EnvError;
use crate::tools::{Tool, ToolArgs};
use crate::types::env::{EnvState, Registration};

pub const FACILITIES_LIB: &str = "facilitiesLib";

const FACILITIES_LIBRARY: &str = "facilities";

/// `facilitiesLib`: pulls in the facilities package for consumers. The
/// facilities package declares no further dependencies, so the pull reduces
/// to linking its library.
pub struct FacilitiesLib;

impl Tool for FacilitiesLib {
    fn name(&self) -> &str {
        FACILITIES_LIB
    }

    fn run(&self, state: &mut EnvState, args: &ToolArgs) -> Result<Registration, EnvError> {
        if *args != ToolArgs::None {
            return Err(EnvError::BadToolArgs {
                tool: FACILITIES_LIB.to_string(),
                expected: "no arguments",
            });
        }
        state
            .linked_libraries
            .push(FACILITIES_LIBRARY.to_string());
        Ok(state.record(Registration::PackageDeps {
            package: FACILITIES_LIBRARY.to_string(),
        }))
    }
}
