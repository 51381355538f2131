use crate::errors::EnvError;
use crate::tools::{Tool, ToolArgs};
use crate::types::env::{EnvState, Registration};

pub const ADD_LIBRARY: &str = "addLibrary";

/// `addLibrary`: appends libraries to the consumer link line.
pub struct AddLibrary;

impl Tool for AddLibrary {
    fn name(&self) -> &str {
        ADD_LIBRARY
    }

    fn run(&self, state: &mut EnvState, args: &ToolArgs) -> Result<Registration, EnvError> {
        let ToolArgs::Library { library } = args else {
            return Err(EnvError::BadToolArgs {
                tool: ADD_LIBRARY.to_string(),
                expected: "library = [..]",
            });
        };
        state.linked_libraries.extend(library.iter().cloned());
        Ok(state.record(Registration::Library {
            names: library.clone(),
        }))
    }
}
