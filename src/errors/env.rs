use thiserror::Error;

/// Errors raised while reading environment values or dispatching tools.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvError {
    #[error("Missing environment key: {0}")]
    MissingKey(String),

    #[error("Environment key {key} holds a {found}, expected a {expected}")]
    WrongKind {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Tool {tool} called with wrong arguments, expected {expected}")]
    BadToolArgs {
        tool: String,
        expected: &'static str,
    },
}
