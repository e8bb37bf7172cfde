use crate::parser::RegistryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("No parser is registered for {type_name}")]
    UnsupportedType { type_name: &'static str },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Input stream closed before a value was entered")]
    InputClosed,

    #[error("No valid {type_name} after {attempts} attempts")]
    AttemptsExhausted {
        type_name: &'static str,
        attempts: u32,
    },

    #[error("Invalid prompt configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
