use thiserror::Error;

/// Raised when raw text does not match the grammar of the requested type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{input}' is not a valid {type_name}: {reason}")]
pub struct ParseError {
    /// Text exactly as it was handed to the parser
    pub input: String,
    /// Human-readable name of the target type
    pub type_name: &'static str,
    /// Why the text was rejected
    pub reason: String,
}

impl ParseError {
    pub fn new(
        input: impl Into<String>,
        type_name: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            type_name,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("A parser is already registered for {type_name}")]
    DuplicateParser { type_name: &'static str },
}
