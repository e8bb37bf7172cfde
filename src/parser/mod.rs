mod builtin;
mod error;
mod registry;


pub use builtin::{BooleanParser, DecimalParser, DoubleParser, FloatParser, IntegerParser, TextParser};
pub use error::{ParseError, RegistryError};
pub use registry::{ParserRegistry, TypeKey};

/// Core trait that all value parsers must implement
///
/// Any `Fn(&str) -> Result<T, ParseError>` closure or function is a parser,
/// so custom types rarely need a dedicated struct.
pub trait ValueParser<T>: Send + Sync {
    /// Parse one line of user input into a value
    ///
    /// # Arguments
    /// * `raw` - The line as typed, with the line terminator removed
    ///
    /// # Returns
    /// The parsed value, or a `ParseError` describing why the text was rejected
    fn parse(&self, raw: &str) -> Result<T, ParseError>;
}

impl<T, F> ValueParser<T> for F
where
    F: Fn(&str) -> Result<T, ParseError> + Send + Sync,
{
    fn parse(&self, raw: &str) -> Result<T, ParseError> {
        self(raw)
    }
}
