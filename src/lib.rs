// Public API exports
pub mod parser;
pub mod prompt;

// Re-export main types for convenience
pub use parser::{
    BooleanParser, DecimalParser, DoubleParser, FloatParser, IntegerParser, ParseError,
    ParserRegistry, RegistryError, TextParser, TypeKey, ValueParser,
};

pub use prompt::{PromptConfig, PromptError, TypedPrompt, TypedPromptBuilder, DEFAULT_RETRY_NOTICE};

pub use rust_decimal::Decimal;
