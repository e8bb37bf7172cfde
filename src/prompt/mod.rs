mod config;
mod error;


pub use config::{PromptConfig, DEFAULT_RETRY_NOTICE};
pub use error::PromptError;

use crate::parser::{ParseError, ParserRegistry, TypeKey, ValueParser};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, error, info, warn};

/// Console prompt that only hands back values which parsed as the
/// requested type
///
/// Reads one line per attempt from `reader` and writes prompts,
/// diagnostics and `send` messages to `writer`, one line each.
pub struct TypedPrompt<R = StdinLock<'static>, W = Stdout> {
    reader: R,
    writer: W,
    registry: ParserRegistry,
    config: PromptConfig,
}

/// Mutable builder for constructing a prompt
pub struct TypedPromptBuilder {
    registry: ParserRegistry,
    config: PromptConfig,
}

impl TypedPromptBuilder {
    /// Create a new builder with the built-in parsers and default config
    pub fn new() -> Self {
        Self {
            registry: ParserRegistry::with_builtins(),
            config: PromptConfig::default(),
        }
    }

    /// Replace the whole config
    pub fn config(mut self, config: PromptConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the attempt limit (0 retries forever)
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.config.max_attempts = Some(attempts);
        self
    }

    /// Set the line printed after a rejected input
    pub fn retry_notice(mut self, notice: impl Into<String>) -> Self {
        self.config.retry_notice = notice.into();
        self
    }

    /// Surface end of stream as `PromptError::InputClosed`
    pub fn fail_on_eof(mut self, fail: bool) -> Self {
        self.config.fail_on_eof = fail;
        self
    }

    /// Start from an explicit registry instead of the built-ins
    pub fn registry(mut self, registry: ParserRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Bind the prompt to a reader and writer
    pub fn build<R: BufRead, W: Write>(self, reader: R, writer: W) -> TypedPrompt<R, W> {
        TypedPrompt {
            reader,
            writer,
            registry: self.registry,
            config: self.config,
        }
    }

    /// Bind the prompt to the process console
    pub fn stdio(self) -> TypedPrompt {
        self.build(io::stdin().lock(), io::stdout())
    }
}

impl Default for TypedPromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TypedPrompt {
    /// Prompt on stdin/stdout with the built-in parsers
    pub fn stdio() -> Self {
        TypedPromptBuilder::new().stdio()
    }

    pub fn builder() -> TypedPromptBuilder {
        TypedPromptBuilder::new()
    }
}

impl<R: BufRead, W: Write> TypedPrompt<R, W> {
    /// Prompt on any line source and sink with the built-in parsers
    pub fn new(reader: R, writer: W) -> Self {
        TypedPromptBuilder::new().build(reader, writer)
    }

    /// Write `message` followed by a newline
    pub fn send(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Prompt with `message` until a line parses as `T`
    ///
    /// Rejected input is reported on the writer followed by the retry
    /// notice, and the prompt is shown again. Parse failures never reach the
    /// caller. The errors that do are `UnsupportedType` (no parser for `T`),
    /// `Io`, plus `InputClosed` and `AttemptsExhausted` when the config asks
    /// for them.
    pub fn request<T: 'static>(&mut self, message: &str) -> Result<T, PromptError> {
        let type_name = TypeKey::of::<T>().name();
        let limit = self.config.attempt_limit();
        let mut attempts: u32 = 0;

        loop {
            attempts = next_attempt(attempts);
            debug!(type_name, attempt = attempts, "prompting for value");

            self.send(message)?;
            let line = self.read_line()?;

            let outcome = match self.registry.get::<T>() {
                Some(parser) => parser.parse(&line),
                None => {
                    error!(type_name, "request for type without a parser");
                    let unsupported = PromptError::UnsupportedType { type_name };
                    self.send(&unsupported.to_string())?;
                    return Err(unsupported);
                }
            };

            match outcome {
                Ok(value) => {
                    debug!(type_name, attempts, "accepted input");
                    return Ok(value);
                }
                Err(rejection) => {
                    warn!(type_name, attempt = attempts, input = %rejection.input, "rejected input");
                    self.report_rejection(&rejection)?;

                    if limit.is_some_and(|max| attempts >= max) {
                        return Err(PromptError::AttemptsExhausted {
                            type_name,
                            attempts,
                        });
                    }

                    writeln!(self.writer, "{}", self.config.retry_notice)?;
                    self.writer.flush()?;
                }
            }
        }
    }

    /// Add a parser for a custom type
    ///
    /// Fails with `RegistryError::DuplicateParser` if `T` already has one;
    /// the registry is left unchanged.
    pub fn register_parser<T, P>(&mut self, parser: P) -> Result<(), PromptError>
    where
        T: 'static,
        P: ValueParser<T> + 'static,
    {
        self.registry.register::<T, P>(parser)?;
        info!(type_name = TypeKey::of::<T>().name(), "registered parser");
        Ok(())
    }

    pub fn supports<T: 'static>(&self) -> bool {
        self.registry.contains::<T>()
    }

    pub fn parser_count(&self) -> usize {
        self.registry.parser_count()
    }

    pub fn registered_types(&self) -> Vec<&'static str> {
        self.registry.registered_types()
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Release the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Block until a non-empty line arrives; empty lines and end of stream
    /// are skipped without prompting again
    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                if self.config.fail_on_eof {
                    return Err(PromptError::InputClosed);
                }
                // A terminal reports EOF on Ctrl-D and keeps reading afterwards
                continue;
            }

            let line = buf.trim_end_matches(&['\r', '\n'][..]);
            if !line.is_empty() {
                return Ok(line.to_string());
            }
            debug!("skipping empty input line");
        }
    }

    fn report_rejection(&mut self, rejection: &ParseError) -> Result<(), PromptError> {
        self.send(&rejection.to_string())
    }
}

/// Attempt counter that sticks at `u32::MAX` when retrying forever
pub(crate) fn next_attempt(attempts: u32) -> u32 {
    attempts.saturating_add(1)
}
