use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use typed_prompt::{Decimal, PromptConfig, TypedPrompt};

/// Ask for a typed value on the console and print it once it parses
#[derive(Parser, Debug)]
#[command(name = "typed-prompt", version, about)]
struct Cli {
    /// JSON file with prompt settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Give up after this many rejected answers (0 = never)
    #[arg(long, global = true)]
    max_attempts: Option<u32>,

    /// Line printed after a rejected answer
    #[arg(long, global = true)]
    retry_notice: Option<String>,

    /// Exit with an error when input ends instead of waiting for more
    #[arg(long, global = true)]
    fail_on_eof: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prompt until the answer parses as KIND, then print it
    Ask {
        #[arg(value_enum)]
        kind: Kind,
        message: String,
    },
    /// Print a message
    Say { message: String },
    /// List the value kinds `ask` understands
    Kinds,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Text,
    Bool,
    Int,
    Float,
    Double,
    Decimal,
}

impl Kind {
    fn describe(self) -> &'static str {
        match self {
            Kind::Text => "any line of text",
            Kind::Bool => "true or false, any case",
            Kind::Int => "32-bit signed integer",
            Kind::Float => "single-precision number",
            Kind::Double => "double-precision number",
            Kind::Decimal => "exact decimal number",
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut prompt = TypedPrompt::builder().config(config).stdio();

    match cli.command {
        Command::Ask { kind, message } => ask_kind(&mut prompt, kind, &message),
        Command::Say { message } => Ok(prompt.send(&message)?),
        Command::Kinds => {
            for kind in Kind::value_variants() {
                if let Some(name) = kind.to_possible_value() {
                    prompt.send(&format!("{:<8} {}", name.get_name(), kind.describe()))?;
                }
            }
            Ok(())
        }
    }
}

/// Prompt for `kind` and echo the parsed value back through the prompt
fn ask_kind<R: BufRead, W: Write>(
    prompt: &mut TypedPrompt<R, W>,
    kind: Kind,
    message: &str,
) -> Result<()> {
    match kind {
        Kind::Text => ask::<String, _, _>(prompt, message),
        Kind::Bool => ask::<bool, _, _>(prompt, message),
        Kind::Int => ask::<i32, _, _>(prompt, message),
        Kind::Float => ask::<f32, _, _>(prompt, message),
        Kind::Double => ask::<f64, _, _>(prompt, message),
        Kind::Decimal => ask::<Decimal, _, _>(prompt, message),
    }
}

fn ask<T, R, W>(prompt: &mut TypedPrompt<R, W>, message: &str) -> Result<()>
where
    T: Display + 'static,
    R: BufRead,
    W: Write,
{
    let value = prompt
        .request::<T>(message)
        .context("no value was entered")?;
    prompt.send(&value.to_string())?;
    Ok(())
}

/// Config file first, then command-line overrides
fn load_config(cli: &Cli) -> Result<PromptConfig> {
    let mut config = match &cli.config {
        Some(path) => PromptConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PromptConfig::default(),
    };

    if let Some(attempts) = cli.max_attempts {
        config.max_attempts = Some(attempts);
    }
    if let Some(notice) = &cli.retry_notice {
        config.retry_notice = notice.clone();
    }
    if cli.fail_on_eof {
        config.fail_on_eof = true;
    }

    Ok(config)
}
