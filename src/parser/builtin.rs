use super::{ParseError, ValueParser};
use rust_decimal::Decimal;
use std::fmt::Display;
use std::str::FromStr;

/// Identity parser: every line is valid text
pub struct TextParser;

impl ValueParser<String> for TextParser {
    fn parse(&self, raw: &str) -> Result<String, ParseError> {
        Ok(raw.to_string())
    }
}

/// Accepts `true` / `false` in any letter case
pub struct BooleanParser;

impl ValueParser<bool> for BooleanParser {
    fn parse(&self, raw: &str) -> Result<bool, ParseError> {
        let text = raw.trim();
        if text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ParseError::new(raw, "boolean", "expected 'true' or 'false'"))
        }
    }
}

/// Base-10 32-bit signed integer
pub struct IntegerParser;

impl ValueParser<i32> for IntegerParser {
    fn parse(&self, raw: &str) -> Result<i32, ParseError> {
        parse_from_str(raw, "integer")
    }
}

/// Single-precision float, decimal or scientific notation
pub struct FloatParser;

impl ValueParser<f32> for FloatParser {
    fn parse(&self, raw: &str) -> Result<f32, ParseError> {
        parse_from_str(raw, "single-precision number")
    }
}

/// Double-precision float, decimal or scientific notation
pub struct DoubleParser;

impl ValueParser<f64> for DoubleParser {
    fn parse(&self, raw: &str) -> Result<f64, ParseError> {
        parse_from_str(raw, "double-precision number")
    }
}

/// Exact base-10 decimal
///
/// Rejects literals that would need rounding to fit (more than 28
/// fractional digits or a mantissa wider than 96 bits) and `_` digit
/// separators, which `Decimal::from_str_exact` would otherwise skip.
pub struct DecimalParser;

impl ValueParser<Decimal> for DecimalParser {
    fn parse(&self, raw: &str) -> Result<Decimal, ParseError> {
        let text = raw.trim();
        if text.contains('_') {
            return Err(ParseError::new(raw, "decimal", "digit separators are not allowed"));
        }
        Decimal::from_str_exact(text)
            .map_err(|e| ParseError::new(raw, "decimal", e.to_string()))
    }
}

/// Surrounding whitespace is ignored, the way a human types numbers
fn parse_from_str<T>(raw: &str, type_name: &'static str) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ParseError::new(raw, type_name, e.to_string()))
}
