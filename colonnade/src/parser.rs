//! This module defines the trait [ColumnParser],
//! which converts raw strings into column values,
//! and its text implementation [TextParser].

use std::{fmt::Debug, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{columnar::text_column::TextColumn, error::ReadingError};

/// Raw strings that are read as missing values unless configured otherwise.
pub const DEFAULT_MISSING_INDICATORS: &[&str] = &["NaN", "*", "NA", "null", "N/A", ""];

/// Converts raw strings into values of some column type.
pub trait ColumnParser: Debug {
    /// Type of the parsed values
    type Value;

    /// Returns true if `raw` denotes a missing value.
    fn is_missing(&self, raw: &str) -> bool;

    /// Parse a raw string.
    fn parse(&self, raw: &str) -> Result<Self::Value, ReadingError>;
}

/// Options that control how raw strings are turned into column values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Raw strings that denote a missing value
    pub missing_indicators: Vec<String>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            missing_indicators: DEFAULT_MISSING_INDICATORS
                .iter()
                .map(|indicator| indicator.to_string())
                .collect(),
        }
    }
}

/// [ColumnParser] for text columns.
///
/// Every raw string is accepted as is,
/// except for missing indicators which become [TextColumn::MISSING_VALUE].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextParser {
    options: ParserOptions,
}

impl TextParser {
    /// Create a new [TextParser] using the given options.
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Return the options of this parser.
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }
}

impl ColumnParser for TextParser {
    type Value = String;

    fn is_missing(&self, raw: &str) -> bool {
        self.options
            .missing_indicators
            .iter()
            .any(|indicator| indicator == raw)
    }

    fn parse(&self, raw: &str) -> Result<String, ReadingError> {
        if self.is_missing(raw) {
            return Ok(TextColumn::MISSING_VALUE.to_string());
        }

        Ok(String::from_str(raw)?)
    }
}

#[cfg(test)]
mod test {
    use super::{ColumnParser, ParserOptions, TextParser};

    #[test]
    fn default_indicators_are_missing() {
        let parser = TextParser::default();

        for raw in ["NaN", "*", "NA", "null", "N/A", ""] {
            assert!(parser.is_missing(raw));
            assert_eq!(parser.parse(raw).unwrap(), "");
        }

        assert!(!parser.is_missing("na"));
        assert_eq!(parser.parse("hello world").unwrap(), "hello world");
    }

    #[test]
    fn custom_indicators() {
        let parser = TextParser::new(ParserOptions {
            missing_indicators: vec!["-".to_string()],
        });

        assert_eq!(parser.parse("-").unwrap(), "");
        assert_eq!(parser.parse("NA").unwrap(), "NA");
    }

    #[test]
    fn options_from_json() {
        let options: ParserOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ParserOptions::default());

        let options: ParserOptions =
            serde_json::from_str(r#"{"missing_indicators": ["-", "?"]}"#).unwrap();
        let parser = TextParser::new(options.clone());
        assert!(parser.is_missing("?"));
        assert!(!parser.is_missing("NA"));

        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"missing_indicators":["-","?"]}"#);
        assert_eq!(serde_json::from_str::<ParserOptions>(&json).unwrap(), options);
    }
}
