//! Extraction of the bond term (in years) from free-text bond names.

use regex::Regex;

use crate::error::{BondError, BondResult};

/// Default term pattern: the first run of digits.
pub const DEFAULT_TERM_PATTERN: &str = r"(\d+)";

/// Parses the term in years from a bond name with a regular expression.
///
/// The first capture group is used when present, otherwise the whole match.
/// The captured text must be a positive integer.
///
/// ```rust
/// use ratebook_bonds::term::TermParser;
///
/// let parser = TermParser::default();
/// assert_eq!(parser.term_years("UK 10y Gilt").unwrap(), 10);
/// assert!(parser.term_years("UK Gilt").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TermParser {
    pattern: Regex,
}

impl TermParser {
    /// Compiles a custom term pattern.
    pub fn new(pattern: &str) -> BondResult<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            BondError::invalid_field("term pattern", pattern, e.to_string())
        })?;
        Ok(Self { pattern })
    }

    /// The pattern source.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns the term in years found in `name`.
    pub fn term_years(&self, name: &str) -> BondResult<u32> {
        let invalid = || BondError::InvalidTermFormat {
            name: name.to_string(),
            pattern: self.pattern.as_str().to_string(),
        };
        let captures = self.pattern.captures(name).ok_or_else(invalid)?;
        let text = captures
            .get(1)
            .or_else(|| captures.get(0))
            .map(|m| m.as_str())
            .ok_or_else(invalid)?;
        match text.trim().parse::<u32>() {
            Ok(years) if years > 0 => Ok(years),
            _ => Err(invalid()),
        }
    }
}

impl Default for TermParser {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_TERM_PATTERN).expect("default term pattern compiles"),
        }
    }
}
