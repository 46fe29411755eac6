//! TOML configuration. Every field is optional.
//!
//! ```toml
//! [vanilla]
//! input = "Bonds_list.csv"
//! output = "Bonds_list-2.csv"
//! term_pattern = '(\d+)'
//!
//! [[vanilla.conventions]]
//! country = "UK"
//! aliases = ["UK", "U.K."]
//! settlement_days = 2
//! frequency = "Semiannual"
//! day_count = "ACT/ACT ISMA"
//! calendar = "UnitedKingdom"
//! business_day_convention = "Unadjusted"
//!
//! [floating]
//! face_value = 1000000.0
//! tenor = "1Y"
//! spreads = [0.01]
//! fixing_rate = 0.0238
//! interpolation = "linear-forward"
//! ```

use ratebook_bonds::conventions::{ConventionDefinition, ConventionTable};
use ratebook_bonds::instruments::FloatingCouponTerms;
use ratebook_bonds::pipeline::{FloatingNoteRequest, VanillaPipeline};
use ratebook_bonds::term::{TermParser, DEFAULT_TERM_PATTERN};
use ratebook_core::types::{Date, Frequency, Period};
use ratebook_curves::{CurveQuotes, ForwardInterpolation, RateQuote};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RatebookConfig {
    /// Bond table pipeline.
    pub vanilla: VanillaConfig,
    /// Floating-rate note pipeline.
    pub floating: FloatingConfig,
}

impl RatebookConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Settings of the `vanilla` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VanillaConfig {
    /// Input bond table.
    pub input: PathBuf,
    /// Output table with prices.
    pub output: PathBuf,
    /// Regular expression extracting the term in years from bond names.
    pub term_pattern: String,
    /// Ordered convention table replacing the built-in one.
    pub conventions: Option<Vec<ConventionDefinition>>,
}

impl Default for VanillaConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Bonds_list.csv"),
            output: PathBuf::from("Bonds_list-2.csv"),
            term_pattern: DEFAULT_TERM_PATTERN.to_string(),
            conventions: None,
        }
    }
}

impl VanillaConfig {
    /// Builds the pricing pipeline these settings describe.
    pub fn pipeline(&self) -> CliResult<VanillaPipeline> {
        let table = match &self.conventions {
            Some(definitions) => ConventionTable::from_definitions(definitions.clone())?,
            None => ConventionTable::builtin(),
        };
        let parser = TermParser::new(&self.term_pattern)?;
        Ok(VanillaPipeline::new(table, parser))
    }
}

/// Settings of the `floating` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    /// Face value.
    pub face_value: f64,
    /// Life of the note from issue.
    pub tenor: Period,
    /// Explicit maturity, overriding `tenor`.
    pub maturity: Option<Date>,
    /// Coupon frequency.
    pub frequency: Frequency,
    /// Settlement and fixing lag in business days.
    pub settlement_days: u32,
    /// Per-period gearings.
    pub gearings: Vec<f64>,
    /// Per-period spreads.
    pub spreads: Vec<f64>,
    /// Per-period caps.
    pub caps: Vec<f64>,
    /// Per-period floors.
    pub floors: Vec<f64>,
    /// Historical fixing registered before pricing.
    pub fixing_rate: f64,
    /// Date of that fixing; the first past fixing date when absent.
    pub fixing_date: Option<Date>,
    /// Forward interpolation.
    pub interpolation: ForwardInterpolation,
    /// Deposit quotes; the EURIBOR defaults when absent.
    pub deposits: Option<Vec<RateQuote>>,
    /// Swap quotes; the EURIBOR defaults when absent.
    pub swaps: Option<Vec<RateQuote>>,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        let request = FloatingNoteRequest::new(Date::today());
        Self {
            face_value: request.face_value,
            tenor: request.tenor,
            maturity: None,
            frequency: request.frequency,
            settlement_days: request.settlement_days,
            gearings: request.terms.gearings,
            spreads: request.terms.spreads,
            caps: Vec::new(),
            floors: Vec::new(),
            fixing_rate: request.fixing_rate,
            fixing_date: None,
            interpolation: request.interpolation,
            deposits: None,
            swaps: None,
        }
    }
}

impl FloatingConfig {
    /// Valuation request for `valuation_date`.
    pub fn request(&self, valuation_date: Date) -> FloatingNoteRequest {
        let defaults = CurveQuotes::euribor_default();
        let mut request = FloatingNoteRequest::new(valuation_date);
        request.quotes = CurveQuotes {
            deposits: self.deposits.clone().unwrap_or(defaults.deposits),
            swaps: self.swaps.clone().unwrap_or(defaults.swaps),
        };
        request.interpolation = self.interpolation;
        request.face_value = self.face_value;
        request.maturity_date = self.maturity;
        request.tenor = self.tenor;
        request.frequency = self.frequency;
        request.settlement_days = self.settlement_days;
        request.terms = FloatingCouponTerms {
            gearings: self.gearings.clone(),
            spreads: self.spreads.clone(),
            caps: self.caps.clone(),
            floors: self.floors.clone(),
            in_arrears: false,
        };
        request.fixing_rate = self.fixing_rate;
        request.fixing_date = self.fixing_date;
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: RatebookConfig = toml::from_str("").unwrap();
        assert_eq!(config.vanilla.term_pattern, DEFAULT_TERM_PATTERN);
        assert_eq!(config.floating.face_value, 1_000_000.0);
        assert_eq!(config.floating.spreads, vec![0.01]);
        assert!(config.vanilla.pipeline().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let text = r#"
            [vanilla]
            input = "in.csv"
            term_pattern = '(\d+)\s*[yY]'

            [[vanilla.conventions]]
            country = "Canada"
            settlement_days = 1
            frequency = "Semiannual"
            day_count = "ACT/365F"
            calendar = "WeekendsOnly"
            business_day_convention = "Following"

            [floating]
            tenor = "2Y"
            frequency = "Quarterly"
            caps = [0.05]
            fixing_date = "2025-02-11"
            interpolation = "flat-forward"
            deposits = [{ tenor = "3M", rate = 0.025 }]
        "#;
        let config: RatebookConfig = toml::from_str(text).unwrap();
        assert_eq!(config.vanilla.input, PathBuf::from("in.csv"));
        let pipeline = config.vanilla.pipeline().unwrap();
        assert_eq!(pipeline.table().conventions()[0].country, "Canada");
        assert!(pipeline.table().resolve("Canada 5Y").is_ok());

        let valuation = Date::from_ymd(2025, 2, 13).unwrap();
        let request = config.floating.request(valuation);
        assert_eq!(request.tenor, Period::years(2));
        assert_eq!(request.terms.caps, vec![0.05]);
        assert_eq!(request.quotes.deposits.len(), 1);
        assert_eq!(request.quotes.swaps.len(), 8);
        assert_eq!(request.interpolation, ForwardInterpolation::FlatForward);
        assert_eq!(request.fixing_date, Some(Date::from_ymd(2025, 2, 11).unwrap()));
    }

    #[test]
    fn test_bad_pattern_is_an_error() {
        let config = VanillaConfig {
            term_pattern: "(".into(),
            ..VanillaConfig::default()
        };
        assert!(config.pipeline().is_err());
    }
}
