//! Market quotes for curve construction.

use ratebook_core::types::Period;
use serde::{Deserialize, Serialize};

/// A single `(tenor, rate)` quote. Rates are decimals (0.025 = 2.5%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Instrument tenor from the spot date.
    pub tenor: Period,
    /// Quoted rate.
    pub rate: f64,
}

impl RateQuote {
    /// Creates a quote.
    #[must_use]
    pub const fn new(tenor: Period, rate: f64) -> Self {
        Self { tenor, rate }
    }
}

/// Deposit and swap quotes for one curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveQuotes {
    /// Money-market deposits.
    #[serde(default)]
    pub deposits: Vec<RateQuote>,
    /// Par swaps against the 3M index.
    #[serde(default)]
    pub swaps: Vec<RateQuote>,
}

impl CurveQuotes {
    /// Total number of quotes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deposits.len() + self.swaps.len()
    }

    /// Returns true if there are no quotes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The EURIBOR strip used by the floating-rate note report.
    #[must_use]
    pub fn euribor_default() -> Self {
        Self {
            deposits: vec![
                RateQuote::new(Period::months(1), 0.02653),
                RateQuote::new(Period::months(3), 0.02526),
                RateQuote::new(Period::months(6), 0.02468),
            ],
            swaps: vec![
                RateQuote::new(Period::years(1), 0.02264),
                RateQuote::new(Period::years(2), 0.02145),
                RateQuote::new(Period::years(3), 0.02140),
                RateQuote::new(Period::years(5), 0.02165),
                RateQuote::new(Period::years(7), 0.02202),
                RateQuote::new(Period::years(10), 0.02261),
                RateQuote::new(Period::years(15), 0.02314),
                RateQuote::new(Period::years(30), 0.02067),
            ],
        }
    }
}

impl Default for CurveQuotes {
    fn default() -> Self {
        Self::euribor_default()
    }
}
