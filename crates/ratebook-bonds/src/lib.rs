//! # Ratebook Bonds
//!
//! Government bond and floating-rate note construction and pricing.
//!
//! - **Conventions**: ordered country alias table resolving free-text bond
//!   names to market conventions ([`conventions::ConventionTable`])
//! - **Terms**: configurable extraction of the tenor in years from a bond name
//! - **Schedules**: backward coupon schedules with business-day adjustment
//! - **Instruments**: fixed-rate bonds and EURIBOR floating-rate bonds
//! - **Pricing**: clean price from a compounded yield, and a discounting
//!   engine reporting NPV, clean and dirty prices with a cash-flow breakdown
//! - **Pipelines**: row-isolated batch pricing of bond tables, and the
//!   curve-to-FRN valuation sequence
//!
//! ## Example
//!
//! ```rust
//! use ratebook_bonds::prelude::*;
//! use ratebook_core::types::Date;
//!
//! let pipeline = VanillaPipeline::default();
//! let record = BondRecord::new("UK 10y Gilt", "2034-06-15", "4.25", "1000", "4.25");
//! let valuation = Date::from_ymd(2025, 6, 13).unwrap();
//! let priced = pipeline.price_record(&record, valuation, None).unwrap();
//! assert_eq!(priced.issue_date, Date::from_ymd(2024, 6, 15).unwrap());
//! assert!((priced.clean_price - 100.0).abs() < 0.05);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod builder;
pub mod cashflows;
pub mod conventions;
pub mod error;
pub mod index;
pub mod instruments;
pub mod pipeline;
pub mod pricing;
pub mod record;
pub mod schedule;
pub mod term;

pub use error::{BondError, BondResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::InstrumentBuilder;
    pub use crate::cashflows::{CashFlow, CashFlowKind};
    pub use crate::conventions::{ConventionDefinition, ConventionTable, MarketConvention};
    pub use crate::error::{BondError, BondResult};
    pub use crate::index::IborIndex;
    pub use crate::instruments::{Bond, FixedRateBond, FloatingCouponTerms, FloatingRateBond};
    pub use crate::pipeline::{
        price_floating_note, BatchReport, FloatingNoteReport, FloatingNoteRequest, PricedBond,
        RowOutcome, VanillaPipeline,
    };
    pub use crate::pricing::{
        BondValuation, CashFlowValue, DiscountingBondEngine, YieldPrice, YieldPricer,
    };
    pub use crate::record::{BondRecord, BondSpec};
    pub use crate::schedule::{Schedule, SchedulePeriod};
    pub use crate::term::TermParser;
}
