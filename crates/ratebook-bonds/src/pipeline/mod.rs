//! Batch pricing pipelines.
//!
//! Both pipelines run the same forward sequence: resolve conventions, build
//! the schedule and instrument, then price. Neither holds global state; the
//! valuation date is an argument of every run.

mod floating;
mod vanilla;

pub use floating::{price_floating_note, FloatingNoteReport, FloatingNoteRequest};
pub use vanilla::{BatchReport, PricedBond, RowOutcome, VanillaPipeline};
