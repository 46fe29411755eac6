//! Domain types: dates, periods, frequencies and compounding.

mod date;
mod frequency;
mod period;

pub use date::Date;
pub use frequency::{Compounding, Frequency};
pub use period::{Period, TimeUnit};

pub(crate) use frequency::normalize_name;
