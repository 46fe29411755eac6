//! CLI command implementations.

pub mod floating;
pub mod vanilla;

pub use floating::FloatingArgs;
pub use vanilla::VanillaArgs;

use ratebook_core::types::Date;

/// The valuation date: the flag when given, else today.
pub fn valuation_date(flag: Option<Date>) -> Date {
    flag.unwrap_or_else(Date::today)
}
