//! # Ratebook Core
//!
//! Foundational types shared by the Ratebook pricing crates:
//!
//! - **Types**: [`Date`](types::Date), [`Frequency`](types::Frequency),
//!   [`Compounding`](types::Compounding)
//! - **Day Count Conventions**: Actual/360, Actual/365 Fixed, Actual/Actual ISMA and Bond,
//!   30E/360 Eurobond
//! - **Business Day Calendars**: UK, US government bond, Japan, TARGET, Germany Eurex and
//!   Italy holiday tables with business-day adjustment rules
//!
//! ## Example
//!
//! ```rust
//! use ratebook_core::prelude::*;
//!
//! let cal = CalendarId::Target.calendar();
//! let d = Date::from_ymd(2025, 12, 25).unwrap();
//! let adjusted = cal.adjust(d, BusinessDayConvention::Following).unwrap();
//! assert_eq!(adjusted, Date::from_ymd(2025, 12, 29).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{BusinessDayConvention, Calendar, CalendarId};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Compounding, Date, Frequency, Period, TimeUnit};
}

pub use error::{CoreError, CoreResult};
