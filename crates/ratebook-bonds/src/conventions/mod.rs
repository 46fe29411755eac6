//! Country market conventions and their resolution from bond names.

mod table;

pub use table::{normalize_identifier, ConventionDefinition, ConventionTable};

use ratebook_core::calendars::{BusinessDayConvention, Calendar, CalendarId};
use ratebook_core::daycounts::DayCountConvention;
use ratebook_core::types::{Date, Frequency};
use serde::{Deserialize, Serialize};

/// The full parameter set needed to build and price a government bond.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConvention {
    /// Canonical country name.
    pub country: String,
    /// Business days from trade to settlement.
    pub settlement_days: u32,
    /// Coupon frequency.
    pub frequency: Frequency,
    /// Accrual day count.
    pub day_count: DayCountConvention,
    /// Holiday calendar.
    pub calendar: CalendarId,
    /// Adjustment applied to schedule dates.
    pub business_day_convention: BusinessDayConvention,
}

impl MarketConvention {
    /// Settlement date for a trade on `valuation_date`.
    pub fn settlement_date(&self, valuation_date: Date) -> Date {
        self.calendar
            .calendar()
            .advance_business_days(valuation_date, self.settlement_days as i32)
    }
}

/// The built-in country conventions, in resolution order.
pub(crate) fn builtin_definitions() -> Vec<ConventionDefinition> {
    use BusinessDayConvention::{Following, ModifiedFollowing, Unadjusted};
    use DayCountConvention::{ActualActualBond, ActualActualIsma};

    let def = |country: &str,
               aliases: &[&str],
               settlement_days,
               frequency,
               day_count,
               calendar,
               business_day_convention| ConventionDefinition {
        country: country.to_string(),
        aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
        settlement_days,
        frequency,
        day_count,
        calendar,
        business_day_convention,
    };

    vec![
        def("UK", &["UK", "U.K."], 2, Frequency::SemiAnnual, ActualActualIsma, CalendarId::UnitedKingdom, Unadjusted),
        def("US", &["US"], 2, Frequency::SemiAnnual, ActualActualBond, CalendarId::UnitedStatesGovernmentBond, Following),
        def("Japan", &["Japan"], 2, Frequency::Annual, ActualActualIsma, CalendarId::Japan, Unadjusted),
        def("Spain", &["Spain"], 3, Frequency::SemiAnnual, ActualActualIsma, CalendarId::Target, Following),
        def("Germany", &["Germany"], 2, Frequency::SemiAnnual, ActualActualIsma, CalendarId::GermanyEurex, ModifiedFollowing),
        def("Italy", &["Italy"], 2, Frequency::SemiAnnual, ActualActualIsma, CalendarId::Italy, ModifiedFollowing),
    ]
}
