//! Backward coupon schedule generation.
//!
//! Unadjusted dates are generated from the termination date backwards in
//! whole multiples of the coupon period (`maturity - k * months`), so
//! day-of-month never drifts. When the effective date is not on the cycle
//! the first period is a short stub. No end-of-month rule is applied.

use ratebook_core::calendars::{BusinessDayConvention, Calendar, CalendarId};
use ratebook_core::types::{Date, Frequency};
use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};

/// Configuration for schedule generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Effective (issue) date.
    pub effective_date: Date,
    /// Termination (maturity) date.
    pub termination_date: Date,
    /// Coupon frequency.
    pub frequency: Frequency,
    /// Calendar for business day adjustments.
    pub calendar: CalendarId,
    /// Adjustment of every date but the last.
    pub business_day_convention: BusinessDayConvention,
    /// Adjustment of the termination date.
    pub termination_convention: BusinessDayConvention,
}

impl ScheduleConfig {
    /// Creates a configuration on a weekend-only calendar, unadjusted.
    #[must_use]
    pub fn new(effective_date: Date, termination_date: Date, frequency: Frequency) -> Self {
        Self {
            effective_date,
            termination_date,
            frequency,
            calendar: CalendarId::WeekendsOnly,
            business_day_convention: BusinessDayConvention::Unadjusted,
            termination_convention: BusinessDayConvention::Unadjusted,
        }
    }

    /// Sets the calendar for business day adjustments.
    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarId) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the same convention for regular and termination dates.
    #[must_use]
    pub fn with_business_day_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.business_day_convention = convention;
        self.termination_convention = convention;
        self
    }

    /// Sets the termination date convention only.
    #[must_use]
    pub fn with_termination_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.termination_convention = convention;
        self
    }
}

/// One accrual period with its notional reference period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePeriod {
    /// Adjusted accrual start.
    pub start: Date,
    /// Adjusted accrual end.
    pub end: Date,
    /// Reference period start used by Actual/Actual accruals.
    pub reference_start: Date,
    /// Reference period end.
    pub reference_end: Date,
    /// False for a stub period.
    pub regular: bool,
}

/// A generated coupon schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    unadjusted: Vec<Date>,
    dates: Vec<Date>,
    first_regular: bool,
    config: ScheduleConfig,
}

impl Schedule {
    /// Generates the schedule backwards from the termination date.
    pub fn generate(config: ScheduleConfig) -> BondResult<Self> {
        let ScheduleConfig {
            effective_date,
            termination_date,
            frequency,
            ..
        } = config;

        if effective_date >= termination_date {
            return Err(BondError::schedule_failed(format!(
                "effective date {effective_date} is not before termination {termination_date}"
            )));
        }

        let step = frequency.months_per_period() as i32;
        let mut unadjusted = vec![termination_date];
        let mut first_regular = false;
        for k in 1.. {
            let date = termination_date.add_months(-step * k)?;
            if date < effective_date {
                unadjusted.push(effective_date);
                break;
            }
            unadjusted.push(date);
            if date == effective_date {
                first_regular = true;
                break;
            }
        }
        unadjusted.reverse();

        let cal = config.calendar.calendar();
        let last = unadjusted.len() - 1;
        let mut dates = Vec::with_capacity(unadjusted.len());
        for (i, &d) in unadjusted.iter().enumerate() {
            let convention = if i == last {
                config.termination_convention
            } else {
                config.business_day_convention
            };
            dates.push(cal.adjust(d, convention)?);
        }

        // A stub can collapse onto the first regular date once adjusted.
        if dates.len() > 2 && dates[0] >= dates[1] {
            dates.remove(1);
            unadjusted.remove(1);
            first_regular = false;
        }
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(BondError::schedule_failed(
                "adjusted dates are not strictly increasing",
            ));
        }

        Ok(Self {
            unadjusted,
            dates,
            first_regular,
            config,
        })
    }

    /// Adjusted schedule dates, issue first.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Unadjusted schedule dates.
    pub fn unadjusted_dates(&self) -> &[Date] {
        &self.unadjusted
    }

    /// Schedule configuration.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// First adjusted date.
    pub fn start_date(&self) -> Date {
        self.dates[0]
    }

    /// Last adjusted date.
    pub fn end_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Number of accrual periods.
    pub fn len(&self) -> usize {
        self.dates.len() - 1
    }

    /// True when there are no periods (never the case for a generated schedule).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Accrual periods with reference periods.
    ///
    /// A stub first period takes the notional regular period ending on its
    /// end date as its reference.
    pub fn periods(&self) -> Vec<SchedulePeriod> {
        let cal = self.config.calendar.calendar();
        let step = self.config.frequency.months_per_period() as i32;

        self.dates
            .windows(2)
            .enumerate()
            .map(|(i, w)| {
                let regular = i > 0 || self.first_regular;
                let reference_start = if regular {
                    w[0]
                } else {
                    self.unadjusted[i + 1]
                        .add_months(-step)
                        .and_then(|d| cal.adjust(d, self.config.business_day_convention))
                        .unwrap_or(w[0])
                };
                SchedulePeriod {
                    start: w[0],
                    end: w[1],
                    reference_start,
                    reference_end: w[1],
                    regular,
                }
            })
            .collect()
    }
}
