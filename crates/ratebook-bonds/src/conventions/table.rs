//! Ordered alias table with first-match substring resolution.

use ratebook_core::calendars::{BusinessDayConvention, CalendarId};
use ratebook_core::daycounts::DayCountConvention;
use ratebook_core::types::Frequency;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{builtin_definitions, MarketConvention};
use crate::error::{BondError, BondResult};

/// One country entry as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionDefinition {
    /// Canonical country name.
    pub country: String,
    /// Aliases tested against bond names; defaults to the country name.
    #[serde(default)]
    pub aliases: Vec<String>,
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

#[derive(Debug, Clone)]
struct AliasEntry {
    alias: String,
    normalized: String,
    convention: usize,
}

/// Country conventions keyed by alias, searched in declaration order.
///
/// Every alias is its own entry pointing at a shared convention, so `UK` and
/// `U.K.` are tested separately. Resolution normalises both sides (ASCII
/// letters and digits only, uppercased) and returns the convention of the
/// first alias contained in the identifier. Order is significant: with the
/// built-in table `"AUSTRALIA 5Y"` resolves to `US`.
#[derive(Debug, Clone)]
pub struct ConventionTable {
    conventions: Vec<MarketConvention>,
    entries: Vec<AliasEntry>,
}

impl ConventionTable {
    /// Builds a table from definitions, preserving their order.
    pub fn from_definitions(definitions: Vec<ConventionDefinition>) -> BondResult<Self> {
        if definitions.is_empty() {
            return Err(BondError::invalid_spec("convention table has no entries"));
        }
        for def in &definitions {
            let empty_alias = if def.aliases.is_empty() {
                normalize_identifier(&def.country)
                    .is_empty()
                    .then_some(&def.country)
            } else {
                def.aliases
                    .iter()
                    .find(|a| normalize_identifier(a).is_empty())
            };
            if let Some(alias) = empty_alias {
                return Err(BondError::invalid_spec(format!(
                    "alias '{alias}' of {} has no letters or digits",
                    def.country
                )));
            }
        }
        Ok(Self::assemble(definitions))
    }

    /// The built-in UK, US, Japan, Spain, Germany and Italy table.
    pub fn builtin() -> Self {
        Self::assemble(builtin_definitions())
    }

    fn assemble(definitions: Vec<ConventionDefinition>) -> Self {
        let mut table = Self {
            conventions: Vec::with_capacity(definitions.len()),
            entries: Vec::new(),
        };
        for def in definitions {
            let aliases = if def.aliases.is_empty() {
                vec![def.country.clone()]
            } else {
                def.aliases
            };
            for alias in aliases {
                table.entries.push(AliasEntry {
                    normalized: normalize_identifier(&alias),
                    alias,
                    convention: table.conventions.len(),
                });
            }
            table.conventions.push(MarketConvention {
                country: def.country,
                settlement_days: def.settlement_days,
                frequency: def.frequency,
                day_count: def.day_count,
                calendar: def.calendar,
                business_day_convention: def.business_day_convention,
            });
        }
        table
    }

    /// Resolves an identifier (typically the bond name) to its convention.
    pub fn resolve(&self, identifier: &str) -> BondResult<&MarketConvention> {
        let normalized = normalize_identifier(identifier);
        let entry = self
            .entries
            .iter()
            .find(|e| normalized.contains(&e.normalized))
            .ok_or_else(|| BondError::UnresolvedCountry {
                identifier: identifier.to_string(),
            })?;
        debug!(identifier, alias = %entry.alias, "resolved market convention");
        Ok(&self.conventions[entry.convention])
    }

    /// Aliases in resolution order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.alias.as_str())
    }

    /// Distinct conventions in declaration order.
    pub fn conventions(&self) -> &[MarketConvention] {
        &self.conventions
    }
}

impl Default for ConventionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Uppercases and drops everything but ASCII letters and digits.
pub fn normalize_identifier(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
