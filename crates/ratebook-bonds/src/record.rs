//! Bond table rows: raw text records and their parsed form.

use ratebook_core::types::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{BondError, BondResult};

/// One row of a bond table, as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondRecord {
    /// Free-text bond name, e.g. `UK 10y Gilt`.
    pub name: String,
    /// Maturity date text.
    pub maturity: String,
    /// Coupon rate in percent.
    pub coupon_rate: String,
    /// Face value.
    pub face_value: String,
    /// Market yield in percent.
    pub market_yield: String,
}

impl BondRecord {
    /// Creates a record from its text fields.
    pub fn new(
        name: impl Into<String>,
        maturity: impl Into<String>,
        coupon_rate: impl Into<String>,
        face_value: impl Into<String>,
        market_yield: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            maturity: maturity.into(),
            coupon_rate: coupon_rate.into(),
            face_value: face_value.into(),
            market_yield: market_yield.into(),
        }
    }
}

/// A parsed fixed-rate bond row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondSpec {
    /// Free-text bond name.
    pub name: String,
    /// Maturity date.
    pub maturity_date: Date,
    /// Coupon rate in percent.
    pub coupon_rate_percent: Decimal,
    /// Face value.
    pub face_value: Decimal,
    /// Market yield in percent.
    pub market_yield_percent: Decimal,
}

impl BondSpec {
    /// Parses a record, rejecting blank names and non-positive face values.
    pub fn from_record(record: &BondRecord) -> BondResult<Self> {
        let name = record.name.trim();
        if name.is_empty() {
            return Err(BondError::invalid_field("Bond name", &record.name, "empty"));
        }
        let maturity_date = Date::parse_flexible(&record.maturity)
            .map_err(|e| BondError::invalid_field("Maturity", &record.maturity, e.to_string()))?;
        let coupon_rate_percent = parse_decimal("Coupon rate", &record.coupon_rate)?;
        let face_value = parse_decimal("FV", &record.face_value)?;
        let market_yield_percent = parse_decimal("Yield", &record.market_yield)?;

        if face_value <= Decimal::ZERO {
            return Err(BondError::invalid_field(
                "FV",
                &record.face_value,
                "must be positive",
            ));
        }

        Ok(Self {
            name: name.to_string(),
            maturity_date,
            coupon_rate_percent,
            face_value,
            market_yield_percent,
        })
    }
}

/// Parses plain, percent-suffixed or scientific decimal text.
fn parse_decimal(field: &str, raw: &str) -> BondResult<Decimal> {
    let text = raw.trim().trim_end_matches('%').trim().replace(',', "");
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| BondError::invalid_field(field, raw, "not a number"))
}
