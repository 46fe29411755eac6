//! Curve discounting engine.

use ratebook_core::types::Date;
use ratebook_curves::YieldTermStructure;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::checked_settlement;
use crate::cashflows::{self, CashFlowKind};
use crate::error::BondResult;
use crate::instruments::Bond;

/// Present value of one cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CashFlowValue {
    /// Flow kind.
    pub kind: CashFlowKind,
    /// Payment date.
    pub date: Date,
    /// Fixing date of a floating coupon.
    pub fixing_date: Option<Date>,
    /// Amount paid.
    pub amount: f64,
    /// Discount factor to the payment date.
    pub discount_factor: f64,
    /// `amount * discount_factor`.
    pub present_value: f64,
}

/// Output of [`DiscountingBondEngine::value`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondValuation {
    /// Valuation date.
    pub valuation_date: Date,
    /// Settlement date.
    pub settlement_date: Date,
    /// Present value at the curve reference date.
    pub npv: f64,
    /// Dirty price per 100 face at settlement.
    pub dirty_price: f64,
    /// Clean price per 100 face at settlement.
    pub clean_price: f64,
    /// Accrued interest in currency at settlement.
    pub accrued_amount: f64,
    /// Flows still to be paid.
    pub cash_flows: Vec<CashFlowValue>,
}

/// Discounts bond cash flows on a shared curve.
#[derive(Clone)]
pub struct DiscountingBondEngine {
    curve: Arc<dyn YieldTermStructure>,
}

impl DiscountingBondEngine {
    /// Creates an engine on `curve`.
    pub fn new(curve: Arc<dyn YieldTermStructure>) -> Self {
        Self { curve }
    }

    /// The discount curve.
    pub fn discount_curve(&self) -> &Arc<dyn YieldTermStructure> {
        &self.curve
    }

    /// Values `bond` as of `valuation_date`.
    pub fn value(&self, bond: &dyn Bond, valuation_date: Date) -> BondResult<BondValuation> {
        let settlement_date = checked_settlement(bond, valuation_date)?;
        let flows = bond.cash_flows(valuation_date)?;
        let reference = self.curve.reference_date();
        let face = bond.face_value();

        let cash_flows: Vec<CashFlowValue> = flows
            .iter()
            .map(|cf| {
                let discount_factor = self.curve.discount(cf.date);
                CashFlowValue {
                    kind: cf.kind,
                    date: cf.date,
                    fixing_date: cf.fixing_date,
                    amount: cf.amount,
                    discount_factor,
                    present_value: cf.amount * discount_factor,
                }
            })
            .collect();

        let npv: f64 = cash_flows
            .iter()
            .filter(|v| v.date > reference)
            .map(|v| v.present_value)
            .sum();
        let settlement_value: f64 = cash_flows
            .iter()
            .filter(|v| v.date > settlement_date)
            .map(|v| v.present_value)
            .sum::<f64>()
            / self.curve.discount(settlement_date);

        let accrued_amount = cashflows::accrued_amount(&flows, settlement_date);
        let dirty_price = settlement_value * 100.0 / face;
        let clean_price = dirty_price - accrued_amount * 100.0 / face;

        debug!(%valuation_date, %settlement_date, npv, clean_price, "discounted bond");

        Ok(BondValuation {
            valuation_date,
            settlement_date,
            npv,
            dirty_price,
            clean_price,
            accrued_amount,
            cash_flows,
        })
    }
}

impl fmt::Debug for DiscountingBondEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscountingBondEngine")
            .field("reference_date", &self.curve.reference_date())
            .finish()
    }
}
