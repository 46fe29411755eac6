//! Bond pricing.
//!
//! - [`YieldPricer`]: clean price from a compounded market yield
//! - [`DiscountingBondEngine`]: NPV and prices off a shared discount curve

mod discounting;
mod yield_pricer;

pub use discounting::{BondValuation, CashFlowValue, DiscountingBondEngine};
pub use yield_pricer::{YieldPrice, YieldPricer};

use ratebook_core::types::Date;

use crate::error::{BondError, BondResult};
use crate::instruments::Bond;

/// Settlement date of a trade on `valuation_date`, rejected when it does not
/// precede the bond's maturity.
fn checked_settlement(bond: &dyn Bond, valuation_date: Date) -> BondResult<Date> {
    let settlement = bond.settlement_date(valuation_date);
    let maturity = bond.maturity();
    if settlement >= maturity {
        return Err(BondError::SettlementAfterMaturity {
            settlement,
            maturity,
        });
    }
    Ok(settlement)
}
