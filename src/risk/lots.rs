//! Lot-size rounding for derivative contracts
//!
//! Exchanges trade futures and options in fixed lots. A risk-sized quantity
//! is rounded down to whole lots so the stop still stays within budget.

use super::types::RiskError;

/// Number of whole lots that fit in `quantity`
pub fn lot_count(quantity: u64, lot_size: u64) -> Result<u64, RiskError> {
    if lot_size == 0 {
        return Err(RiskError::InvalidLotSize);
    }
    Ok(quantity / lot_size)
}

/// Round `quantity` down to a multiple of `lot_size`
pub fn round_down_to_lot(quantity: u64, lot_size: u64) -> Result<u64, RiskError> {
    Ok(lot_count(quantity, lot_size)? * lot_size)
}
