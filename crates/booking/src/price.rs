//! Rental pricing. Integer rupee arithmetic throughout, no currency rounding.

use serde::{Deserialize, Serialize};

use crate::error::BookingError;

/// Flat service fee added to every booking, in rupees.
pub const SERVICE_FEE: u64 = 99;

/// Itemized cost of a rental: `total_amount = days * price_per_day + SERVICE_FEE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub days: u32,
    pub base_amount: u64,
    pub service_fee: u64,
    pub total_amount: u64,
}

/// Price a rental of `days` whole days at `price_per_day` rupees.
///
/// Fails with [`BookingError::InvalidDuration`] when `days` is zero; callers
/// are expected to have rejected the date range before reaching pricing.
pub fn compute_price_breakdown(price_per_day: u32, days: u32) -> Result<PriceBreakdown, BookingError> {
    if days < 1 {
        return Err(BookingError::InvalidDuration);
    }
    let base_amount = u64::from(price_per_day) * u64::from(days);
    Ok(PriceBreakdown {
        days,
        base_amount,
        service_fee: SERVICE_FEE,
        total_amount: base_amount + SERVICE_FEE,
    })
}
