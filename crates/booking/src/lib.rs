//! Booking request composer for LivinLease.
//!
//! Turns a vehicle selection and a date range into a priced, human-readable
//! booking proposal: a booking id, a price breakdown, an outbound WhatsApp
//! message, and the deep link that carries it. Every function here is a pure,
//! synchronous transform; the only external effects are the clock and RNG
//! reads inside [`generate_booking_id`]. Opening the messaging channel and
//! persisting payment records happen in the calling layer, after composition.

pub mod dates;
pub mod error;
pub mod ids;
pub mod link;
pub mod message;
pub mod money;
pub mod price;

use serde::{Deserialize, Serialize};

pub use dates::{compute_duration, parse_iso_date, DateRange};
pub use error::BookingError;
pub use ids::{generate_booking_id, BookingId};
pub use link::{build_messaging_deep_link, digits_only, is_valid_phone_number};
pub use message::{
    compose_outbound_message, compose_payment_confirmation_message, compose_support_message,
};
pub use money::format_inr;
pub use price::{compute_price_breakdown, PriceBreakdown, SERVICE_FEE};

/// Vehicle record as supplied by the catalog. Prices are whole rupees per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleOffer {
    pub id: String,
    pub name: String,
    pub price_per_day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// The complete, immutable booking proposal handed to the messaging channel.
///
/// Constructed whole or not at all; a later payment-status record references
/// it by `booking_id` rather than mutating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub booking_id: BookingId,
    pub vehicle_name: String,
    pub days: u32,
    pub date_range_label: String,
    pub base_amount: u64,
    pub service_fee: u64,
    pub total_amount: u64,
    pub outbound_message: String,
    pub deep_link: String,
}

/// One-shot composition of a [`BookingRequest`].
///
/// Validates the recipient, prices the stay, generates a booking id, renders
/// the message, and builds the deep link. Fails before constructing anything
/// on the first validation error; there are no partial results.
pub fn compose_booking_request(
    offer: &VehicleOffer,
    range: &DateRange,
    recipient: &str,
) -> Result<BookingRequest, BookingError> {
    let days = range.duration_days();
    let breakdown = compute_price_breakdown(offer.price_per_day, days)?;
    let booking_id = generate_booking_id();
    let date_range_label = range.label();
    let outbound_message = compose_outbound_message(
        &offer.name,
        booking_id.as_str(),
        days,
        &date_range_label,
        breakdown.total_amount,
    );
    let deep_link = build_messaging_deep_link(recipient, &outbound_message)?;
    Ok(BookingRequest {
        booking_id,
        vehicle_name: offer.name.clone(),
        days,
        date_range_label,
        base_amount: breakdown.base_amount,
        service_fee: breakdown.service_fee,
        total_amount: breakdown.total_amount,
        outbound_message,
        deep_link,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn activa() -> VehicleOffer {
        VehicleOffer {
            id: "vehicle-1".to_string(),
            name: "Honda Activa 6G".to_string(),
            price_per_day: 299,
            location: Some("Mumbai, Maharashtra".to_string()),
        }
    }

    #[test]
    fn composes_a_full_booking_request() {
        let range =
            DateRange::parse("2024-01-15", "2024-01-18", date!(2024 - 01 - 01)).unwrap();
        let request = compose_booking_request(&activa(), &range, "+91 98765 43210").unwrap();

        assert_eq!(request.days, 3);
        assert_eq!(request.base_amount, 897);
        assert_eq!(request.service_fee, 99);
        assert_eq!(request.total_amount, 996);
        assert_eq!(request.date_range_label, "2024-01-15 to 2024-01-18");
        assert!(request.booking_id.as_str().starts_with("LL"));
        assert!(request.outbound_message.contains("Honda Activa 6G"));
        assert!(request.outbound_message.contains("₹996"));
        assert!(request.deep_link.starts_with("https://wa.me/919876543210?text="));
        assert!(request.deep_link.contains("Honda%20Activa%206G"));
    }

    #[test]
    fn same_day_range_never_reaches_pricing() {
        let err =
            DateRange::parse("2024-01-15", "2024-01-15", date!(2024 - 01 - 01)).unwrap_err();
        assert_eq!(err, BookingError::InvalidDateRange);
    }

    #[test]
    fn bad_recipient_fails_the_whole_composition() {
        let range =
            DateRange::parse("2024-01-15", "2024-01-17", date!(2024 - 01 - 01)).unwrap();
        let err = compose_booking_request(&activa(), &range, "unknown").unwrap_err();
        assert_eq!(err, BookingError::InvalidRecipientNumber);
    }

    #[test]
    fn serializes_with_the_wire_field_names() {
        let range =
            DateRange::parse("2024-01-15", "2024-01-17", date!(2024 - 01 - 01)).unwrap();
        let request = compose_booking_request(&activa(), &range, "911").unwrap();
        let value = serde_json::to_value(&request).unwrap();
        for key in [
            "bookingId",
            "vehicleName",
            "days",
            "dateRangeLabel",
            "baseAmount",
            "serviceFee",
            "totalAmount",
            "outboundMessage",
            "deepLink",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
    }
}
