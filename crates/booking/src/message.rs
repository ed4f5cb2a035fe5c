//! Outbound message templates.
//!
//! Field order and the currency symbol are load-bearing: support staff parse
//! these messages, so the templates must stay byte-stable across releases.

/// Booking proposal sent when a user initiates a booking.
pub fn compose_outbound_message(
    vehicle_name: &str,
    booking_id: &str,
    days: u32,
    date_range_label: &str,
    total_amount: u64,
) -> String {
    format!(
        "Hi LivinLease! 🚗\n\
         \n\
         I want to book a vehicle:\n\
         \n\
         📋 *Booking Details:*\n\
         • Vehicle: {vehicle_name}\n\
         • Booking ID: {booking_id}\n\
         • Duration: {days} days\n\
         • Dates: {date_range_label}\n\
         • Total Amount: ₹{total_amount}\n\
         \n\
         Please confirm availability and payment details.\n\
         \n\
         Thank you!"
    )
}

/// Follow-up message claiming a payment was made, sent alongside a proof
/// screenshot.
pub fn compose_payment_confirmation_message(
    booking_id: &str,
    amount: u64,
    method: &str,
    transaction_id: Option<&str>,
) -> String {
    format!(
        "Payment Confirmation 💳\n\
         \n\
         Booking ID: {booking_id}\n\
         Amount Paid: ₹{amount}\n\
         Payment Method: {method}\n\
         Transaction ID: {}\n\
         \n\
         Please verify my payment. Screenshot attached.",
        transaction_id.unwrap_or("N/A")
    )
}

/// Support request, with a generic fallback when no issue is given.
pub fn compose_support_message(issue: Option<&str>) -> String {
    match issue {
        Some(issue) if !issue.trim().is_empty() => {
            format!("Hi! I need help with: {issue}")
        }
        _ => "Hi! I need help with my LivinLease booking.".to_string(),
    }
}
