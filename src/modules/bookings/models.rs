use serde::{Deserialize, Serialize};

/// Status a payment record is born with; staff flip it manually after
/// checking the proof on WhatsApp.
pub const PENDING_VERIFICATION: &str = "pending_verification";

/// Request body for initiating a booking. Dates are ISO-8601 calendar dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub vehicle_id: String,
    pub pickup_date: String,
    pub return_date: String,
}

/// Request body for submitting a manual payment claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSubmission {
    pub payment_method: String,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_proof_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Persisted payment record, written once the user claims to have paid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub booking_id: String,
    pub user_id: String,
    pub payment_method: String,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_proof_ref: Option<String>,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_record_serializes_the_persisted_contract() {
        let record = PaymentRecord {
            booking_id: "LL17052768000007".to_string(),
            user_id: "user-1".to_string(),
            payment_method: "whatsapp".to_string(),
            amount: 996,
            payment_proof_ref: None,
            status: PENDING_VERIFICATION.to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["bookingId"], "LL17052768000007");
        assert_eq!(value["status"], "pending_verification");
        assert!(value.get("paymentProofRef").is_none());
    }

    #[test]
    fn create_booking_accepts_wire_field_names() {
        let body: CreateBooking = serde_json::from_str(
            r#"{"vehicleId":"vehicle-1","pickupDate":"2024-01-15","returnDate":"2024-01-18"}"#,
        )
        .unwrap();
        assert_eq!(body.vehicle_id, "vehicle-1");
        assert_eq!(body.pickup_date, "2024-01-15");
    }
}
