use thiserror::Error;

/// Validation failures raised while composing a booking request.
///
/// All of these are synchronous, local errors: nothing is retried and no
/// partial booking state exists once one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingError {
    /// Return date is not strictly after the pickup date, a date failed to
    /// parse, or either date lies in the past.
    #[error("return date must be a valid date strictly after the pickup date, and neither may be in the past")]
    InvalidDateRange,

    /// Computed rental duration is below one day.
    #[error("rental duration must be at least one day")]
    InvalidDuration,

    /// Recipient number contains no digits after normalization.
    #[error("recipient number must contain at least one digit")]
    InvalidRecipientNumber,
}

impl BookingError {
    /// Stable machine-readable code, used by the HTTP layer in error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::InvalidDateRange => "invalid_date_range",
            BookingError::InvalidDuration => "invalid_duration",
            BookingError::InvalidRecipientNumber => "invalid_recipient_number",
        }
    }
}
