//! Booking reference generation.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Opaque booking reference, format `LL<epoch-millis><0-999>`.
///
/// Display/reference only, not a security token. Two generations in the same
/// millisecond can collide if they draw the same random suffix; this is a
/// known limitation of the historical format, kept for compatibility with
/// existing support-team tooling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_parts(epoch_millis: i128, suffix: u16) -> Self {
        Self(format!("LL{epoch_millis}{suffix}"))
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate a fresh booking id from the current clock and a random suffix
/// in `[0, 1000)`. The suffix is unpadded, matching the historical format.
pub fn generate_booking_id() -> BookingId {
    let epoch_millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let suffix = rand::thread_rng().gen_range(0..1000u16);
    BookingId::from_parts(epoch_millis, suffix)
}
