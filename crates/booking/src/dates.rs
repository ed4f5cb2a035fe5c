//! Calendar-date handling for rental periods.

use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

use crate::error::BookingError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`). No time-of-day component.
pub fn parse_iso_date(input: &str) -> Result<Date, BookingError> {
    Date::parse(input.trim(), ISO_DATE).map_err(|_| BookingError::InvalidDateRange)
}

fn format_iso_date(date: Date) -> String {
    // The format description above renders any valid Date.
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Whole-day difference between pickup and return, billed with partial days
/// rounded up to a full day.
///
/// Fails with [`BookingError::InvalidDateRange`] unless `return_date` is
/// strictly after `pickup`.
pub fn compute_duration(pickup: Date, return_date: Date) -> Result<u32, BookingError> {
    let days = i64::from(return_date.to_julian_day()) - i64::from(pickup.to_julian_day());
    if days <= 0 {
        return Err(BookingError::InvalidDateRange);
    }
    Ok(days as u32)
}

/// A validated rental period: `return_date` strictly after `pickup`, and no
/// past-dated bookings relative to the `today` supplied at construction.
///
/// `today` is an explicit argument so the type stays clock-free; the caller
/// decides what "today" means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pickup: Date,
    return_date: Date,
}

impl DateRange {
    pub fn new(pickup: Date, return_date: Date, today: Date) -> Result<Self, BookingError> {
        if pickup < today || return_date <= pickup {
            return Err(BookingError::InvalidDateRange);
        }
        Ok(Self {
            pickup,
            return_date,
        })
    }

    /// Parse and validate a range from ISO-8601 date strings.
    pub fn parse(pickup: &str, return_date: &str, today: Date) -> Result<Self, BookingError> {
        Self::new(parse_iso_date(pickup)?, parse_iso_date(return_date)?, today)
    }

    pub fn pickup(&self) -> Date {
        self.pickup
    }

    pub fn return_date(&self) -> Date {
        self.return_date
    }

    /// Rental duration in whole days. Always >= 1 for a constructed range.
    pub fn duration_days(&self) -> u32 {
        // Construction guarantees return_date > pickup.
        compute_duration(self.pickup, self.return_date).unwrap_or(1)
    }

    /// Human-readable label, `"<pickup> to <return>"`, both ISO-8601.
    pub fn label(&self) -> String {
        format!(
            "{} to {}",
            format_iso_date(self.pickup),
            format_iso_date(self.return_date)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn duration_is_whole_day_difference() {
        let days = compute_duration(date!(2024 - 01 - 15), date!(2024 - 01 - 18)).unwrap();
        assert_eq!(days, 3);
    }

    #[test]
    fn duration_spans_month_boundaries() {
        let days = compute_duration(date!(2024 - 01 - 30), date!(2024 - 02 - 02)).unwrap();
        assert_eq!(days, 3);
    }

    #[test]
    fn same_day_rental_is_rejected() {
        let err = compute_duration(date!(2024 - 01 - 15), date!(2024 - 01 - 15)).unwrap_err();
        assert_eq!(err, BookingError::InvalidDateRange);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = compute_duration(date!(2024 - 01 - 18), date!(2024 - 01 - 15)).unwrap_err();
        assert_eq!(err, BookingError::InvalidDateRange);
    }

    #[test]
    fn past_pickup_is_rejected() {
        let err = DateRange::new(
            date!(2023 - 12 - 31),
            date!(2024 - 01 - 02),
            date!(2024 - 01 - 01),
        )
        .unwrap_err();
        assert_eq!(err, BookingError::InvalidDateRange);
    }

    #[test]
    fn pickup_today_is_accepted() {
        let range = DateRange::new(
            date!(2024 - 01 - 01),
            date!(2024 - 01 - 03),
            date!(2024 - 01 - 01),
        )
        .unwrap();
        assert_eq!(range.duration_days(), 2);
    }

    #[test]
    fn parse_validates_and_labels() {
        let range = DateRange::parse("2024-01-15", "2024-01-18", date!(2024 - 01 - 01)).unwrap();
        assert_eq!(range.label(), "2024-01-15 to 2024-01-18");
        assert_eq!(range.duration_days(), 3);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = DateRange::parse("not-a-date", "2024-01-18", date!(2024 - 01 - 01)).unwrap_err();
        assert_eq!(err, BookingError::InvalidDateRange);
    }
}
