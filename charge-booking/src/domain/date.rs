//! Booking date input.
//!
//! Bookings are whole-day reservations keyed by calendar date. Users type
//! dates as `YYYY-MM-DD`; an empty answer means "today".

use chrono::NaiveDate;
use chrono::format::ParseErrorKind;

/// Format accepted for typed booking dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error returned when a typed booking date cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date: {reason}")]
pub struct DateError {
    reason: &'static str,
}

impl DateError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// Short description of what was wrong with the input.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

impl From<chrono::ParseError> for DateError {
    fn from(err: chrono::ParseError) -> Self {
        match err.kind() {
            ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
                Self::new("no such calendar date")
            }
            ParseErrorKind::TooLong => Self::new("unexpected trailing characters"),
            _ => Self::new("expected YYYY-MM-DD"),
        }
    }
}

/// Parse a typed booking date.
///
/// Surrounding whitespace is ignored. Blank input resolves to `today`.
///
/// # Examples
///
/// ```
/// use charge_booking::domain::{parse_booking_date, DATE_FORMAT};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
///
/// let date = parse_booking_date("2024-01-01", DATE_FORMAT, today).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
///
/// // Blank means today
/// assert_eq!(parse_booking_date("", DATE_FORMAT, today).unwrap(), today);
///
/// // Anything else is rejected
/// assert!(parse_booking_date("01/01/2024", DATE_FORMAT, today).is_err());
/// ```
pub fn parse_booking_date(
    input: &str,
    format: &str,
    today: NaiveDate,
) -> Result<NaiveDate, DateError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }

    Ok(NaiveDate::parse_from_str(input, format)?)
}
