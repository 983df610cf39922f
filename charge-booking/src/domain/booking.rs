//! Booking records.

use std::fmt;

use chrono::NaiveDate;

use super::SlotId;

/// A reservation of one slot at one station for a whole calendar day.
///
/// Stations keep their bookings as a slot → dates map; this record is the
/// explicit form handed out when a reservation is made or listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Booking {
    /// Name of the station the slot belongs to.
    pub station: String,
    pub slot: SlotId,
    pub date: NaiveDate,
}

impl Booking {
    pub fn new(station: impl Into<String>, slot: SlotId, date: NaiveDate) -> Self {
        Self {
            station: station.into(),
            slot,
            date,
        }
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} at {}", self.slot, self.date, self.station)
    }
}
