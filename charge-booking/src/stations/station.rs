//! A single charging station and its slot bookings.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::{Booking, SlotId};

/// A charging station with a fixed, ordered set of slots.
///
/// Each slot can be booked at most once per calendar date. Bookings are
/// stored per slot as a set of dates, so a date can never be recorded twice
/// for the same slot.
///
/// # Examples
///
/// ```
/// use charge_booking::domain::SlotId;
/// use charge_booking::stations::ChargingStation;
/// use chrono::NaiveDate;
///
/// let mut station = ChargingStation::new("Station A", "Downtown", ["Slot 1", "Slot 2"]);
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// assert!(station.book("Slot 1", day));
/// assert_eq!(station.available_slots(day), vec![SlotId::from("Slot 2")]);
///
/// // Already taken
/// assert!(!station.book("Slot 1", day));
/// ```
#[derive(Debug, Clone)]
pub struct ChargingStation {
    name: String,
    location: String,
    slots: Vec<SlotId>,
    bookings: HashMap<SlotId, BTreeSet<NaiveDate>>,
}

impl ChargingStation {
    /// Create a station with no bookings.
    pub fn new<S>(
        name: impl Into<String>,
        location: impl Into<String>,
        slots: impl IntoIterator<Item = S>,
    ) -> Self
    where
        S: Into<SlotId>,
    {
        Self {
            name: name.into(),
            location: location.into(),
            slots: slots.into_iter().map(Into::into).collect(),
            bookings: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// All slots in station order, booked or not.
    pub fn slots(&self) -> &[SlotId] {
        &self.slots
    }

    /// Slots that are free on `date`, in station order.
    pub fn available_slots(&self, date: NaiveDate) -> Vec<SlotId> {
        self.slots
            .iter()
            .filter(|slot| !self.is_booked(slot.as_str(), date))
            .cloned()
            .collect()
    }

    /// Check whether `slot` belongs to this station and is free on `date`.
    pub fn is_available(&self, slot: &str, date: NaiveDate) -> bool {
        self.slots.iter().any(|s| s.as_str() == slot) && !self.is_booked(slot, date)
    }

    fn is_booked(&self, slot: &str, date: NaiveDate) -> bool {
        self.bookings
            .get(slot)
            .is_some_and(|dates| dates.contains(&date))
    }

    /// Reserve `slot` for `date`.
    ///
    /// Returns the new booking, or `None` if the slot is unknown or already
    /// booked that day. State is only changed on success.
    pub fn reserve(&mut self, slot: &str, date: NaiveDate) -> Option<Booking> {
        if !self.is_available(slot, date) {
            info!(station = %self.name, slot, %date, "slot not available");
            return None;
        }

        let slot = SlotId::from(slot);
        self.bookings.entry(slot.clone()).or_default().insert(date);
        debug!(station = %self.name, %slot, %date, "slot booked");

        Some(Booking::new(self.name.clone(), slot, date))
    }

    /// Book `slot` for `date`, returning whether the booking was made.
    pub fn book(&mut self, slot: &str, date: NaiveDate) -> bool {
        self.reserve(slot, date).is_some()
    }

    /// Current bookings: slot → booked dates.
    pub fn booked_slots(&self) -> &HashMap<SlotId, BTreeSet<NaiveDate>> {
        &self.bookings
    }

    /// Current bookings as records, ordered by slot then date.
    pub fn bookings(&self) -> Vec<Booking> {
        self.slots
            .iter()
            .filter_map(|slot| self.bookings.get(slot).map(|dates| (slot, dates)))
            .flat_map(|(slot, dates)| {
                dates
                    .iter()
                    .map(move |date| Booking::new(self.name.clone(), slot.clone(), *date))
            })
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const SLOTS: [&str; 4] = ["Slot 1", "Slot 2", "Slot 3", "Slot 4"];

    /// Booking attempts: (slot index, day offset). Index 4 is an unknown slot.
    fn attempts() -> impl Strategy<Value = Vec<(usize, i64)>> {
        proptest::collection::vec((0usize..5, 0i64..5), 0..30)
    }

    fn slot_name(idx: usize) -> &'static str {
        SLOTS.get(idx).copied().unwrap_or("Slot X")
    }

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    proptest! {
        /// available_slots is exactly the slots whose booked set lacks the date
        #[test]
        fn available_matches_booked_sets(ops in attempts(), probe in 0i64..5) {
            let mut station = ChargingStation::new("S", "L", SLOTS);
            for (idx, offset) in &ops {
                station.book(slot_name(*idx), base() + chrono::Duration::days(*offset));
            }

            let date = base() + chrono::Duration::days(probe);
            let expected: Vec<SlotId> = station
                .slots()
                .iter()
                .filter(|s| !station.booked_slots().get(*s).is_some_and(|d| d.contains(&date)))
                .cloned()
                .collect();
            prop_assert_eq!(station.available_slots(date), expected);
        }

        /// book succeeds exactly when the slot was listed as available
        #[test]
        fn book_agrees_with_availability(ops in attempts()) {
            let mut station = ChargingStation::new("S", "L", SLOTS);
            for (idx, offset) in ops {
                let date = base() + chrono::Duration::days(offset);
                let slot = slot_name(idx);
                let was_available = station.available_slots(date).iter().any(|s| s.as_str() == slot);
                prop_assert_eq!(station.book(slot, date), was_available);
                prop_assert!(!station.available_slots(date).iter().any(|s| s.as_str() == slot));
            }
        }

        /// Unknown slots never acquire bookings
        #[test]
        fn only_known_slots_booked(ops in attempts()) {
            let mut station = ChargingStation::new("S", "L", SLOTS);
            for (idx, offset) in ops {
                station.book(slot_name(idx), base() + chrono::Duration::days(offset));
            }
            prop_assert!(station.booked_slots().keys().all(|s| SLOTS.contains(&s.as_str())));
        }
    }
}
