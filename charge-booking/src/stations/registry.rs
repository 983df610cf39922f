//! The registry of known charging stations.

use crate::domain::{Booking, SlotId};

use super::station::ChargingStation;

/// All known charging stations, in the order they were added.
///
/// The registry does not enforce unique names or locations; callers decide
/// what to add. Lookups return empty results rather than errors.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: Vec<ChargingStation>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station with no bookings.
    pub fn add<S>(
        &mut self,
        name: impl Into<String>,
        location: impl Into<String>,
        slots: impl IntoIterator<Item = S>,
    ) where
        S: Into<SlotId>,
    {
        self.stations.push(ChargingStation::new(name, location, slots));
    }

    /// Stations whose location matches, ignoring case.
    pub fn find_by_location(&self, location: &str) -> Vec<&ChargingStation> {
        self.stations
            .iter()
            .filter(|s| eq_ignore_case(s.location(), location))
            .collect()
    }

    /// Stations at `location`, or every station if no location is given.
    ///
    /// A blank location counts as no location.
    pub fn filter(&self, location: Option<&str>) -> Vec<&ChargingStation> {
        match location {
            Some(loc) if !loc.is_empty() => self.find_by_location(loc),
            _ => self.stations.iter().collect(),
        }
    }

    /// Pick a station for booking out of a [`filter`](Self::filter) result.
    ///
    /// Returns the first station that `filter(location)` would list whose
    /// name matches `name`, ignoring case.
    pub fn select_mut(
        &mut self,
        location: Option<&str>,
        name: &str,
    ) -> Option<&mut ChargingStation> {
        let location = location.filter(|loc| !loc.is_empty());
        self.stations.iter_mut().find(|s| {
            location.is_none_or(|loc| eq_ignore_case(s.location(), loc))
                && eq_ignore_case(s.name(), name)
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChargingStation> {
        self.stations.iter()
    }

    /// Every booking across all stations, in registry order.
    pub fn bookings(&self) -> Vec<Booking> {
        self.stations.iter().flat_map(|s| s.bookings()).collect()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Case-insensitive comparison, Unicode aware.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// filter(None) returns every station in insertion order
        #[test]
        fn filter_none_is_insertion_order(names in proptest::collection::vec("[A-Za-z ]{1,12}", 0..10)) {
            let mut registry = StationRegistry::new();
            for name in &names {
                registry.add(name.clone(), "Anywhere", ["Slot 1"]);
            }
            let listed: Vec<String> = registry.filter(None).iter().map(|s| s.name().to_string()).collect();
            prop_assert_eq!(listed, names);
        }

        /// Location lookup does not depend on the query's case
        #[test]
        fn location_lookup_case_insensitive(location in "[A-Za-z]{1,12}") {
            let mut registry = StationRegistry::new();
            registry.add("Station", location.clone(), ["Slot 1"]);
            prop_assert_eq!(registry.find_by_location(&location.to_uppercase()).len(), 1);
            prop_assert_eq!(registry.find_by_location(&location.to_lowercase()).len(), 1);
        }
    }
}
