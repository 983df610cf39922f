//! Charging slot identifiers.

use std::borrow::Borrow;
use std::fmt;

/// Identifier of a charging slot within a station, e.g. `"Slot 1"`.
///
/// Slot identifiers are compared exactly: `"slot 1"` and `"Slot 1"` name
/// different slots. An identifier the station does not own is simply never
/// available for booking.
///
/// # Examples
///
/// ```
/// use charge_booking::domain::SlotId;
///
/// let slot = SlotId::new("Slot 1");
/// assert_eq!(slot.as_str(), "Slot 1");
/// assert_eq!(slot.to_string(), "Slot 1");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(String);

impl SlotId {
    /// Create a slot identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SlotId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SlotId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for SlotId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotId({})", self.0)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_debug() {
        let slot = SlotId::new("Slot 2");
        assert_eq!(format!("{}", slot), "Slot 2");
        assert_eq!(format!("{:?}", slot), "SlotId(Slot 2)");
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(SlotId::from("Slot 1"), SlotId::new("Slot 1".to_string()));
        assert_ne!(SlotId::from("Slot 1"), SlotId::from("slot 1"));
    }

    #[test]
    fn borrow_as_str_for_map_lookup() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(SlotId::from("Slot 1"), 1);
        assert_eq!(map.get("Slot 1"), Some(&1));
        assert_eq!(map.get("Slot 9"), None);
    }
}
