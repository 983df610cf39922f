//! Seed list of charging stations.
//!
//! The registry is populated at startup from a JSON catalogue. A default
//! catalogue is compiled into the binary.

use serde::Deserialize;
use tracing::debug;

use super::error::CatalogueError;
use super::registry::StationRegistry;

/// Catalogue compiled into the binary.
const DEFAULT_CATALOGUE: &str = include_str!("../../data/stations.json");

/// One station as listed in a catalogue.
#[derive(Debug, Clone, Deserialize)]
pub struct StationEntry {
    pub name: String,
    pub location: String,
    pub slots: Vec<String>,
}

/// Build a registry from catalogue JSON: an array of
/// `{ "name", "location", "slots" }` objects.
///
/// Entries keep their listed order. Every entry needs a name; a station
/// with no slots is accepted and simply never has availability.
pub fn registry_from_json(text: &str) -> Result<StationRegistry, CatalogueError> {
    let entries: Vec<StationEntry> = serde_json::from_str(text)?;
    build_registry(entries)
}

/// The built-in stations.
///
/// # Examples
///
/// ```
/// use charge_booking::stations::default_registry;
///
/// let registry = default_registry().unwrap();
/// assert_eq!(registry.len(), 3);
/// assert_eq!(registry.find_by_location("downtown").len(), 1);
/// ```
pub fn default_registry() -> Result<StationRegistry, CatalogueError> {
    registry_from_json(DEFAULT_CATALOGUE)
}

fn build_registry(entries: Vec<StationEntry>) -> Result<StationRegistry, CatalogueError> {
    let mut registry = StationRegistry::new();

    for (index, entry) in entries.into_iter().enumerate() {
        if entry.name.trim().is_empty() {
            return Err(CatalogueError::MissingName { index });
        }

        debug!(name = %entry.name, location = %entry.location, slots = entry.slots.len(), "adding station");
        registry.add(entry.name, entry.location, entry.slots);
    }

    Ok(registry)
}
