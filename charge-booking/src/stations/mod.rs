//! Charging stations and the registry that holds them.
//!
//! A station owns its slots and the dates each slot is booked for. The
//! registry keeps stations in insertion order and answers location lookups.
//! The starting set of stations comes from a JSON catalogue.

mod catalogue;
mod error;
mod registry;
mod station;

pub use catalogue::{StationEntry, default_registry, registry_from_json};
pub use error::CatalogueError;
pub use registry::StationRegistry;
pub use station::ChargingStation;
