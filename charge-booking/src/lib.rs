//! EV charging slot booking.
//!
//! An in-memory registry of charging stations whose slots can be booked
//! for whole calendar days, driven through a text menu.

pub mod config;
pub mod domain;
pub mod logging;
pub mod menu;
pub mod stations;
