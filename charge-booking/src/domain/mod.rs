//! Domain types for charging slot bookings.
//!
//! Slots, booking records and booking-date parsing. Stations and the
//! registry that owns them live in [`crate::stations`].

mod booking;
mod date;
mod slot;

pub use booking::Booking;
pub use date::{DATE_FORMAT, DateError, parse_booking_date};
pub use slot::SlotId;
