//! Text-menu front end.
//!
//! Drives a [`StationRegistry`](crate::stations::StationRegistry) through
//! line-based prompts: list or search stations, pick one, choose a date and
//! book a free slot.

mod error;
mod prompt;
mod session;

pub use error::MenuError;
pub use prompt::Prompter;
pub use session::Session;
