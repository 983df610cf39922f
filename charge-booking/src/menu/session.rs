//! The interactive booking loop.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::domain::parse_booking_date;
use crate::stations::StationRegistry;

use super::error::MenuError;
use super::prompt::Prompter;

const WELCOME: &str = "Welcome to the EV Charging Station Finder and Slot Booking System!";
const GOODBYE: &str = "Thank you for using the system. Goodbye!";

/// What to do after one pass through the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Go straight back to the main menu.
    Restart,
    /// Ask whether the user wants to carry on.
    Done,
    /// End the session.
    Quit,
}

/// A text-menu session over a station registry.
///
/// The session owns the registry for its lifetime; bookings made through
/// the menu are visible via [`Session::registry`] afterwards.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use charge_booking::config::SessionConfig;
/// use charge_booking::menu::Session;
/// use charge_booking::stations::default_registry;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let mut session = Session::new(default_registry().unwrap(), SessionConfig::default(), today);
///
/// let input = Cursor::new("1\nStation A\n2024-01-01\nSlot 1\nno\n");
/// let mut output = Vec::new();
/// session.run(input, &mut output).unwrap();
///
/// assert_eq!(session.registry().bookings().len(), 1);
/// ```
pub struct Session {
    registry: StationRegistry,
    config: SessionConfig,
    today: NaiveDate,
}

impl Session {
    /// Create a session. `today` is used when the user leaves the date blank.
    pub fn new(registry: StationRegistry, config: SessionConfig, today: NaiveDate) -> Self {
        Self {
            registry,
            config,
            today,
        }
    }

    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> StationRegistry {
        self.registry
    }

    /// Run the menu until the user quits or the input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<(), MenuError> {
        let mut io = Prompter::new(input, output);
        info!(stations = self.registry.len(), today = %self.today, "session started");

        loop {
            match self.main_menu(&mut io)? {
                Flow::Restart => continue,
                Flow::Quit => break,
                Flow::Done => {
                    let prompt = format!(
                        "\nDo you want to book another slot or search again? ({} to continue, no to quit): ",
                        self.config.continue_answer
                    );
                    match io.ask(&prompt)? {
                        Some(answer) if self.config.wants_to_continue(&answer) => continue,
                        Some(_) => {
                            io.say(GOODBYE)?;
                            break;
                        }
                        None => break,
                    }
                }
            }
        }

        info!(bookings = self.registry.bookings().len(), "session ended");
        Ok(())
    }

    fn main_menu<R: BufRead, W: Write>(
        &mut self,
        io: &mut Prompter<R, W>,
    ) -> Result<Flow, MenuError> {
        io.say("")?;
        io.say(WELCOME)?;
        io.say("1. View all charging stations")?;
        io.say("2. Search for stations by location")?;
        io.say("3. Quit")?;

        let Some(choice) = io.ask("Please select an option (1/2/3): ")? else {
            return Ok(Flow::Quit);
        };

        let location = match choice.as_str() {
            "1" => None,
            "2" => match io.ask("Enter the location to find stations: ")? {
                Some(location) => Some(location),
                None => return Ok(Flow::Quit),
            },
            "3" => {
                io.say(GOODBYE)?;
                return Ok(Flow::Quit);
            }
            _ => {
                io.say("Invalid option. Please try again.")?;
                return Ok(Flow::Restart);
            }
        };

        self.offer_booking(io, location.as_deref())
    }

    /// List the stations for `location` and walk the user through a booking.
    fn offer_booking<R: BufRead, W: Write>(
        &mut self,
        io: &mut Prompter<R, W>,
        location: Option<&str>,
    ) -> Result<Flow, MenuError> {
        let listing: Vec<String> = self
            .registry
            .filter(location)
            .iter()
            .map(|s| format!("- {} ({})", s.name(), s.location()))
            .collect();

        if listing.is_empty() {
            debug!(?location, "no stations found");
            io.say("No charging stations found.")?;
            return Ok(Flow::Done);
        }

        io.say("")?;
        io.say("Available stations:")?;
        for line in &listing {
            io.say(line)?;
        }

        let Some(name) = io.ask("Enter the station name to book a slot: ")? else {
            return Ok(Flow::Quit);
        };

        let Some(station) = self.registry.select_mut(location, &name) else {
            io.say(&format!(
                "No station found with the name '{name}'. Please try again."
            ))?;
            return Ok(Flow::Done);
        };

        let date_prompt = format!(
            "Enter the date for booking ({}) or press Enter for today's date: ",
            self.config.date_hint()
        );
        let Some(date_input) = io.ask(&date_prompt)? else {
            return Ok(Flow::Quit);
        };
        let date = match parse_booking_date(&date_input, &self.config.date_format, self.today) {
            Ok(date) => date,
            Err(err) => {
                debug!(input = %date_input, error = %err, "rejected booking date");
                io.say("Invalid date format. Please try again.")?;
                return Ok(Flow::Restart);
            }
        };

        let available = station.available_slots(date);
        if available.is_empty() {
            io.say("No available slots for the selected date.")?;
            return Ok(Flow::Done);
        }

        let shown_date = self.config.format_date(date);
        let names: Vec<&str> = available.iter().map(|s| s.as_str()).collect();
        io.say(&format!(
            "Available slots on {shown_date}: {}",
            names.join(", ")
        ))?;

        let Some(slot) = io.ask("Enter the slot you want to book: ")? else {
            return Ok(Flow::Quit);
        };

        if !station.slots().iter().any(|s| s.as_str() == slot) {
            io.say(&format!("No slot named '{slot}' at {}.", station.name()))?;
            return Ok(Flow::Done);
        }

        match station.reserve(&slot, date) {
            Some(booking) => {
                info!(%booking, "booking confirmed");
                io.say(&format!(
                    "{} booked successfully on {shown_date} at {}!",
                    booking.slot, booking.station
                ))?;
            }
            None => {
                io.say(&format!(
                    "{slot} is already booked on {shown_date} at {}.",
                    station.name()
                ))?;
            }
        }

        Ok(Flow::Done)
    }
}
