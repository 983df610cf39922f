//! Configuration for the interactive booking session.

use chrono::NaiveDate;

use crate::domain::DATE_FORMAT;

/// Settings for a menu session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Answer that keeps the session going after a booking attempt.
    /// Compared ignoring case; anything else ends the session.
    pub continue_answer: String,

    /// chrono format string for typed booking dates.
    pub date_format: String,
}

impl SessionConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(continue_answer: impl Into<String>, date_format: impl Into<String>) -> Self {
        Self {
            continue_answer: continue_answer.into(),
            date_format: date_format.into(),
        }
    }

    /// Set the answer that continues the session.
    pub fn with_continue_answer(mut self, answer: impl Into<String>) -> Self {
        self.continue_answer = answer.into();
        self
    }

    /// Set the date input format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// The date format spelled out for users, e.g. `YYYY-MM-DD`.
    pub fn date_hint(&self) -> String {
        self.date_format
            .replace("%Y", "YYYY")
            .replace("%y", "YY")
            .replace("%m", "MM")
            .replace("%d", "DD")
    }

    /// Render `date` the way users are asked to type it.
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    /// Whether `answer` asks to keep going.
    pub fn wants_to_continue(&self, answer: &str) -> bool {
        answer.trim().to_lowercase() == self.continue_answer.to_lowercase()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            continue_answer: "yes".to_string(),
            date_format: DATE_FORMAT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SessionConfig::default();

        assert_eq!(config.continue_answer, "yes");
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn custom_config() {
        let config = SessionConfig::new("y", "%d/%m/%Y");

        assert_eq!(config.continue_answer, "y");
        assert_eq!(config.date_format, "%d/%m/%Y");
    }

    #[test]
    fn builder_setters() {
        let config = SessionConfig::default()
            .with_continue_answer("again")
            .with_date_format("%d.%m.%Y");

        assert_eq!(config, SessionConfig::new("again", "%d.%m.%Y"));
    }

    #[test]
    fn date_hint_follows_format() {
        assert_eq!(SessionConfig::default().date_hint(), "YYYY-MM-DD");

        let config = SessionConfig::default().with_date_format("%d/%m/%Y");
        assert_eq!(config.date_hint(), "DD/MM/YYYY");

        let config = SessionConfig::default().with_date_format("%d.%m.%y");
        assert_eq!(config.date_hint(), "DD.MM.YY");
    }

    #[test]
    fn format_date_follows_format() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(SessionConfig::default().format_date(date), "2024-01-31");

        let config = SessionConfig::default().with_date_format("%d/%m/%Y");
        assert_eq!(config.format_date(date), "31/01/2024");
    }

    #[test]
    fn continue_answer_ignores_case() {
        let config = SessionConfig::default();

        assert!(config.wants_to_continue("yes"));
        assert!(config.wants_to_continue("YES"));
        assert!(config.wants_to_continue(" Yes\n"));
        assert!(!config.wants_to_continue("y"));
        assert!(!config.wants_to_continue("no"));
        assert!(!config.wants_to_continue(""));
    }
}
