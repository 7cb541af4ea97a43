//! Error types for eventdesk.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A required form field, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Date,
    Time,
    Location,
    Attendees,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Date => "date",
            Field::Time => "time",
            Field::Location => "location",
            Field::Attendees => "attendees",
        };
        f.write_str(label)
    }
}

/// Errors that can occur in eventdesk operations.
///
/// None of these are fatal: every one is reported back to the action that
/// triggered it and the store is left as it was.
#[derive(Error, Debug)]
pub enum EventDeskError {
    #[error("Please fill all required fields ({0} is empty)")]
    MissingField(Field),

    #[error("Use YYYY-MM-DD format for the date (got '{0}')")]
    InvalidDateFormat(String),

    #[error("Use HH:MM format for the time (got '{0}')")]
    InvalidTimeFormat(String),

    #[error(
        "Attendees must be a whole number between -9223372036854775808 and 9223372036854775807 (got '{0}')"
    )]
    InvalidAttendeesCount(String),

    #[error("No event at position {}", display_index(.0))]
    IndexOutOfRange(Option<usize>),

    #[error("Could not write {}: {reason}", .path.display())]
    WriteFailure { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

fn display_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => (i + 1).to_string(),
        None => "(none selected)".to_string(),
    }
}

impl EventDeskError {
    /// Short heading for the error, as shown above the message.
    pub fn title(&self) -> &'static str {
        match self {
            EventDeskError::MissingField(_) => "Input Error",
            EventDeskError::InvalidDateFormat(_) => "Date Format Error",
            EventDeskError::InvalidTimeFormat(_) => "Time Format Error",
            EventDeskError::InvalidAttendeesCount(_) => "Attendees Error",
            EventDeskError::IndexOutOfRange(_) => "Selection Error",
            EventDeskError::WriteFailure { .. } => "Export Error",
            EventDeskError::Config(_) => "Configuration Error",
        }
    }

    /// Whether this is a rejected form submission.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EventDeskError::MissingField(_)
                | EventDeskError::InvalidDateFormat(_)
                | EventDeskError::InvalidTimeFormat(_)
                | EventDeskError::InvalidAttendeesCount(_)
        )
    }
}

/// Result type alias for eventdesk operations.
pub type EventDeskResult<T> = Result<T, EventDeskError>;
