//! Raw form input and its validation into an [`Event`].
//!
//! Rules are checked in a fixed order and the first failure wins:
//! presence, date shape, time shape, attendees count.
//!
//! Presence is judged on trimmed text. The date and time shape checks run on
//! the text exactly as entered and are shape checks only: a date has to
//! *start* with `DDDD-DD-DD` and a time has to *end* with `DD:DD`, so
//! `2024-99-99 (tbc)` and `at 09:30` are both accepted while ` 2024-01-01`
//! and `09:30 ` are not.

use crate::error::{EventDeskError, EventDeskResult, Field};
use crate::event::{Category, Event};

/// User-entered values for one event, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub attendees: String,
    pub category: Category,
    pub description: String,
}

impl EventForm {
    /// A reset form: everything empty except the date and category.
    pub fn blank(today: impl Into<String>, category: Category) -> Self {
        EventForm {
            date: today.into(),
            category,
            ..Default::default()
        }
    }

    /// A form pre-filled with an existing event's values.
    pub fn from_event(event: &Event) -> Self {
        EventForm {
            name: event.name.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            attendees: event.attendees.to_string(),
            category: event.category,
            description: event.description.clone(),
        }
    }

    /// Validate the form and build the event it describes.
    pub fn validate(&self) -> EventDeskResult<Event> {
        let name = self.name.trim();
        let location = self.location.trim();
        let attendees = self.attendees.trim();

        let required = [
            (Field::Name, name),
            (Field::Date, self.date.trim()),
            (Field::Time, self.time.trim()),
            (Field::Location, location),
            (Field::Attendees, attendees),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(EventDeskError::MissingField(*field));
        }

        if !has_date_prefix(&self.date) {
            return Err(EventDeskError::InvalidDateFormat(self.date.clone()));
        }

        if !has_time_suffix(&self.time) {
            return Err(EventDeskError::InvalidTimeFormat(self.time.clone()));
        }

        let attendees = parse_attendees(attendees)
            .ok_or_else(|| EventDeskError::InvalidAttendeesCount(attendees.to_string()))?;

        Ok(Event {
            name: name.to_string(),
            date: self.date.clone(),
            time: self.time.clone(),
            location: location.to_string(),
            attendees,
            category: self.category,
            description: self.description.trim().to_string(),
        })
    }
}

/// Validate raw field values into an event.
pub fn validate(
    name: &str,
    date: &str,
    time: &str,
    location: &str,
    attendees: &str,
    category: Category,
    description: &str,
) -> EventDeskResult<Event> {
    EventForm {
        name: name.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        attendees: attendees.to_string(),
        category,
        description: description.to_string(),
    }
    .validate()
}

/// Parse a base-10 count with an optional sign.
///
/// Single underscores between digits are allowed as separators (`1_000`).
fn parse_attendees(input: &str) -> Option<i64> {
    let digits = input
        .strip_prefix(['+', '-'])
        .unwrap_or(input);
    let bytes = digits.as_bytes();

    let well_formed = bytes.first().is_some_and(u8::is_ascii_digit)
        && bytes.last().is_some_and(u8::is_ascii_digit)
        && bytes.iter().all(|b| b.is_ascii_digit() || *b == b'_')
        && !digits.contains("__");
    if !well_formed {
        return None;
    }

    input.replace('_', "").parse().ok()
}

/// Check that the input starts with `DDDD-DD-DD`.
fn has_date_prefix(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() < 10 {
        return false;
    }

    bytes[..10].iter().enumerate().all(|(i, &b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Check that the input ends with `DD:DD`.
fn has_time_suffix(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() < 5 {
        return false;
    }

    bytes[bytes.len() - 5..]
        .iter()
        .enumerate()
        .all(|(i, &b)| match i {
            2 => b == b':',
            _ => b.is_ascii_digit(),
        })
}
