//! The event record.
//!
//! An `Event` is only ever built by validating an [`EventForm`](crate::form::EventForm),
//! so every value held by the store already satisfies the form rules.

use std::fmt;
use std::str::FromStr;

use crate::error::EventDeskError;

/// A scheduled event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    /// `YYYY-MM-DD` prefix, not checked against the calendar
    pub date: String,
    /// `HH:MM` suffix, not range-checked
    pub time: String,
    pub location: String,
    pub attendees: i64,
    pub category: Category,
    pub description: String,
}

impl Event {
    /// Whether the lower-cased query occurs in the name, location or category.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The closed set of event categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Conference,
    Workshop,
    Webinar,
    Festival,
    Meetup,
}

impl Category {
    /// All categories, in menu order.
    pub const ALL: [Category; 5] = [
        Category::Conference,
        Category::Workshop,
        Category::Webinar,
        Category::Festival,
        Category::Meetup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Conference => "Conference",
            Category::Workshop => "Workshop",
            Category::Webinar => "Webinar",
            Category::Festival => "Festival",
            Category::Meetup => "Meetup",
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub fn menu_index(&self) -> usize {
        Category::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EventDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                EventDeskError::Config(format!(
                    "Unknown category '{}'. Expected one of: Conference, Workshop, Webinar, Festival, Meetup",
                    wanted
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_event() -> Event {
        Event {
            name: "RustConf".to_string(),
            date: "2025-09-02".to_string(),
            time: "09:00".to_string(),
            location: "Seattle".to_string(),
            attendees: 900,
            category: Category::Conference,
            description: String::new(),
        }
    }

    #[test]
    fn category_defaults_to_conference() {
        assert_eq!(Category::default(), Category::Conference);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("workshop".parse::<Category>().unwrap(), Category::Workshop);
        assert_eq!(" MEETUP ".parse::<Category>().unwrap(), Category::Meetup);
        assert!("party".parse::<Category>().is_err());
    }

    #[test]
    fn category_menu_index_follows_all() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.menu_index(), i);
        }
    }

    #[test]
    fn matches_name_location_and_category() {
        let event = make_test_event();
        assert!(event.matches("rust"));
        assert!(event.matches("seat"));
        assert!(event.matches("conference"));
        assert!(event.matches(""));
    }

    #[test]
    fn does_not_match_date_or_description() {
        let mut event = make_test_event();
        event.description = "keynote on async".to_string();
        assert!(!event.matches("2025"));
        assert!(!event.matches("keynote"));
    }
}
