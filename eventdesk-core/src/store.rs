//! In-memory event store.
//!
//! Events are kept in insertion order and addressed only by their current
//! zero-based position. A position is only meaningful until the next
//! structural change: after a delete, every later event moves down by one.

use tracing::debug;

use crate::error::{EventDeskError, EventDeskResult};
use crate::event::Event;

/// An event together with its current position in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub position: usize,
    pub event: &'a Event,
}

/// Ordered, process-lifetime collection of events.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    /// Append an event at the end.
    pub fn add(&mut self, event: Event) {
        debug!(position = self.events.len(), name = %event.name, "event added");
        self.events.push(event);
    }

    /// Replace the event at `index`, keeping its position.
    pub fn update_at(&mut self, index: Option<usize>, event: Event) -> EventDeskResult<()> {
        let position = self.checked(index)?;
        debug!(position, name = %event.name, "event updated");
        self.events[position] = event;
        Ok(())
    }

    /// Remove and return the event at `index`; later events shift down by one.
    pub fn delete_at(&mut self, index: Option<usize>) -> EventDeskResult<Event> {
        let position = self.checked(index)?;
        let removed = self.events.remove(position);
        debug!(position, name = %removed.name, "event deleted");
        Ok(removed)
    }

    /// Remove every event.
    pub fn clear_all(&mut self) {
        debug!(count = self.events.len(), "store cleared");
        self.events.clear();
    }

    /// All events, in order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    /// All events with their positions.
    pub fn entries(&self) -> Vec<Entry<'_>> {
        self.events
            .iter()
            .enumerate()
            .map(|(position, event)| Entry { position, event })
            .collect()
    }

    /// Events whose name, location or category contains `query`, ignoring case.
    ///
    /// An empty query matches every event.
    pub fn search(&self, query: &str) -> Vec<Entry<'_>> {
        let needle = query.to_lowercase();
        self.events
            .iter()
            .enumerate()
            .filter(|(_, event)| event.matches(&needle))
            .map(|(position, event)| Entry { position, event })
            .collect()
    }

    fn checked(&self, index: Option<usize>) -> EventDeskResult<usize> {
        match index {
            Some(i) if i < self.events.len() => Ok(i),
            _ => Err(EventDeskError::IndexOutOfRange(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;

    fn make_event(name: &str, location: &str, category: Category) -> Event {
        Event {
            name: name.to_string(),
            date: "2025-03-20".to_string(),
            time: "15:00".to_string(),
            location: location.to_string(),
            attendees: 10,
            category,
            description: String::new(),
        }
    }

    fn sample_store() -> EventStore {
        let mut store = EventStore::new();
        store.add(make_event("Rust Meetup", "Berlin", Category::Meetup));
        store.add(make_event("Summer Jam", "Lisbon", Category::Festival));
        store.add(make_event("Async Deep Dive", "Online", Category::Webinar));
        store.add(make_event("Tooling Day", "Berlin", Category::Workshop));
        store
    }

    fn names(store: &EventStore) -> Vec<&str> {
        store.list().iter().map(|e| e.name.as_str()).collect()
    }

    // --- add / list ---

    #[test]
    fn new_store_is_empty() {
        let store = EventStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn add_appends_verbatim() {
        let mut store = sample_store();
        let event = make_event("Closing Party", "Lisbon", Category::Festival);
        store.add(event.clone());
        assert_eq!(store.len(), 5);
        assert_eq!(store.list().last(), Some(&event));
    }

    // --- update_at ---

    #[test]
    fn update_replaces_in_place() {
        let mut store = sample_store();
        let before = store.list().to_vec();
        let replacement = make_event("Summer Jam 2", "Porto", Category::Festival);

        store.update_at(Some(1), replacement.clone()).unwrap();

        assert_eq!(store.list()[1], replacement);
        for i in [0, 2, 3] {
            assert_eq!(store.list()[i], before[i]);
        }
    }

    #[test]
    fn update_without_selection_fails_and_leaves_store() {
        let mut store = sample_store();
        let before = store.list().to_vec();
        let result = store.update_at(None, make_event("X", "Y", Category::Meetup));
        assert!(matches!(result, Err(EventDeskError::IndexOutOfRange(None))));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn update_past_end_fails() {
        let mut store = sample_store();
        let result = store.update_at(Some(4), make_event("X", "Y", Category::Meetup));
        assert!(matches!(
            result,
            Err(EventDeskError::IndexOutOfRange(Some(4)))
        ));
    }

    // --- delete_at ---

    #[test]
    fn delete_shifts_later_events_down() {
        let mut store = sample_store();
        let removed = store.delete_at(Some(1)).unwrap();
        assert_eq!(removed.name, "Summer Jam");
        assert_eq!(store.len(), 3);
        assert_eq!(names(&store), ["Rust Meetup", "Async Deep Dive", "Tooling Day"]);
    }

    #[test]
    fn delete_without_selection_fails_and_leaves_store() {
        let mut store = sample_store();
        assert!(matches!(
            store.delete_at(None),
            Err(EventDeskError::IndexOutOfRange(None))
        ));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn stale_position_after_delete_fails() {
        let mut store = sample_store();
        let last = Some(store.len() - 1);
        store.delete_at(Some(0)).unwrap();
        assert!(matches!(
            store.delete_at(last),
            Err(EventDeskError::IndexOutOfRange(Some(3)))
        ));
        assert_eq!(store.len(), 3);
    }

    // --- clear_all ---

    #[test]
    fn clear_all_empties_store() {
        let mut store = sample_store();
        store.clear_all();
        assert!(store.is_empty());

        store.clear_all();
        assert!(store.is_empty());
    }

    // --- search ---

    #[test]
    fn empty_query_returns_everything_in_order() {
        let store = sample_store();
        let positions: Vec<usize> = store.search("").iter().map(|e| e.position).collect();
        assert_eq!(positions, [0, 1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let store = sample_store();
        let hits = store.search("BERL");
        let positions: Vec<usize> = hits.iter().map(|e| e.position).collect();
        assert_eq!(positions, [0, 3]);
        assert_eq!(hits[1].event.name, "Tooling Day");
    }

    #[test]
    fn search_matches_category() {
        let store = sample_store();
        let hits = store.search("webinar");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].position, 2);
    }

    #[test]
    fn search_ignores_date_and_time() {
        let store = sample_store();
        assert!(store.search("2025").is_empty());
        assert!(store.search("15:00").is_empty());
    }

    #[test]
    fn search_is_repeatable() {
        let store = sample_store();
        assert_eq!(store.search("a"), store.search("a"));
    }

    #[test]
    fn entries_carry_positions() {
        let store = sample_store();
        let entries = store.entries();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().enumerate().all(|(i, e)| e.position == i));
    }
}
