//! Interactive session state.
//!
//! The session owns the event store together with what the user is currently
//! looking at (the full list or a search) and which event, if any, they have
//! selected. Every structural change resets the view and drops the selection,
//! so a remembered position can never silently point at a different event.

use std::path::Path;

use eventdesk_core::config::Config;
use eventdesk_core::export;
use eventdesk_core::{Entry, Event, EventDeskError, EventDeskResult, EventForm, EventStore};

/// What the event list is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    All,
    Search(String),
}

pub struct Session {
    store: EventStore,
    view: View,
    selection: Option<usize>,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            store: EventStore::new(),
            view: View::All,
            selection: None,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Entries for the current view, each with its store position.
    pub fn visible(&self) -> Vec<Entry<'_>> {
        match &self.view {
            View::All => self.store.entries(),
            View::Search(query) => self.store.search(query),
        }
    }

    /// A reset form dated `today`, with the configured default category.
    pub fn blank_form(&self, today: &str) -> EventForm {
        EventForm::blank(today, self.config.default_category)
    }

    /// The selected event, or `IndexOutOfRange` if nothing valid is selected.
    pub fn selected_event(&self) -> EventDeskResult<&Event> {
        self.selection
            .and_then(|i| self.store.get(i))
            .ok_or(EventDeskError::IndexOutOfRange(self.selection))
    }

    pub fn add(&mut self, form: &EventForm) -> EventDeskResult<()> {
        let event = form.validate()?;
        self.store.add(event);
        self.reset_view();
        Ok(())
    }

    pub fn select(&mut self, position: usize) -> EventDeskResult<&Event> {
        if position >= self.store.len() {
            return Err(EventDeskError::IndexOutOfRange(Some(position)));
        }
        self.selection = Some(position);
        Ok(&self.store.list()[position])
    }

    /// Replace the selected event. The selection is checked before the form.
    pub fn update_selected(&mut self, form: &EventForm) -> EventDeskResult<()> {
        self.selected_event()?;
        let event = form.validate()?;
        self.store.update_at(self.selection, event)?;
        self.reset_view();
        Ok(())
    }

    pub fn delete_selected(&mut self) -> EventDeskResult<Event> {
        let removed = self.store.delete_at(self.selection)?;
        self.reset_view();
        Ok(removed)
    }

    /// Remove every event. Asking the user first is up to the caller.
    pub fn clear_all(&mut self) {
        self.store.clear_all();
        self.reset_view();
    }

    pub fn search(&mut self, query: &str) {
        self.view = View::Search(query.to_string());
        self.selection = None;
    }

    pub fn refresh(&mut self) {
        self.reset_view();
    }

    /// Export the whole store, regardless of the current view.
    pub fn export_to(&self, path: &Path) -> EventDeskResult<usize> {
        export::export_to_path(self.store.list(), path)
    }

    fn reset_view(&mut self) {
        self.view = View::All;
        self.selection = None;
    }
}
