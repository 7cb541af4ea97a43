//! Terminal rendering for eventdesk types.
//!
//! Extension traits and helpers that turn core types into display strings,
//! colored with owo_colors where it helps.

use eventdesk_core::{Entry, Event, EventDeskError};
use owo_colors::OwoColorize;

use crate::session::{Session, View};

pub trait Render {
    fn render(&self) -> String;
}

/// One list row, numbered by 1-based store position.
impl Render for Entry<'_> {
    fn render(&self) -> String {
        let e = self.event;
        format!(
            "{}. {} | {} {} | {} | {} | {} Attendees",
            self.position + 1,
            e.name,
            e.date,
            e.time,
            e.location,
            e.category,
            e.attendees
        )
    }
}

impl Render for EventDeskError {
    fn render(&self) -> String {
        format!("{} {}", format!("{}:", self.title()).red().bold(), self.red())
    }
}

/// Full details for a single event.
pub fn render_details(event: &Event) -> String {
    let rows = [
        ("Name", event.name.clone()),
        ("Date", event.date.clone()),
        ("Time", event.time.clone()),
        ("Location", event.location.clone()),
        ("Attendees", event.attendees.to_string()),
        ("Category", event.category.to_string()),
    ];

    let mut lines = vec![format!("{}", "Event Details".bold())];
    for (label, value) in rows {
        lines.push(format!("  {} {}", format!("{label}:").dimmed(), value));
    }
    lines.push(format!("  {}", "Description:".dimmed()));
    if event.description.is_empty() {
        lines.push(format!("    {}", "(none)".dimmed()));
    } else {
        lines.extend(event.description.lines().map(|l| format!("    {l}")));
    }

    lines.join("\n")
}

/// Count line under the list.
pub fn render_footer(view: &View, count: usize) -> String {
    match view {
        View::All => format!("Total Events: {count}"),
        View::Search(_) => format!("Search Results: {count}"),
    }
}

/// The current view of the session: one row per visible event, then the count.
pub fn render_list(session: &Session) -> String {
    let entries = session.visible();
    let mut lines = Vec::new();

    if let View::Search(query) = session.view() {
        lines.push(format!("Search: \"{query}\"").dimmed().to_string());
    }

    if entries.is_empty() {
        lines.push("   No events".dimmed().to_string());
    }

    for entry in &entries {
        let row = entry.render();
        if session.selection() == Some(entry.position) {
            lines.push(format!(" {} {}", ">".cyan(), row.cyan()));
        } else {
            lines.push(format!("   {row}"));
        }
    }

    lines.push(render_footer(session.view(), entries.len()).bold().to_string());
    lines.join("\n")
}
