//! The interactive menu loop.
//!
//! Each pass renders the current list, asks for one action and runs it to
//! completion before the next prompt.

use std::fmt;

use anyhow::{Context, Result};
use dialoguer::Select;
use tracing::debug;

use crate::commands;
use crate::render::render_list;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Select,
    Update,
    Delete,
    Search,
    Refresh,
    Export,
    ClearAll,
    Quit,
}

impl Action {
    const ALL: [Action; 9] = [
        Action::Add,
        Action::Select,
        Action::Update,
        Action::Delete,
        Action::Search,
        Action::Refresh,
        Action::Export,
        Action::ClearAll,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Add => "Add event",
            Action::Select => "Select / view details",
            Action::Update => "Update selected",
            Action::Delete => "Delete selected",
            Action::Search => "Search",
            Action::Refresh => "Show all",
            Action::Export => "Export to CSV",
            Action::ClearAll => "Clear all",
            Action::Quit => "Quit",
        };
        f.write_str(label)
    }
}

pub fn run(session: &mut Session) -> Result<()> {
    loop {
        println!("\n{}\n", render_list(session));

        let labels: Vec<String> = Action::ALL.iter().map(Action::to_string).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()
            .context("Failed to read menu choice")?;

        let action = Action::ALL[choice];
        debug!(?action, "menu action");

        match action {
            Action::Add => commands::add::run(session)?,
            Action::Select => commands::show::run(session)?,
            Action::Update => commands::update::run(session)?,
            Action::Delete => commands::delete::run(session)?,
            Action::Search => commands::search::run(session)?,
            Action::Refresh => session.refresh(),
            Action::Export => commands::export::run(session)?,
            Action::ClearAll => commands::clear::run(session)?,
            Action::Quit => return Ok(()),
        }
    }
}
