use anyhow::Result;
use dialoguer::Select;
use owo_colors::OwoColorize;

use crate::render::{render_details, Render};
use crate::session::Session;

/// Pick an event from the current view, remember it as the selection and show it.
pub fn run(session: &mut Session) -> Result<()> {
    let (rows, positions): (Vec<String>, Vec<usize>) = session
        .visible()
        .iter()
        .map(|entry| (entry.render(), entry.position))
        .unzip();

    if rows.is_empty() {
        println!("{}", "  No events to select".dimmed());
        return Ok(());
    }

    let default = session
        .selection()
        .and_then(|selected| positions.iter().position(|&p| p == selected))
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("  Select an event")
        .items(&rows)
        .default(default)
        .interact()?;

    match session.select(positions[choice]) {
        Ok(event) => println!("\n{}", render_details(event)),
        Err(e) => eprintln!("  {}", e.render()),
    }

    Ok(())
}
