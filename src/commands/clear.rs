use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(session: &mut Session) -> Result<()> {
    let count = session.store().len();
    if count == 0 {
        println!("{}", "  Nothing to clear".dimmed());
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt(format!(
            "  Are you sure you want to clear all {} {}?",
            count,
            if count == 1 { "event" } else { "events" }
        ))
        .default(false)
        .interact()?;

    if !confirmed {
        return Ok(());
    }

    session.clear_all();
    super::success("All events cleared.");
    Ok(())
}
