//! Form prompts.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use eventdesk_core::{Category, EventForm};

/// Today's date in form format.
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Ask for every form field, offering `initial` values as defaults.
///
/// Empty answers are accepted here; presence is checked when the form is validated.
pub fn prompt_form(initial: &EventForm) -> Result<EventForm> {
    let name = text("  Event name", &initial.name)?;
    let date = text("  Date (YYYY-MM-DD)", &initial.date)?;
    let time = text("  Time (HH:MM)", &initial.time)?;
    let location = text("  Location", &initial.location)?;
    let attendees = text("  Attendees (number)", &initial.attendees)?;

    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    let choice = Select::new()
        .with_prompt("  Category")
        .items(&labels)
        .default(initial.category.menu_index())
        .interact()?;
    let category = Category::ALL[choice];

    let description = text("  Description (skip)", &initial.description)?;

    Ok(EventForm {
        name,
        date,
        time,
        location,
        attendees,
        category,
        description,
    })
}

/// Ask whether to edit the rejected form and submit again.
pub fn retry() -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt("  Edit and try again?")
        .default(true)
        .interact()?)
}

fn text(prompt: &str, initial: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .default(initial.to_string())
        .show_default(!initial.is_empty())
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
