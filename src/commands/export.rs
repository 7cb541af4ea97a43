use std::path::PathBuf;

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::session::Session;

pub fn run(session: &Session) -> Result<()> {
    let suggested = session.config().export_path.display().to_string();

    let answer: String = Input::new()
        .with_prompt("  Save CSV as (empty to cancel)")
        .default(suggested)
        .allow_empty(true)
        .interact_text()?;

    let answer = answer.trim();
    if answer.is_empty() {
        println!("{}", "  Export cancelled".dimmed());
        return Ok(());
    }

    let path = with_csv_extension(PathBuf::from(answer));
    match session.export_to(&path) {
        Ok(_) => super::success(&format!("Events exported to {}", path.display())),
        Err(e) => eprintln!("  {}", e.render()),
    }

    Ok(())
}

/// Add a `.csv` extension when the path has none.
fn with_csv_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension("csv");
    }
    path
}
