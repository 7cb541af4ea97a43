use anyhow::Result;
use dialoguer::Input;

use crate::session::Session;

pub fn run(session: &mut Session) -> Result<()> {
    let query: String = Input::new()
        .with_prompt("  Search by name / location / category")
        .allow_empty(true)
        .interact_text()?;

    session.search(&query);
    Ok(())
}
