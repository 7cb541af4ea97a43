use anyhow::Result;

use crate::prompt;
use crate::render::Render;
use crate::session::Session;

pub fn run(session: &mut Session) -> Result<()> {
    let mut form = session.blank_form(&prompt::today());

    loop {
        form = prompt::prompt_form(&form)?;

        match session.add(&form) {
            Ok(()) => {
                super::success("Event added successfully!");
                return Ok(());
            }
            Err(e) => {
                eprintln!("  {}", e.render());
                if !prompt::retry()? {
                    return Ok(());
                }
            }
        }
    }
}
