use anyhow::Result;
use eventdesk_core::EventForm;

use crate::prompt;
use crate::render::Render;
use crate::session::Session;

pub fn run(session: &mut Session) -> Result<()> {
    let mut form = match session.selected_event() {
        Ok(event) => EventForm::from_event(event),
        Err(_) => {
            super::hint("Please select an event to update.");
            return Ok(());
        }
    };

    loop {
        form = prompt::prompt_form(&form)?;

        match session.update_selected(&form) {
            Ok(()) => {
                super::success("Event updated successfully!");
                return Ok(());
            }
            Err(e) if e.is_validation() => {
                eprintln!("  {}", e.render());
                if !prompt::retry()? {
                    return Ok(());
                }
            }
            Err(e) => {
                eprintln!("  {}", e.render());
                return Ok(());
            }
        }
    }
}
