use anyhow::Result;
use eventdesk_core::EventDeskError;

use crate::render::Render;
use crate::session::Session;

const DELETED: &str = "Event deleted successfully.";

pub fn run(session: &mut Session) -> Result<()> {
    match session.delete_selected() {
        Ok(_) => super::success(DELETED),
        Err(EventDeskError::IndexOutOfRange(None)) => {
            super::hint("Please select an event to delete.")
        }
        Err(e) => eprintln!("  {}", e.render()),
    }
    Ok(())
}
