use crate::core::session::SessionStore;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle() -> AppResult<()> {
    SessionStore::new().clear()?;
    info("You have been logged out");
    Ok(())
}
