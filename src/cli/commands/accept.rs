use crate::cli::commands::generate::resolve_employee_id;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Accept {
        employee_id,
        agree_terms,
    } = cmd
    {
        if !agree_terms {
            return Err(AppError::TermsNotAgreed);
        }

        let id = resolve_employee_id(employee_id)?;

        let store = Store::open(&cfg.database)?;
        let mut offer = store
            .offer_for_employee(&id)?
            .ok_or_else(|| AppError::OfferNotFound(id.clone()))?;

        offer.accepted = true;
        store.put_offer(&offer)?;

        success("Offer accepted");
    }
    Ok(())
}
