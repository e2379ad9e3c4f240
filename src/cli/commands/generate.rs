use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::letter::{LetterTemplate, offer_paragraphs};
use crate::core::session::SessionStore;
use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::models::offer::Offer;
use crate::ui::messages::success;
use uuid::Uuid;

/// Build the offer content for an employee and store it, replacing any
/// previous offer. Regeneration resets acceptance: changed terms need a
/// fresh agreement.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate { employee_id } = cmd {
        let id = resolve_employee_id(employee_id)?;

        let store = Store::open(&cfg.database)?;
        let employee = store
            .employee(&id)?
            .ok_or_else(|| AppError::EmployeeNotFound(id.clone()))?;

        let template = LetterTemplate::from(cfg);
        let content = offer_paragraphs(Some(&employee), &template);

        let offer_id = match store.offer_for_employee(&id)? {
            Some(existing) => existing.id,
            None => Uuid::new_v4().to_string(),
        };
        store.put_offer(&Offer::new(offer_id, id.clone(), content.clone()))?;

        for paragraph in &content {
            println!("{paragraph}");
            println!();
        }

        success(format!("Offer generated for {id}"));
    }
    Ok(())
}

/// Pick the explicit id, or fall back to the signed-in session.
pub(crate) fn resolve_employee_id(explicit: &Option<String>) -> AppResult<String> {
    match explicit {
        Some(id) if !id.trim().is_empty() => Ok(id.trim().to_string()),
        _ => SessionStore::new().current().ok_or(AppError::NotSignedIn),
    }
}
