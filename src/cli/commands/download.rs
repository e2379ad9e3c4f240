use crate::cli::commands::generate::resolve_employee_id;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::signature::{SignaturePad, StrokeTrace, capture_upload};
use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::export::logic::ensure_writable;
use crate::export::{LetterDocument, export_letter};
use crate::models::signature::SignatureState;
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

/// Capture a signature, check the export prerequisites and write the
/// offer-letter PDF.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Download {
        employee_id,
        sign_image,
        sign_strokes,
        out,
        force,
    } = cmd
    {
        let id = resolve_employee_id(employee_id)?;

        let store = Store::open(&cfg.database)?;
        let offer = store
            .offer_for_employee(&id)?
            .ok_or_else(|| AppError::OfferNotFound(id.clone()))?;

        let signature = capture_signature(sign_image.as_deref(), sign_strokes.as_deref())?;

        let doc = LetterDocument {
            employee_id: &id,
            paragraphs: &offer.content,
            signature_image: signature.image.as_deref(),
            accepted: offer.accepted,
            company: &cfg.company,
            tagline: &cfg.tagline,
        };

        let out_path = out.clone().unwrap_or_else(|| doc.file_name());
        let path = Path::new(&out_path);
        ensure_writable(path, *force)?;

        export_letter(&doc, path)?;
        success(format!("Offer letter downloaded: {out_path}"));
    }
    Ok(())
}

/// Either acquisition mode produces the same transient state; with no
/// mode given the state stays empty and the exporter reports the missing
/// prerequisite.
fn capture_signature(
    sign_image: Option<&str>,
    sign_strokes: Option<&str>,
) -> AppResult<SignatureState> {
    if let Some(file) = sign_image {
        return capture_upload(Path::new(file));
    }

    if let Some(file) = sign_strokes {
        let raw = fs::read_to_string(file)?;
        let trace = StrokeTrace::from_json(&raw)?;
        let mut pad = SignaturePad::new();
        pad.replay(&trace)?;
        return Ok(pad.state().clone());
    }

    Ok(SignatureState::default())
}
