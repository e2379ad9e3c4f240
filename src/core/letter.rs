//! Offer letter content generation.
//!
//! A pure function from an employee record (or defaults) to the ordered
//! paragraph sequence of the letter. The schema is fixed: greeting, intro,
//! five "Label: value" detail lines, a reporting line, two boilerplate
//! paragraphs and a two-line signature block. Fields the admin left empty
//! render as "TBD"; the generator itself never fails.

use crate::config::Config;
use crate::models::employee::Employee;
use crate::utils::date;
use crate::utils::format::{format_salary, or_tbd};
use std::ops::Range;

/// Paragraph indices holding the "Label: value" detail lines.
pub const DETAIL_LINES: Range<usize> = 2..7;

/// Number of trailing paragraphs forming the signature block.
pub const SIGNATURE_BLOCK: usize = 2;

/// Company-side template fields, normally sourced from the config file.
#[derive(Debug, Clone)]
pub struct LetterTemplate {
    pub company: String,
    pub reporting_to: String,
    pub signer_name: String,
    pub signer_title: String,
    pub accept_by: String,
}

impl From<&Config> for LetterTemplate {
    fn from(cfg: &Config) -> Self {
        Self {
            company: cfg.company.clone(),
            reporting_to: cfg.reporting_to.clone(),
            signer_name: cfg.signer_name.clone(),
            signer_title: cfg.signer_title.clone(),
            accept_by: cfg.accept_by.clone(),
        }
    }
}

/// Build the letter paragraphs for `employee`, or a fully-placeholder
/// letter when no record is available.
pub fn offer_paragraphs(employee: Option<&Employee>, tpl: &LetterTemplate) -> Vec<String> {
    let name = employee.map(|e| e.name.as_str()).unwrap_or("");
    let position = employee.map(|e| e.position.as_str()).unwrap_or("");
    let location = employee.map(|e| e.location.as_str()).unwrap_or("");
    let benefits = employee.map(|e| e.benefits.as_str()).unwrap_or("");

    let greeting = if name.trim().is_empty() {
        "Dear Candidate,".to_string()
    } else {
        format!("Dear {},", name.trim())
    };

    let start_date = match employee {
        Some(e) if !e.start_date.trim().is_empty() => date::long_date(&e.start_date),
        _ => "TBD".to_string(),
    };

    let salary = match employee {
        Some(e) => format_salary(e.salary),
        None => "TBD".to_string(),
    };

    vec![
        greeting,
        format!(
            "We are pleased to extend this offer of employment for the position of {} at {}. \
             This letter confirms the details of our offer as discussed during your interview process.",
            or_tbd(position),
            tpl.company
        ),
        format!("Position: {}", or_tbd(position)),
        format!("Start Date: {}", start_date),
        format!("Location: {}", or_tbd(location)),
        format!("Salary: {}", salary),
        format!("Benefits: {}", or_tbd(benefits)),
        format!("Reporting To: {}", tpl.reporting_to),
        "This offer is contingent upon the successful completion of a background check and \
         your ability to provide documentation proving your eligibility to work in India."
            .to_string(),
        format!(
            "To accept this offer, please sign below and return this letter by {}. If you have \
             any questions or require clarification on any aspect of this offer, please do not \
             hesitate to contact our HR department.",
            tpl.accept_by
        ),
        "Sincerely,".to_string(),
        format!("{}, {}", tpl.signer_name, tpl.signer_title),
    ]
}
