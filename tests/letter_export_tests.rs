//! Library-level tests for the PDF letter exporter and its prerequisites.

use offerdesk::core::letter::{LetterTemplate, offer_paragraphs};
use offerdesk::core::signature::SignaturePad;
use offerdesk::errors::AppError;
use offerdesk::export::{LetterDocument, export_letter};
use offerdesk::models::employee::Employee;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_pdf(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{name}_letter.pdf"));
    fs::remove_file(&path).ok();
    path
}

fn paragraphs() -> Vec<String> {
    let employee = Employee {
        id: "E100".to_string(),
        name: "Asha Rao".to_string(),
        position: "Software Engineer".to_string(),
        start_date: "2024-01-15".to_string(),
        location: "Bangalore, India".to_string(),
        salary: 1_200_000,
        benefits: "Health insurance".to_string(),
    };
    let template = LetterTemplate {
        company: "Genpact".to_string(),
        reporting_to: "Jane Smith, Engineering Manager".to_string(),
        signer_name: "John Doe".to_string(),
        signer_title: "Head of Human Resources".to_string(),
        accept_by: "December 1, 2023".to_string(),
    };
    offer_paragraphs(Some(&employee), &template)
}

fn drawn_signature() -> String {
    let mut pad = SignaturePad::new();
    pad.pen_down(20.0, 120.0);
    pad.pen_move(180.0, 60.0);
    pad.pen_move(340.0, 140.0);
    pad.pen_up().unwrap();
    pad.state().image.clone().unwrap()
}

#[test]
fn export_succeeds_with_signature_and_acceptance() {
    let content = paragraphs();
    let signature = drawn_signature();
    let doc = LetterDocument {
        employee_id: "E100",
        paragraphs: &content,
        signature_image: Some(&signature),
        accepted: true,
        company: "Genpact",
        tagline: "Transformation Happens Here",
    };

    let path = temp_pdf("export_ok");
    export_letter(&doc, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(bytes.len() > 1024);
}

#[test]
fn export_fails_without_acceptance() {
    let content = paragraphs();
    let signature = drawn_signature();
    let doc = LetterDocument {
        employee_id: "E100",
        paragraphs: &content,
        signature_image: Some(&signature),
        accepted: false,
        company: "Genpact",
        tagline: "Transformation Happens Here",
    };

    let path = temp_pdf("export_no_accept");
    match export_letter(&doc, &path) {
        Err(AppError::MissingPrerequisite(_)) => {}
        other => panic!("expected MissingPrerequisite, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn export_fails_with_missing_or_empty_signature() {
    let content = paragraphs();

    for signature_image in [None, Some("")] {
        let doc = LetterDocument {
            employee_id: "E100",
            paragraphs: &content,
            signature_image,
            accepted: true,
            company: "Genpact",
            tagline: "Transformation Happens Here",
        };

        let path = temp_pdf("export_no_sig");
        match export_letter(&doc, &path) {
            Err(AppError::MissingPrerequisite(_)) => {}
            other => panic!("expected MissingPrerequisite, got {other:?}"),
        }
        assert!(!path.exists());
    }
}

#[test]
fn export_fails_on_undecodable_signature_payload() {
    let content = paragraphs();
    let bogus = format!("data:image/png;base64,{}", "AAAA");
    let doc = LetterDocument {
        employee_id: "E100",
        paragraphs: &content,
        signature_image: Some(&bogus),
        accepted: true,
        company: "Genpact",
        tagline: "Transformation Happens Here",
    };

    let path = temp_pdf("export_bogus");
    match export_letter(&doc, &path) {
        Err(AppError::Export(_)) => {}
        other => panic!("expected Export error, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn default_file_name_uses_prefix_and_employee_id() {
    let content = paragraphs();
    let doc = LetterDocument {
        employee_id: "E100",
        paragraphs: &content,
        signature_image: None,
        accepted: false,
        company: "Genpact",
        tagline: "Transformation Happens Here",
    };

    assert_eq!(doc.file_name(), "Genpact_Offer_Letter_E100.pdf");
}

#[test]
fn long_letters_paginate_instead_of_overflowing() {
    // Inflate the free-paragraph region well past one page
    let mut content = paragraphs();
    let filler = "This paragraph repeats to force the letter across multiple pages. ".repeat(8);
    for _ in 0..40 {
        let block_index = content.len() - 2;
        content.insert(block_index, filler.clone());
    }

    let signature = drawn_signature();
    let doc = LetterDocument {
        employee_id: "E100",
        paragraphs: &content,
        signature_image: Some(&signature),
        accepted: true,
        company: "Genpact",
        tagline: "Transformation Happens Here",
    };

    let path = temp_pdf("export_paginated");
    export_letter(&doc, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let text = String::from_utf8_lossy(&bytes);
    // More than one page object must exist, whatever the token spacing
    let pages = text
        .matches("/Type /Page")
        .count()
        .max(text.matches("/Type/Page").count());
    assert!(pages > 2, "expected a paginated document, found {pages} page markers");
}
