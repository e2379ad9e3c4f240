//! Offer-letter document assembly.
//!
//! Reproduces the on-screen letter layout off-screen and hands it to the
//! PDF layer: header with identity line and company wordmark, the detail
//! lines re-split on their "Label: value" delimiter, the free paragraphs,
//! the signature block, the acceptance statement and the captured
//! signature image. Refuses to render anything when the prerequisites
//! (complete signature, accepted terms) are not met.

use crate::core::letter::{DETAIL_LINES, SIGNATURE_BLOCK};
use crate::core::signature::decode_data_url;
use crate::errors::{AppError, AppResult};
use crate::export::pdf::{MARGIN, PAGE_W, PdfManager, text_width};
use crate::utils::format::split_detail;
use pdf_writer::Content;
use std::path::Path;

const BODY_SIZE: f32 = 10.0;
const TITLE_SIZE: f32 = 18.0;
const SMALL_SIZE: f32 = 8.0;
const LINE_H: f32 = 14.0;
/// Tab stop for detail values, the "min-width" of the bold labels.
const DETAIL_TAB: f32 = 95.0;
/// Largest width the signature image may take, aspect preserved.
const SIGNATURE_MAX_W: f32 = 220.0;
const SIGNATURE_MAX_H: f32 = 80.0;

const ACCEPTANCE_STATEMENT: &str =
    "I have read and agree to the terms and conditions outlined in this offer letter.";

/// Everything the exporter needs to build one letter.
pub struct LetterDocument<'a> {
    pub employee_id: &'a str,
    pub paragraphs: &'a [String],
    pub signature_image: Option<&'a str>,
    pub accepted: bool,
    pub company: &'a str,
    pub tagline: &'a str,
}

impl LetterDocument<'_> {
    /// File name for the exported letter: fixed prefix plus employee id.
    pub fn file_name(&self) -> String {
        format!("{}_Offer_Letter_{}.pdf", self.company, self.employee_id)
    }
}

/// Render `doc` into a paginated PDF at `path`.
pub fn export_letter(doc: &LetterDocument, path: &Path) -> AppResult<()> {
    let signature = match doc.signature_image {
        Some(image) if !image.is_empty() && doc.accepted => image,
        _ => {
            return Err(AppError::MissingPrerequisite(
                "signature or terms agreement missing".to_string(),
            ));
        }
    };

    let raster = decode_data_url(signature)?;
    let rgba = image::load_from_memory(&raster)
        .map_err(|e| AppError::Export(format!("signature image is not decodable: {e}")))?
        .to_rgba8();

    let mut pdf = PdfManager::new();
    pdf.set_signature(&rgba)?;

    let mut writer = LetterWriter::new(pdf);
    writer.header(doc);
    writer.body(doc);
    writer.acceptance();
    writer.signature();
    writer.finish(path)
}

/// Cursor-based paragraph flow over PdfManager pages.
struct LetterWriter {
    pdf: PdfManager,
    content: Content,
    y: f32,
}

impl LetterWriter {
    fn new(mut pdf: PdfManager) -> Self {
        let content = pdf.new_page();
        Self {
            pdf,
            content,
            y: crate::export::pdf::PAGE_H - MARGIN,
        }
    }

    /// Start a fresh page when fewer than `needed` points remain.
    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed < MARGIN {
            let done = std::mem::replace(&mut self.content, Content::new());
            self.pdf.finalize_page(done);
            self.content = self.pdf.new_page();
            self.y = crate::export::pdf::PAGE_H - MARGIN;
        }
    }

    fn line(&mut self, x: f32, size: f32, bold: bool, text: &str) {
        self.ensure_room(size + 4.0);
        self.y -= size;
        self.pdf.draw_text(&mut self.content, x, self.y, size, bold, text);
    }

    fn spacer(&mut self, h: f32) {
        self.y -= h;
    }

    /// Wrap and emit one paragraph at body size.
    fn paragraph(&mut self, text: &str, bold: bool) {
        let usable = PAGE_W - 2.0 * MARGIN;
        let columns = (usable / (BODY_SIZE * 0.52)) as usize;
        for piece in textwrap::wrap(text, columns) {
            self.line(MARGIN, BODY_SIZE, bold, &piece);
            self.y -= LINE_H - BODY_SIZE;
        }
    }

    /// Title, identity line and the right-hand wordmark.
    fn header(&mut self, doc: &LetterDocument) {
        let wordmark_x = PAGE_W - MARGIN - text_width(doc.company, 12.0);
        self.line(MARGIN, TITLE_SIZE, false, "Your Offer Letter");
        self.pdf.draw_text(&mut self.content, wordmark_x, self.y, 12.0, true, doc.company);

        self.spacer(6.0);
        self.content.set_fill_rgb(0.4, 0.4, 0.4);
        self.line(
            MARGIN,
            SMALL_SIZE + 1.0,
            false,
            &format!("Employee ID: {}", doc.employee_id),
        );
        self.content.set_fill_rgb(0.03, 0.57, 0.7);
        let tagline_x = PAGE_W - MARGIN - text_width(doc.tagline, SMALL_SIZE);
        self.pdf
            .draw_text(&mut self.content, tagline_x, self.y, SMALL_SIZE, false, doc.tagline);
        self.content.set_fill_rgb(0.0, 0.0, 0.0);
        self.spacer(18.0);
    }

    /// The paragraph sequence: greeting, intro, details, centered wordmark,
    /// free paragraphs, signature block.
    fn body(&mut self, doc: &LetterDocument) {
        let paragraphs = doc.paragraphs;
        if paragraphs.len() < DETAIL_LINES.end + SIGNATURE_BLOCK {
            // A malformed offer record; render whatever is there as flow text.
            for p in paragraphs {
                self.paragraph(p, false);
                self.spacer(8.0);
            }
            return;
        }

        self.paragraph(&paragraphs[0], true);
        self.spacer(8.0);
        self.paragraph(&paragraphs[1], false);
        self.spacer(12.0);

        for line in &paragraphs[DETAIL_LINES] {
            let (label, value) = split_detail(line);
            self.ensure_room(LINE_H);
            self.y -= BODY_SIZE;
            self.pdf
                .draw_text(&mut self.content, MARGIN, self.y, BODY_SIZE, true, &format!("{label}:"));
            self.pdf
                .draw_text(&mut self.content, MARGIN + DETAIL_TAB, self.y, BODY_SIZE, false, value);
            self.y -= LINE_H - BODY_SIZE;
        }
        self.spacer(16.0);

        self.centered_wordmark(doc);

        for p in &paragraphs[DETAIL_LINES.end..paragraphs.len() - SIGNATURE_BLOCK] {
            self.paragraph(p, false);
            self.spacer(8.0);
        }

        self.spacer(16.0);
        for p in &paragraphs[paragraphs.len() - SIGNATURE_BLOCK..] {
            self.paragraph(p, true);
        }
    }

    /// The second fixed wordmark placement, centered mid-letter.
    fn centered_wordmark(&mut self, doc: &LetterDocument) {
        self.ensure_room(40.0);
        self.content.set_fill_rgb(0.03, 0.57, 0.7);

        let x = (PAGE_W - text_width(doc.company, 16.0)) / 2.0;
        self.line(x, 16.0, true, doc.company);
        self.spacer(4.0);

        let x = (PAGE_W - text_width(doc.tagline, SMALL_SIZE + 1.0)) / 2.0;
        self.line(x, SMALL_SIZE + 1.0, false, doc.tagline);

        self.content.set_fill_rgb(0.0, 0.0, 0.0);
        self.spacer(18.0);
    }

    fn acceptance(&mut self) {
        self.spacer(16.0);
        self.paragraph(ACCEPTANCE_STATEMENT, true);
    }

    /// "Employee Signature:" caption plus the raster, scaled to fit.
    fn signature(&mut self) {
        let Some((px_w, px_h)) = self.pdf.signature_size() else {
            return;
        };

        let scale = (SIGNATURE_MAX_W / px_w as f32).min(SIGNATURE_MAX_H / px_h as f32);
        let (w, h) = (px_w as f32 * scale, px_h as f32 * scale);

        self.spacer(10.0);
        self.line(MARGIN, BODY_SIZE, true, "Employee Signature:");
        self.spacer(8.0);

        self.ensure_room(h + 8.0);
        self.y -= h;
        self.pdf.draw_signature(&mut self.content, MARGIN, self.y, w, h);
    }

    fn finish(mut self, path: &Path) -> AppResult<()> {
        let done = std::mem::replace(&mut self.content, Content::new());
        self.pdf.finalize_page(done);
        self.pdf.save(path)
    }
}
