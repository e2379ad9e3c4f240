//! Low-level PDF assembly on top of pdf-writer: hand-managed refs, page
//! tree, two standard fonts and an optional image XObject with alpha mask.

use crate::errors::{AppError, AppResult};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::RgbaImage;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A4 portrait in PostScript points.
pub const PAGE_W: f32 = 595.0;
pub const PAGE_H: f32 = 842.0;
/// 10mm margins.
pub const MARGIN: f32 = 28.35;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");
const SIGNATURE_XOBJECT: Name<'static> = Name(b"Sig");

struct SignatureImage {
    id: Ref,
    width: u32,
    height: u32,
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    bold_font_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,
    signature: Option<SignatureImage>,
    next_id: i32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            bold_font_id,
            page_refs: Vec::new(),
            current_content_id: None,
            signature: None,
            next_id,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register the signature raster as an image XObject.
    /// RGB samples and the alpha channel are Flate-compressed separately;
    /// the alpha becomes a soft mask so the page shows through the
    /// untouched parts of the drawing surface.
    pub fn set_signature(&mut self, rgba: &RgbaImage) -> AppResult<()> {
        let (width, height) = rgba.dimensions();

        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        let mut alpha = Vec::with_capacity((width * height) as usize);
        for px in rgba.pixels() {
            rgb.extend_from_slice(&px.0[..3]);
            alpha.push(px.0[3]);
        }

        let rgb = deflate(&rgb)?;
        let alpha = deflate(&alpha)?;

        let image_id = self.fresh_ref();
        let smask_id = self.fresh_ref();

        let mut image = self.pdf.image_xobject(image_id, &rgb);
        image.filter(Filter::FlateDecode);
        image.width(width as i32);
        image.height(height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        image.s_mask(smask_id);
        image.finish();

        let mut mask = self.pdf.image_xobject(smask_id, &alpha);
        mask.filter(Filter::FlateDecode);
        mask.width(width as i32);
        mask.height(height as i32);
        mask.color_space().device_gray();
        mask.bits_per_component(8);
        mask.finish();

        self.signature = Some(SignatureImage {
            id: image_id,
            width,
            height,
        });
        Ok(())
    }

    /// Pixel dimensions of the registered signature, if any.
    pub fn signature_size(&self) -> Option<(u32, u32)> {
        self.signature.as_ref().map(|s| (s.width, s.height))
    }

    /// Create a new page and return its content stream.
    pub fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(FONT_REGULAR, self.font_id);
        fonts.pair(FONT_BOLD, self.bold_font_id);
        fonts.finish();
        if let Some(sig) = &self.signature {
            resources.x_objects().pair(SIGNATURE_XOBJECT, sig.id);
        }
        resources.finish();
        page.finish();

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Write out the stream of the current page.
    pub fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    pub fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, bold: bool, text: &str) {
        let font = if bold { FONT_BOLD } else { FONT_REGULAR };
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(pdf_safe(text).as_bytes()));
        content.end_text();
    }

    /// Paint the registered signature at (x, y) scaled to w x h points.
    pub fn draw_signature(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        if self.signature.is_none() {
            return;
        }
        content.save_state();
        content.transform([w, 0.0, 0.0, h, x, y]);
        content.x_object(SIGNATURE_XOBJECT);
        content.restore_state();

        // Hairline border like the on-screen preview
        content.save_state();
        content.set_stroke_rgb(0.85, 0.85, 0.85);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    pub fn save(mut self, path: &Path) -> AppResult<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        pages.finish();

        // Assemble fully in memory first so a failed export never leaves
        // a partial file behind.
        let bytes = self.pdf.finish();
        let mut f = File::create(path).map_err(|e| AppError::Export(e.to_string()))?;
        f.write_all(&bytes).map_err(|e| AppError::Export(e.to_string()))?;
        Ok(())
    }
}

/// Approximate width of `text` in points for the built-in Helvetica faces.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.52
}

/// The standard Type1 fonts cannot show arbitrary Unicode; substitute the
/// few symbols the letter uses and drop anything else non-ASCII.
fn pdf_safe(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '₹' => out.push_str("Rs. "),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201c}' | '\u{201d}' => out.push('"'),
            c if c.is_ascii() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

fn deflate(data: &[u8]) -> AppResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .and_then(|_| encoder.finish())
        .map_err(|e| AppError::Export(format!("image compression failed: {e}")))
}
