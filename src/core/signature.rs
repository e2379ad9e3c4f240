//! Signature capture.
//!
//! Two acquisition modes produce the same `SignatureState`:
//! - draw: a `SignaturePad` surface consuming pointer strokes, rasterized
//!   to a PNG data URL when the pen lifts;
//! - upload: a user-selected image file, validated for type and size and
//!   read into a data URL.
//!
//! Both modes fail soft: an error leaves the completion flag false and the
//! caller reports it as a recoverable notification.

use crate::errors::{AppError, AppResult};
use crate::models::signature::SignatureState;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;
use serde::Deserialize;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Upload limit, matching the on-screen hint "less than 2MB".
pub const MAX_UPLOAD_BYTES: u64 = 2 * 1024 * 1024;

const PAD_WIDTH: u32 = 600;
const PAD_HEIGHT: u32 = 200;
const INK: Rgba<u8> = Rgba([51, 51, 51, 255]);
const PEN_RADIUS: i32 = 1;

/// A recorded pointer trace: one point list per stroke.
#[derive(Debug, Clone, Deserialize)]
pub struct StrokeTrace(pub Vec<Vec<(f32, f32)>>);

impl StrokeTrace {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let strokes = serde_json::from_str(raw)
            .map_err(|e| AppError::Signature(format!("invalid stroke trace: {e}")))?;
        Ok(Self(strokes))
    }
}

/// A drawing surface for freehand signatures.
///
/// The pad owns the authoritative `SignatureState`; callers read it back
/// after each pen-up or clear instead of threading callbacks through.
pub struct SignaturePad {
    surface: RgbaImage,
    pen: Option<(f32, f32)>,
    has_ink: bool,
    state: SignatureState,
}

impl Default for SignaturePad {
    fn default() -> Self {
        Self::new()
    }
}

impl SignaturePad {
    pub fn new() -> Self {
        Self::with_size(PAD_WIDTH, PAD_HEIGHT)
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            surface: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])),
            pen: None,
            has_ink: false,
            state: SignatureState::default(),
        }
    }

    /// Pointer down: start a stroke at (x, y).
    pub fn pen_down(&mut self, x: f32, y: f32) {
        self.pen = Some(self.clamp(x, y));
    }

    /// Pointer move: stroke the segment from the previous point immediately.
    /// Ignored when the pen is up.
    pub fn pen_move(&mut self, x: f32, y: f32) {
        let Some(prev) = self.pen else { return };
        let next = self.clamp(x, y);
        self.stroke_segment(prev, next);
        self.pen = Some(next);
        self.has_ink = true;
    }

    /// Pointer up: end the stroke and, if any ink was laid, serialize the
    /// surface and mark the signature complete.
    pub fn pen_up(&mut self) -> AppResult<()> {
        self.pen = None;
        if !self.has_ink {
            return Ok(());
        }
        match self.to_data_url() {
            Ok(url) => {
                self.state = SignatureState::captured(url);
                Ok(())
            }
            Err(e) => {
                self.state.complete = false;
                Err(e)
            }
        }
    }

    /// Reset to a blank surface with no captured image.
    pub fn clear(&mut self) {
        let (w, h) = self.surface.dimensions();
        self.surface = RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 0]));
        self.pen = None;
        self.has_ink = false;
        self.state = SignatureState::default();
    }

    pub fn state(&self) -> &SignatureState {
        &self.state
    }

    /// Replay a recorded pointer trace: down, moves, up per stroke.
    pub fn replay(&mut self, trace: &StrokeTrace) -> AppResult<()> {
        for stroke in &trace.0 {
            let mut points = stroke.iter();
            let Some(&(x, y)) = points.next() else {
                continue;
            };
            self.pen_down(x, y);
            for &(x, y) in points {
                self.pen_move(x, y);
            }
            self.pen_up()?;
        }
        Ok(())
    }

    /// Serialize the surface to a PNG data URL.
    pub fn to_data_url(&self) -> AppResult<String> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(self.surface.clone())
            .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .map_err(|e| AppError::Signature(format!("could not serialize surface: {e}")))?;
        Ok(format!("data:image/png;base64,{}", BASE64.encode(&bytes)))
    }

    fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        let (w, h) = self.surface.dimensions();
        (x.clamp(0.0, (w - 1) as f32), y.clamp(0.0, (h - 1) as f32))
    }

    /// Round-capped segment of ~2px width.
    fn stroke_segment(&mut self, from: (f32, f32), to: (f32, f32)) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let steps = (dx.hypot(dy) / 0.75).ceil().max(1.0) as i32;

        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = (from.0 + dx * t).round() as i32;
            let y = (from.1 + dy * t).round() as i32;
            draw_filled_circle_mut(&mut self.surface, (x, y), PEN_RADIUS, INK);
        }
    }
}

/// Upload-mode capture: validate the declared type and size, then read the
/// file into a data URL.
pub fn capture_upload(path: &Path) -> AppResult<SignatureState> {
    let mime = image_mime(path).ok_or_else(|| AppError::NotAnImage(path.display().to_string()))?;

    let size = fs::metadata(path)?.len();
    if size > MAX_UPLOAD_BYTES {
        return Err(AppError::ImageTooLarge(size));
    }

    let bytes = fs::read(path)?;
    let url = format!("data:{};base64,{}", mime, BASE64.encode(&bytes));
    Ok(SignatureState::captured(url))
}

/// Declared image type, from the file extension.
fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// Decode a base64 data URL back into raw image bytes.
pub fn decode_data_url(url: &str) -> AppResult<Vec<u8>> {
    let payload = match url.split_once(";base64,") {
        Some((_, payload)) => payload,
        None => return Err(AppError::Signature("not a base64 data URL".to_string())),
    };
    BASE64
        .decode(payload.as_bytes())
        .map_err(|e| AppError::Signature(format!("data URL decode failed: {e}")))
}
