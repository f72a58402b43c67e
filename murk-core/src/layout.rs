//! Font sizing and centered placement of the passphrase.

use crate::error::{MurkError, Result};

/// Derive a font size from the canvas dimensions and passphrase length.
///
/// The size is `sqrt(width² − height²) / len`, which shrinks as the
/// passphrase grows so the text keeps fitting the canvas. The radicand
/// is only positive for wide canvases; `width <= height` would collapse
/// the size to zero and is rejected eagerly.
pub fn font_size_for(width: u32, height: u32, passphrase_len: usize) -> Result<f32> {
    if passphrase_len == 0 {
        return Err(MurkError::Configuration(
            "passphrase must not be empty".to_string(),
        ));
    }
    if width <= height {
        return Err(MurkError::Configuration(format!(
            "canvas width ({}) must exceed height ({}) for font sizing",
            width, height
        )));
    }

    let width = width as f64;
    let height = height as f64;
    Ok(((width * width - height * height).sqrt() / passphrase_len as f64) as f32)
}

/// Baseline origin that centers a text box on the canvas.
///
/// Follows the raster-text convention: y grows downward and the origin
/// sits on the baseline, so the vertical center is `(height + text_h) / 2`.
pub fn center_origin(canvas_w: u32, canvas_h: u32, text_w: u32, text_h: u32) -> (i32, i32) {
    let x = (canvas_w as i32 - text_w as i32) / 2;
    let y = (canvas_h as i32 + text_h as i32) / 2;
    (x, y)
}
