//! Sinusoidal shear distortion of a composed captcha.
//!
//! The warp remaps every destination pixel through a coupled sine field:
//! the vertical sample point oscillates with the horizontal position and
//! vice versa. Coupling the axes avoids the separable look of a pure
//! horizontal or vertical wave, which would be easy to invert.

use image::RgbImage;
use rand::Rng;
use tracing::debug;

use crate::color::Rgb;
use crate::error::Result;
use crate::sampling::banded;

/// Spatial frequency of the shear field, in radians per pixel.
const SHEAR_FREQUENCY: f64 = 0.1;

/// Divisor turning the raw phase draw into a smoothing factor.
const PHASE_SMOOTHING: f64 = 100.0;

/// The three scalar parameters of one warp pass.
///
/// Drawn once per pass and then treated as constants, so the warp is a
/// pure function of `(source, background, params)` and deterministic
/// whenever the random source is seeded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpParams {
    pub phase: f64,
    pub x_amplitude: f64,
    pub y_amplitude: f64,
}

impl WarpParams {
    /// Sample warp parameters, each biased away from zero.
    ///
    /// The magnitudes keep the displacement in the range that reads as
    /// "wavy glass": amplitudes below the exclusion band are visually
    /// imperceptible, larger ones shred the glyphs.
    pub fn sample<R: Rng>(rng: &mut R) -> Result<Self> {
        let phase = banded(rng, 8, 5)? as f64 / PHASE_SMOOTHING;
        let x_amplitude = banded(rng, 9, 6)? as f64;
        let y_amplitude = banded(rng, 8, 5)? as f64;
        debug!(phase, x_amplitude, y_amplitude, "Sampled warp parameters");
        Ok(Self {
            phase,
            x_amplitude,
            y_amplitude,
        })
    }
}

/// Resample `source` through the shear field into a fresh buffer.
///
/// For each destination pixel `(x, y)` the source-sampling coordinate is
///
/// ```text
/// src_y = y + (y_amplitude + phase) * sin(x * 0.1)
/// src_x = x + (x_amplitude + phase) * sin(y * 0.1)
/// ```
///
/// rounded to the nearest integer (nearest-neighbor, no sub-pixel
/// blending). Coordinates that leave the canvas fall back to
/// `background`. The source is never written, and the output always has
/// the source's dimensions.
pub fn warp(source: &RgbImage, background: Rgb, params: &WarpParams) -> RgbImage {
    let (width, height) = source.dimensions();
    let mut dest = RgbImage::new(width, height);
    let background: image::Rgb<u8> = background.into();

    for y in 0..height {
        // src_x depends on the row only, so hoist it out of the column loop.
        let x_shift = (params.x_amplitude + params.phase) * (y as f64 * SHEAR_FREQUENCY).sin();
        for x in 0..width {
            let y_shift = (params.y_amplitude + params.phase) * (x as f64 * SHEAR_FREQUENCY).sin();
            let src_x = (x as f64 + x_shift).round() as i64;
            let src_y = (y as f64 + y_shift).round() as i64;

            let pixel = if src_x < 0 || src_x >= width as i64 || src_y < 0 || src_y >= height as i64
            {
                background
            } else {
                *source.get_pixel(src_x as u32, src_y as u32)
            };
            dest.put_pixel(x, y, pixel);
        }
    }

    dest
}
