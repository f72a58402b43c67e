//! Text measurement and rasterization backends.
//!
//! The render pipeline only needs two capabilities from a text backend:
//! measuring the bounding box of a shaped string and drawing that string
//! onto a canvas at a baseline origin. [`TtfBackend`] provides both over
//! TTF files; [`FixedMetricsBackend`] is a deterministic stand-in for
//! tests that must run without font files on disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use ab_glyph::{FontArc, PxScale};
use image::RgbImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use tracing::debug;

use crate::color::Rgb;
use crate::error::{MurkError, Result};

/// Bounding box of a shaped piece of text, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// A text-shaping and rasterization collaborator.
///
/// `baseline` follows the raster-text convention: y grows downward and
/// the origin sits on the text baseline. Backends convert to their own
/// origin convention internally.
pub trait TextBackend {
    /// Measure the extent of `text` shaped with `font` at `size` pixels.
    fn measure(&self, font: &Path, size: f32, text: &str) -> Result<TextExtent>;

    /// Rasterize `text` onto `canvas` in `color`, anchored at `baseline`.
    fn draw(
        &self,
        canvas: &mut RgbImage,
        baseline: (i32, i32),
        color: Rgb,
        font: &Path,
        size: f32,
        text: &str,
    ) -> Result<()>;
}

/// Production backend over TTF font files.
///
/// Parsed fonts are cached per path, so a renderer that measures and then
/// draws with the same font reads the file once.
#[derive(Default)]
pub struct TtfBackend {
    cache: RwLock<HashMap<PathBuf, FontArc>>,
}

impl TtfBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn load(&self, path: &Path) -> Result<FontArc> {
        if let Some(font) = self
            .cache
            .read()
            .expect("font cache lock poisoned")
            .get(path)
        {
            return Ok(font.clone());
        }

        let bytes = std::fs::read(path).map_err(|e| {
            MurkError::ResourceUnavailable(format!("cannot read font {}: {}", path.display(), e))
        })?;
        let font = FontArc::try_from_vec(bytes).map_err(|e| {
            MurkError::ResourceUnavailable(format!("cannot parse font {}: {}", path.display(), e))
        })?;

        debug!(font = %path.display(), "Loaded TTF font");
        self.cache
            .write()
            .expect("font cache lock poisoned")
            .insert(path.to_path_buf(), font.clone());
        Ok(font)
    }
}

impl TextBackend for TtfBackend {
    fn measure(&self, font: &Path, size: f32, text: &str) -> Result<TextExtent> {
        let font = self.load(font)?;
        let (width, height) = text_size(PxScale::from(size), &font, text);
        Ok(TextExtent { width, height })
    }

    fn draw(
        &self,
        canvas: &mut RgbImage,
        baseline: (i32, i32),
        color: Rgb,
        font: &Path,
        size: f32,
        text: &str,
    ) -> Result<()> {
        let font = self.load(font)?;
        let scale = PxScale::from(size);
        let (_, height) = text_size(scale, &font, text);
        // draw_text_mut anchors at the top-left of the glyph box.
        let top = baseline.1 - height as i32;
        draw_text_mut(canvas, color.into(), baseline.0, top, scale, &font, text);
        Ok(())
    }
}

/// Deterministic backend with fixed per-glyph metrics.
///
/// Every glyph advances `0.6 * size` pixels and the line height is the
/// point size; `draw` fills the measured extent with the text color.
/// Intended for tests: layouts become reproducible and no font file is
/// touched. Not for production output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMetricsBackend;

impl FixedMetricsBackend {
    pub fn new() -> Self {
        Self
    }

    fn extent(size: f32, text: &str) -> TextExtent {
        let advance = (size * 0.6).ceil() as u32;
        TextExtent {
            width: advance * text.chars().count() as u32,
            height: size.ceil() as u32,
        }
    }
}

impl TextBackend for FixedMetricsBackend {
    fn measure(&self, _font: &Path, size: f32, text: &str) -> Result<TextExtent> {
        Ok(Self::extent(size, text))
    }

    fn draw(
        &self,
        canvas: &mut RgbImage,
        baseline: (i32, i32),
        color: Rgb,
        _font: &Path,
        size: f32,
        text: &str,
    ) -> Result<()> {
        let extent = Self::extent(size, text);
        if extent.width == 0 || extent.height == 0 {
            return Ok(());
        }
        let rect = Rect::at(baseline.0, baseline.1 - extent.height as i32)
            .of_size(extent.width, extent.height);
        draw_filled_rect_mut(canvas, rect, color.into());
        Ok(())
    }
}
