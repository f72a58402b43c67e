//! Captcha orchestration: background, decoy lines, text, distortion.

use image::RgbImage;
use rand::Rng;
use tracing::{debug, instrument};

use crate::color::Rgb;
use crate::distort::{self, WarpParams};
use crate::error::{MurkError, Result};
use crate::font::FontSet;
use crate::layout;
use crate::lines;
use crate::sampling::{hex_passphrase, DEFAULT_PASSPHRASE_LEN};
use crate::text::TextBackend;

/// Render configuration for one captcha build.
///
/// Degenerate dimensions are rejected eagerly when a build starts; the
/// line counts and quality are unsigned, so negative values cannot be
/// expressed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Canvas width in pixels. Must exceed `height`.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// JPEG quality passed through to the encoder (0..=100).
    pub quality: u8,
    /// Strokes drawn over the text layer.
    pub lines_front: u32,
    /// Strokes drawn beneath the text layer.
    pub lines_back: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 175,
            height: 50,
            quality: 100,
            lines_front: 2,
            lines_back: 3,
        }
    }
}

impl RenderConfig {
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_lines_front(mut self, count: u32) -> Self {
        self.lines_front = count;
        self
    }

    pub fn with_lines_back(mut self, count: u32) -> Self {
        self.lines_back = count;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MurkError::Configuration(format!(
                "canvas dimensions {}x{} are degenerate",
                self.width, self.height
            )));
        }
        if self.width <= self.height {
            return Err(MurkError::Configuration(format!(
                "canvas width ({}) must exceed height ({})",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// A captcha renderer: passphrase, font set and render configuration.
///
/// The instance lives across builds; every [`Captcha::build`] call samples
/// fresh randomness and yields an independent buffer. The mutable parts
/// (font set, config) are not synchronized; concurrent callers use one
/// instance each.
#[derive(Debug, Clone)]
pub struct Captcha {
    passphrase: String,
    fonts: FontSet,
    config: RenderConfig,
}

impl Captcha {
    /// A renderer for an explicit passphrase.
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
            fonts: FontSet::builtin(),
            config: RenderConfig::default(),
        }
    }

    /// A renderer with a synthesized hexadecimal passphrase.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(hex_passphrase(rng, DEFAULT_PASSPHRASE_LEN))
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_fonts(mut self, fonts: FontSet) -> Self {
        self.fonts = fonts;
        self
    }

    /// Append font paths to the set, keeping existing entries and order.
    pub fn add_fonts<I, P>(&mut self, fonts: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<std::path::PathBuf>,
    {
        self.fonts.add_fonts(fonts);
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one captcha buffer.
    ///
    /// Pipeline: background fill, back lines, text, front lines, warp.
    /// Validation happens before any allocation, and any failure aborts
    /// the whole build; no partial buffer escapes.
    #[instrument(level = "debug", skip_all, fields(width = self.config.width, height = self.config.height))]
    pub fn build<R: Rng>(&self, rng: &mut R, backend: &dyn TextBackend) -> Result<RgbImage> {
        self.config.validate()?;
        if self.fonts.is_empty() {
            return Err(MurkError::ResourceUnavailable(
                "font set is empty".to_string(),
            ));
        }
        let passphrase_len = self.passphrase.chars().count();
        let font_size =
            layout::font_size_for(self.config.width, self.config.height, passphrase_len)?;

        let background = Rgb::random_bright(rng);
        let text_color = background.invert();
        let mut canvas =
            RgbImage::from_pixel(self.config.width, self.config.height, background.into());

        lines::draw_lines(&mut canvas, self.config.lines_back, text_color, 1, rng);

        let font = self.fonts.choose(rng)?;
        let extent = backend.measure(font, font_size, &self.passphrase)?;
        let origin = layout::center_origin(
            self.config.width,
            self.config.height,
            extent.width,
            extent.height,
        );
        debug!(
            font = %font.display(),
            font_size,
            text_w = extent.width,
            text_h = extent.height,
            "Placing passphrase"
        );
        backend.draw(
            &mut canvas,
            origin,
            text_color,
            font,
            font_size,
            &self.passphrase,
        )?;

        lines::draw_lines(&mut canvas, self.config.lines_front, text_color, 2, rng);

        let params = WarpParams::sample(rng)?;
        Ok(distort::warp(&canvas, background, &params))
    }
}
