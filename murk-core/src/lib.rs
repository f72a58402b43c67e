//! Murk Core - noisy captcha raster synthesis.
//!
//! This crate composes a short text passphrase into a visually noisy
//! raster image that resists automated extraction while staying readable
//! to people.
//!
//! # Pipeline
//!
//! - Bright random background, text in the inverted (contrasting) color
//! - Decoy line strokes behind and in front of the text layer
//! - A sinusoidal shear warp over the finished composition
//!
//! Randomness is never ambient: every stage takes an explicit
//! [`rand::Rng`] handle, so a seeded `StdRng` reproduces a build
//! bit-for-bit. Text shaping is a pluggable [`TextBackend`] collaborator;
//! [`TtfBackend`] renders real TTF fonts and [`FixedMetricsBackend`]
//! keeps tests hermetic.
//!
//! # Example
//!
//! ```no_run
//! use murk_core::{Captcha, RenderConfig, TtfBackend};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # fn example() -> murk_core::Result<()> {
//! let mut rng = StdRng::from_entropy();
//! let captcha = Captcha::new("ab12")
//!     .with_config(RenderConfig::default().with_lines_back(3).with_lines_front(2));
//!
//! let buffer = captcha.build(&mut rng, &TtfBackend::new())?;
//! let jpeg = murk_core::encode::to_jpeg(&buffer, captcha.config().quality)?;
//! # let _ = jpeg;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod distort;
pub mod encode;
pub mod error;
pub mod font;
pub mod layout;
pub mod lines;
pub mod render;
pub mod sampling;
pub mod text;

// Re-export main types for convenience
pub use color::Rgb;
pub use distort::{warp, WarpParams};
pub use error::{MurkError, Result};
pub use font::FontSet;
pub use render::{Captcha, RenderConfig};
pub use sampling::{banded, hex_passphrase, DEFAULT_PASSPHRASE_LEN};
pub use text::{FixedMetricsBackend, TextBackend, TextExtent, TtfBackend};
