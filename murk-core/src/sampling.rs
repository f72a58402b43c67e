//! Random draws with an exclusion band, and passphrase synthesis.
//!
//! Every caller threads an explicit `rand::Rng` handle through these
//! functions; seeding a `StdRng` makes the whole pipeline reproducible.

use rand::Rng;

use crate::error::{MurkError, Result};

/// Upper bound on rejection re-draws before `banded` gives up.
///
/// With the magnitudes used by the distortion pass the acceptance
/// probability per draw is above 1/3, so hitting this bound means the
/// random source is broken, not unlucky.
const MAX_REJECTION_DRAWS: u32 = 1024;

/// Length of a synthesized passphrase.
pub const DEFAULT_PASSPHRASE_LEN: usize = 5;

const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Draw a uniform integer from `[-magnitude, magnitude]`, re-drawing any
/// value that falls inside `[-exclusion, exclusion]` inclusive.
///
/// The distortion pass uses this to keep its displacement and phase
/// constants away from zero; a value inside the band would make the warp
/// visually imperceptible.
///
/// Requires `magnitude > exclusion >= 0`. Violations return
/// [`MurkError::RandomSampling`] instead of looping forever, as does
/// exhausting the rejection retry bound.
pub fn banded<R: Rng>(rng: &mut R, magnitude: i32, exclusion: i32) -> Result<i32> {
    if exclusion < 0 || exclusion >= magnitude {
        return Err(MurkError::RandomSampling(format!(
            "exclusion band [{}, {}] must be strictly inside [-{}, {}]",
            -exclusion, exclusion, magnitude, magnitude
        )));
    }

    for _ in 0..MAX_REJECTION_DRAWS {
        let draw = rng.gen_range(-magnitude..=magnitude);
        if draw.abs() > exclusion {
            return Ok(draw);
        }
    }

    Err(MurkError::RandomSampling(format!(
        "no draw escaped the exclusion band after {} attempts",
        MAX_REJECTION_DRAWS
    )))
}

/// Synthesize a random lowercase-hexadecimal passphrase of `len` chars.
pub fn hex_passphrase<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| HEX_ALPHABET[rng.gen_range(0..HEX_ALPHABET.len())] as char)
        .collect()
}
