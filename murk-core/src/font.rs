//! The ordered set of font resources a renderer draws from.

use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::{MurkError, Result};

/// Paths of the fonts bundled with the crate, tried in order of addition.
const BUILTIN_FONTS: [&str; 5] = [
    "fonts/murk0.ttf",
    "fonts/murk1.ttf",
    "fonts/murk2.ttf",
    "fonts/murk3.ttf",
    "fonts/murk4.ttf",
];

/// An ordered, append-only collection of font resource paths.
///
/// A render call picks one entry uniformly at random per text draw.
/// Construction via [`FontSet::builtin`] always yields a non-empty set;
/// an empty set only arises through [`FontSet::empty`] and surfaces as
/// [`MurkError::ResourceUnavailable`] at draw time.
#[derive(Debug, Clone)]
pub struct FontSet {
    paths: Vec<PathBuf>,
}

impl FontSet {
    /// The default set, seeded with the bundled font paths.
    pub fn builtin() -> Self {
        Self {
            paths: BUILTIN_FONTS.iter().map(PathBuf::from).collect(),
        }
    }

    /// An empty set, for callers that supply every font themselves.
    pub fn empty() -> Self {
        Self { paths: Vec::new() }
    }

    /// Append font paths, preserving existing entries and their order.
    pub fn add_fonts<I, P>(&mut self, fonts: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(fonts.into_iter().map(Into::into));
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Uniformly pick one font from the set.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Result<&Path> {
        if self.paths.is_empty() {
            return Err(MurkError::ResourceUnavailable(
                "font set is empty".to_string(),
            ));
        }
        Ok(&self.paths[rng.gen_range(0..self.paths.len())])
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_set_is_non_empty() {
        let fonts = FontSet::builtin();
        assert_eq!(fonts.len(), 5);
        assert!(!fonts.is_empty());
    }

    #[test]
    fn test_add_fonts_appends_preserving_order() {
        let mut fonts = FontSet::builtin();
        let original: Vec<PathBuf> = fonts.paths().to_vec();

        fonts.add_fonts(["extra/one.ttf", "extra/two.ttf"]);

        assert_eq!(fonts.len(), 7);
        assert_eq!(&fonts.paths()[..5], original.as_slice());
        assert_eq!(fonts.paths()[5], PathBuf::from("extra/one.ttf"));
        assert_eq!(fonts.paths()[6], PathBuf::from("extra/two.ttf"));
    }

    #[test]
    fn test_choose_from_empty_set_fails() {
        let fonts = FontSet::empty();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            fonts.choose(&mut rng),
            Err(MurkError::ResourceUnavailable(_))
        ));
    }

    #[test]
    fn test_choose_returns_member() {
        let mut fonts = FontSet::empty();
        fonts.add_fonts(["a.ttf", "b.ttf", "c.ttf"]);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let chosen = fonts.choose(&mut rng).unwrap();
            assert!(fonts.paths().iter().any(|p| p == chosen));
        }
    }
}
