use crate::colors::Color;
use crate::colors::Palette;
use crate::results::MastermindError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::result::Result;

/// Draws a secret of `sequence_length` colors from the palette.
///
/// With `duplicates_allowed`, every position is drawn independently and uniformly. Otherwise the
/// colors are drawn without replacement, which needs at least `sequence_length` colors in the
/// palette.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rs_mastermind::{generate_secret, Palette};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let secret = generate_secret(&Palette::default(), 4, false, &mut rng).unwrap();
///
/// assert_eq!(secret.len(), 4);
/// ```
pub fn generate_secret<R: Rng + ?Sized>(
    palette: &Palette,
    sequence_length: usize,
    duplicates_allowed: bool,
    rng: &mut R,
) -> Result<Vec<Color>, MastermindError> {
    let colors = palette.colors();
    if duplicates_allowed {
        if colors.is_empty() && sequence_length > 0 {
            return Err(MastermindError::InsufficientPalette {
                needed: 1,
                available: 0,
            });
        }
        return Ok((0..sequence_length)
            .map(|_| colors[rng.gen_range(0..colors.len())])
            .collect());
    }
    if colors.len() < sequence_length {
        return Err(MastermindError::InsufficientPalette {
            needed: sequence_length,
            available: colors.len(),
        });
    }
    Ok(colors
        .choose_multiple(rng, sequence_length)
        .copied()
        .collect())
}
