use crate::results::MastermindError;
use crate::results::Score;
use std::iter::zip;
use std::result::Result;

/// Determines the score of the given `guess` when compared against the given `secret`.
///
/// `exact` counts the positions where both sequences hold the same value. `inexact` counts the
/// remaining values that appear in both sequences, ignoring position, where each value in the
/// secret can be matched at most once.
///
/// ```
/// use rs_mastermind::{score, Color, Score};
///
/// let secret = [Color::BLUE, Color::RED, Color::PURPLE];
/// let guess = [Color::PURPLE, Color::RED, Color::BLUE];
///
/// assert_eq!(score(&guess, &secret), Ok(Score::new(1, 2)));
/// ```
pub fn score<T: PartialEq>(guess: &[T], secret: &[T]) -> Result<Score, MastermindError> {
    if guess.len() != secret.len() {
        return Err(MastermindError::LengthMismatch {
            guess: guess.len(),
            secret: secret.len(),
        });
    }
    let mut exact = 0;
    let mut unmatched_guess: Vec<&T> = Vec::with_capacity(guess.len());
    let mut unmatched_secret: Vec<&T> = Vec::with_capacity(secret.len());
    for (guess_value, secret_value) in zip(guess, secret) {
        if guess_value == secret_value {
            exact += 1;
        } else {
            unmatched_guess.push(guess_value);
            unmatched_secret.push(secret_value);
        }
    }
    let mut inexact = 0;
    for guess_value in unmatched_guess {
        if let Some(position) = unmatched_secret
            .iter()
            .position(|secret_value| *secret_value == guess_value)
        {
            // Each secret value can only be claimed once.
            unmatched_secret.swap_remove(position);
            inexact += 1;
        }
    }
    Ok(Score { exact, inexact })
}

/// Returns the first value that also appears earlier in the sequence, if any.
pub fn first_repeated<T: PartialEq + Copy>(sequence: &[T]) -> Option<T> {
    sequence
        .iter()
        .enumerate()
        .find(|(index, value)| sequence[..*index].contains(*value))
        .map(|(_, value)| *value)
}

/// Returns `true` iff some value appears more than once in the sequence.
pub fn has_duplicates<T: PartialEq + Copy>(sequence: &[T]) -> bool {
    first_repeated(sequence).is_some()
}


#[cfg(all(feature = "unstable", test))]
mod benches {

    extern crate test;

    use super::*;
    use crate::colors::Color;
    use test::Bencher;

    #[bench]
    fn bench_score_distinct_colors(b: &mut Bencher) {
        let secret = [Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];
        let guess = [Color::BLUE, Color::GREEN, Color::RED, Color::PURPLE];

        b.iter(|| score(&guess, &secret))
    }

    #[bench]
    fn bench_first_repeated_none(b: &mut Bencher) {
        let colors = [
            Color::RED,
            Color::ORANGE,
            Color::YELLOW,
            Color::GREEN,
            Color::BLUE,
            Color::PURPLE,
            Color::BLACK,
            Color::WHITE,
        ];

        b.iter(|| first_repeated(&colors))
    }
}
