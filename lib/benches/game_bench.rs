#![feature(test)]

extern crate test;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_mastermind::*;
use std::result::Result;
use test::Bencher;

#[bench]
fn bench_generate_secret_without_duplicates(b: &mut Bencher) {
    let palette = Palette::default();
    let mut rng = StdRng::seed_from_u64(0);

    b.iter(|| generate_secret(&palette, 6, false, &mut rng))
}

#[bench]
fn bench_play_full_losing_game(b: &mut Bencher) -> Result<(), MastermindError> {
    let config = GameConfig::default();
    let secret = vec![Color::RED, Color::ORANGE, Color::YELLOW, Color::GREEN];
    let guess = [Color::GREEN, Color::YELLOW, Color::ORANGE, Color::RED];
    let game = Game::with_secret(config, secret)?;

    b.iter(|| -> Result<Outcome, MastermindError> {
        let mut game = game.clone();
        let mut outcome = Outcome::Ignored;
        while !game.is_over() {
            for color in guess {
                game.place(color)?;
            }
            outcome = game.submit()?;
        }
        Ok(outcome)
    });

    Ok(())
}
