#![cfg_attr(feature = "unstable", feature(test))]

//! An engine for the code-breaking game Mastermind.
//!
//! A hidden sequence of colors (the secret) is drawn from a [`Palette`]. The player fills in
//! rows of the [`Board`] one color at a time, and each complete row is scored against the secret
//! as a number of exact and inexact matches. Rendering and input handling are left to the caller,
//! which drives a [`Game`] through [`Game::place`], [`Game::remove_last`] and [`Game::submit`].

mod board;
mod colors;
mod game;
mod input;
mod matcher;
mod results;
mod secret;

pub use board::*;
pub use colors::*;
pub use game::*;
pub use input::*;
pub use matcher::*;
pub use results::*;
pub use secret::*;
