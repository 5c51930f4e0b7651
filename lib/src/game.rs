use crate::board::Board;
use crate::board::Row;
use crate::colors::Color;
use crate::colors::Palette;
use crate::input::Intent;
use crate::matcher::first_repeated;
use crate::matcher::score;
use crate::results::GameStatus;
use crate::results::GameSummary;
use crate::results::MastermindError;
use crate::results::Outcome;
use crate::results::Score;
use crate::secret::generate_secret;
use rand::Rng;
use std::iter::zip;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The settings a game is created with.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Whether a color may appear more than once in the secret and in each guess.
    pub duplicates_allowed: bool,
    /// The number of colors in the secret and in each guess.
    pub sequence_length: usize,
    /// The number of rows the player gets.
    pub number_of_guesses: usize,
    pub palette: Palette,
}

impl GameConfig {
    /// Checks that a game can be played with these settings.
    ///
    /// Palettes built with [`Palette::new`] are already free of repeats. The repeat check here
    /// catches palettes loaded through `serde`.
    pub fn validate(&self) -> Result<(), MastermindError> {
        if self.sequence_length == 0 {
            return Err(MastermindError::InvalidConfig(
                "the sequence length must be greater than 0".to_string(),
            ));
        }
        if self.number_of_guesses == 0 {
            return Err(MastermindError::InvalidConfig(
                "the number of guesses must be greater than 0".to_string(),
            ));
        }
        if self.palette.is_empty() {
            return Err(MastermindError::InvalidConfig(
                "the palette must contain at least one color".to_string(),
            ));
        }
        if let Some(color) = first_repeated(self.palette.colors()) {
            return Err(MastermindError::DuplicateColor(color));
        }
        if !self.duplicates_allowed && self.palette.len() < self.sequence_length {
            return Err(MastermindError::InvalidConfig(format!(
                "a game without duplicate colors needs at least {} colors, but the palette has {}",
                self.sequence_length,
                self.palette.len()
            )));
        }
        Ok(())
    }
}

/// The classic game: 4 colors per guess, 10 guesses, the six default colors, duplicates allowed.
impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            duplicates_allowed: true,
            sequence_length: 4,
            number_of_guesses: 10,
            palette: Palette::default(),
        }
    }
}

/// A single game of Mastermind.
///
/// The player fills the active row one color at a time with [`Game::place`] and
/// [`Game::remove_last`], then scores it with [`Game::submit`]. Submitted rows can no longer
/// change. The secret is only revealed once the game is over.
///
/// ```
/// use rs_mastermind::{Color, Game, GameConfig, Outcome, Palette};
///
/// let config = GameConfig {
///     duplicates_allowed: false,
///     sequence_length: 2,
///     number_of_guesses: 3,
///     palette: Palette::new(vec![Color::BLUE, Color::RED, Color::GREEN]).unwrap(),
/// };
/// let mut game = Game::with_secret(config, vec![Color::BLUE, Color::RED]).unwrap();
///
/// game.place(Color::RED).unwrap();
/// game.place(Color::BLUE).unwrap();
/// assert!(matches!(game.submit(), Ok(Outcome::Continue(score)) if score.inexact == 2));
///
/// game.place(Color::BLUE).unwrap();
/// game.place(Color::RED).unwrap();
/// assert!(matches!(game.submit(), Ok(Outcome::Won(_))));
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GameState"))]
pub struct Game {
    config: GameConfig,
    secret: Vec<Color>,
    board: Board,
    active_row_index: usize,
    status: GameStatus,
    history: Vec<Score>,
}

impl Game {
    /// Starts a new game with a secret drawn from the configured palette.
    pub fn new<R: Rng + ?Sized>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Game, MastermindError> {
        config.validate()?;
        let secret = generate_secret(
            &config.palette,
            config.sequence_length,
            config.duplicates_allowed,
            rng,
        )?;
        Ok(Game::start(config, secret))
    }

    /// Starts a new game with a secret chosen by the caller, e.g. by another player.
    pub fn with_secret(config: GameConfig, secret: Vec<Color>) -> Result<Game, MastermindError> {
        config.validate()?;
        check_secret(&config, &secret)?;
        Ok(Game::start(config, secret))
    }

    fn start(config: GameConfig, secret: Vec<Color>) -> Game {
        Game {
            board: Board::new(config.number_of_guesses, config.sequence_length),
            config,
            secret,
            active_row_index: 1,
            status: GameStatus::InProgress(1),
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.config.palette
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The 1-based index of the row being filled in. Once the game is over, this is the last row
    /// that was submitted.
    pub fn active_row_index(&self) -> usize {
        self.active_row_index
    }

    pub fn active_row(&self) -> &Row {
        &self.board.rows()[self.active_row_index - 1]
    }

    pub fn is_active_row_full(&self) -> bool {
        self.active_row().is_full()
    }

    /// The score of each submitted row, oldest first.
    pub fn history(&self) -> &[Score] {
        &self.history
    }

    /// Each submitted row alongside its score, oldest first.
    pub fn submitted_rows(&self) -> impl Iterator<Item = (&Row, &Score)> {
        zip(self.board.rows(), &self.history)
    }

    /// The number of rows submitted so far.
    pub fn guesses_made(&self) -> usize {
        self.history.len()
    }

    /// The score of the most recently submitted row, or zero before the first submission.
    pub fn current_match_counts(&self) -> Score {
        self.history.last().copied().unwrap_or_default()
    }

    /// The secret, once the game is over.
    pub fn revealed_secret(&self) -> Option<&[Color]> {
        if self.is_over() {
            Some(&self.secret)
        } else {
            None
        }
    }

    /// The end-of-game payload, once the game is over.
    pub fn summary(&self) -> Option<GameSummary> {
        if !self.is_over() {
            return None;
        }
        Some(self.terminal_summary())
    }

    /// Places the color into the first empty cell of the active row.
    ///
    /// Returns `false`, changing nothing, if the game is over, the color is not in the palette,
    /// the row is full, or duplicates are not allowed and the row already holds this color.
    pub fn place(&mut self, color: Color) -> Result<bool, MastermindError> {
        if self.is_over() || !self.config.palette.contains(&color) {
            return Ok(false);
        }
        self.board.place_color(
            self.active_row_index,
            color,
            self.config.duplicates_allowed,
        )
    }

    /// Empties the right-most filled cell of the active row, returning the removed color.
    pub fn remove_last(&mut self) -> Result<Option<Color>, MastermindError> {
        if self.is_over() {
            return Ok(None);
        }
        self.board.remove_last_color(self.active_row_index)
    }

    /// Scores the active row against the secret, if it is full.
    ///
    /// Returns [`Outcome::Ignored`] if the row is incomplete or the game is already over.
    pub fn submit(&mut self) -> Result<Outcome, MastermindError> {
        if self.is_over() {
            return Ok(Outcome::Ignored);
        }
        let guess = match self.active_row().colors() {
            Some(guess) => guess,
            None => return Ok(Outcome::Ignored),
        };
        let result = score(&guess, &self.secret)?;
        self.history.push(result);

        if result.is_win(self.config.sequence_length) {
            self.status = GameStatus::Won;
            return Ok(Outcome::Won(self.terminal_summary()));
        }
        if self.active_row_index == self.board.num_rows() {
            self.status = GameStatus::Lost;
            return Ok(Outcome::Lost(self.terminal_summary()));
        }
        self.active_row_index += 1;
        self.status = GameStatus::InProgress(self.active_row_index);
        Ok(Outcome::Continue(result))
    }

    /// Dispatches the intent to [`Game::place`], [`Game::remove_last`] or [`Game::submit`].
    ///
    /// Only a submission produces an [`Outcome`].
    pub fn apply(&mut self, intent: Intent) -> Result<Option<Outcome>, MastermindError> {
        match intent {
            Intent::Place(color) => self.place(color).map(|_| None),
            Intent::RemoveLast => self.remove_last().map(|_| None),
            Intent::Submit => self.submit().map(Some),
        }
    }

    fn terminal_summary(&self) -> GameSummary {
        GameSummary {
            board: self.board.clone(),
            secret: self.secret.clone(),
            history: self.history.clone(),
        }
    }
}

fn check_secret(config: &GameConfig, secret: &[Color]) -> Result<(), MastermindError> {
    if secret.len() != config.sequence_length {
        return Err(MastermindError::InvalidConfig(format!(
            "the secret has {} colors, but the sequence length is {}",
            secret.len(),
            config.sequence_length
        )));
    }
    if let Some(color) = secret.iter().find(|color| !config.palette.contains(color)) {
        return Err(MastermindError::InvalidConfig(format!(
            "the secret color {} is not in the palette",
            color
        )));
    }
    if !config.duplicates_allowed {
        if let Some(color) = first_repeated(secret) {
            return Err(MastermindError::DuplicateColor(color));
        }
    }
    Ok(())
}

/// The fields of a [`Game`] as stored, before they are checked against each other.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct GameState {
    config: GameConfig,
    secret: Vec<Color>,
    board: Board,
    active_row_index: usize,
    status: GameStatus,
    history: Vec<Score>,
}

#[cfg(feature = "serde")]
impl TryFrom<GameState> for Game {
    type Error = MastermindError;

    fn try_from(state: GameState) -> Result<Game, MastermindError> {
        let invalid = |message: String| Err(MastermindError::InvalidState(message));
        state.config.validate()?;
        check_secret(&state.config, &state.secret)?;

        let board = &state.board;
        if board.num_rows() != state.config.number_of_guesses
            || board.sequence_length() != state.config.sequence_length
            || board
                .rows()
                .iter()
                .any(|row| row.len() != state.config.sequence_length)
        {
            return invalid(format!(
                "the board doesn't have {} rows of {} cells",
                state.config.number_of_guesses, state.config.sequence_length
            ));
        }
        if state.active_row_index == 0 || state.active_row_index > board.num_rows() {
            return invalid(format!(
                "active row {} is out of range 1..={}",
                state.active_row_index,
                board.num_rows()
            ));
        }

        let submitted = match state.status {
            GameStatus::InProgress(index) if index == state.active_row_index => index - 1,
            GameStatus::InProgress(index) => {
                return invalid(format!(
                    "the status is on row {}, but the active row is {}",
                    index, state.active_row_index
                ))
            }
            GameStatus::Won => state.active_row_index,
            GameStatus::Lost if state.active_row_index == board.num_rows() => {
                state.active_row_index
            }
            GameStatus::Lost => {
                return invalid("the game was lost before the last row".to_string())
            }
        };
        if state.history.len() != submitted {
            return invalid(format!(
                "{} rows were submitted, but the history has {} scores",
                submitted,
                state.history.len()
            ));
        }
        for (index, (row, result)) in zip(board.rows(), &state.history).enumerate() {
            let guess = match row.colors() {
                Some(guess) => guess,
                None => return invalid(format!("submitted row {} is incomplete", index + 1)),
            };
            if score(&guess, &state.secret)? != *result {
                return invalid(format!(
                    "the score of row {} doesn't match its colors",
                    index + 1
                ));
            }
        }
        let won = state
            .history
            .last()
            .map_or(false, |result| result.is_win(state.config.sequence_length));
        if won != (state.status == GameStatus::Won) {
            return invalid("the status doesn't match the last score".to_string());
        }
        let later_rows = &board.rows()[state.active_row_index..];
        if later_rows.iter().any(|row| row.cells().iter().any(|cell| !cell.is_empty())) {
            return invalid("rows after the active row hold colors".to_string());
        }

        Ok(Game {
            config: state.config,
            secret: state.secret,
            board: state.board,
            active_row_index: state.active_row_index,
            status: state.status,
            history: state.history,
        })
    }
}
