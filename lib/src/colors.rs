use crate::matcher::first_repeated;
use crate::results::MastermindError;
use std::fmt;
use std::result::Result;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A peg color, compared by value.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLUE: Color = Color::rgb(112, 207, 245);
    pub const RED: Color = Color::rgb(255, 103, 85);
    pub const PURPLE: Color = Color::rgb(170, 112, 245);
    pub const ORANGE: Color = Color::rgb(255, 156, 18);
    pub const YELLOW: Color = Color::rgb(255, 244, 38);
    pub const GREEN: Color = Color::rgb(84, 237, 50);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    const NAMED: [(&'static str, Color); 8] = [
        ("blue", Color::BLUE),
        ("red", Color::RED),
        ("purple", Color::PURPLE),
        ("orange", Color::ORANGE),
        ("yellow", Color::YELLOW),
        ("green", Color::GREEN),
        ("black", Color::BLACK),
        ("white", Color::WHITE),
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Returns the name of this color if it is one of the named constants.
    pub fn name(&self) -> Option<&'static str> {
        Color::NAMED
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
        }
    }
}

/// Parses either a color name (e.g. `"Purple"`, case-insensitive) or a `#rrggbb` hex code.
impl FromStr for Color {
    type Err = MastermindError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let lower = trimmed.to_ascii_lowercase();
        if let Some((_, color)) = Color::NAMED.iter().find(|(name, _)| *name == lower) {
            return Ok(*color);
        }
        let unknown = || MastermindError::UnknownColor(trimmed.to_string());
        let hex = lower.strip_prefix('#').ok_or_else(unknown)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(unknown());
        }
        let channel = |start: usize| u8::from_str_radix(&hex[start..start + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Color::rgb(r, g, b)),
            _ => Err(unknown()),
        }
    }
}

/// A single peg hole on the board: either still empty, or holding a color.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(*color),
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Cell {
        Cell::Filled(color)
    }
}

/// The ordered set of colors the secret and the guesses are drawn from.
///
/// A palette is never empty and never contains the same color twice.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Constructs a palette from the given colors, keeping their order.
    ///
    /// ```
    /// use rs_mastermind::{Color, Palette};
    ///
    /// let palette = Palette::new(vec![Color::BLUE, Color::RED, Color::PURPLE]).unwrap();
    /// assert_eq!(palette.color_at(2), Ok(Color::RED));
    /// ```
    pub fn new(colors: Vec<Color>) -> Result<Palette, MastermindError> {
        if colors.is_empty() {
            return Err(MastermindError::InvalidConfig(
                "the palette must contain at least one color".to_string(),
            ));
        }
        if let Some(color) = first_repeated(&colors) {
            return Err(MastermindError::DuplicateColor(color));
        }
        Ok(Palette { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    /// Retrieves the color at the given 1-based index.
    pub fn color_at(&self, index: usize) -> Result<Color, MastermindError> {
        if index == 0 || index > self.colors.len() {
            return Err(MastermindError::IndexOutOfRange {
                index,
                len: self.colors.len(),
            });
        }
        Ok(self.colors[index - 1])
    }
}

/// The six classic colors: red, orange, yellow, green, blue and purple.
impl Default for Palette {
    fn default() -> Palette {
        Palette {
            colors: vec![
                Color::RED,
                Color::ORANGE,
                Color::YELLOW,
                Color::GREEN,
                Color::BLUE,
                Color::PURPLE,
            ],
        }
    }
}

/// Parses a comma-separated list of colors, e.g. `"blue,red,#102030"`.
impl FromStr for Palette {
    type Err = MastermindError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let colors = text
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Color::from_str)
            .collect::<Result<Vec<Color>, MastermindError>>()?;
        Palette::new(colors)
    }
}
