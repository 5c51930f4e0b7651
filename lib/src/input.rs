use crate::colors::Color;
use crate::colors::Palette;
use crate::results::MastermindError;
use std::result::Result;

/// Something the player wants to do with the active row.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Intent {
    Place(Color),
    RemoveLast,
    Submit,
}

impl Intent {
    /// Translates a key name into an intent.
    ///
    /// * `"1"` to `"9"` place the palette color at that 1-based index.
    /// * `"enter"` submits the active row.
    /// * `"backspace"` removes the last placed color.
    ///
    /// Any other key maps to `None`. A digit past the end of the palette is a
    /// [`MastermindError::IndexOutOfRange`].
    ///
    /// ```
    /// use rs_mastermind::{Color, Intent, Palette};
    ///
    /// let palette = Palette::new(vec![Color::BLUE, Color::RED]).unwrap();
    ///
    /// assert_eq!(Intent::from_key("2", &palette), Ok(Some(Intent::Place(Color::RED))));
    /// assert_eq!(Intent::from_key("enter", &palette), Ok(Some(Intent::Submit)));
    /// assert_eq!(Intent::from_key("q", &palette), Ok(None));
    /// ```
    pub fn from_key(key: &str, palette: &Palette) -> Result<Option<Intent>, MastermindError> {
        match key {
            "enter" => Ok(Some(Intent::Submit)),
            "backspace" => Ok(Some(Intent::RemoveLast)),
            _ => match key.parse::<u8>() {
                Ok(digit @ 1..=9) if key.len() == 1 => {
                    Ok(Some(Intent::Place(palette.color_at(digit as usize)?)))
                }
                _ => Ok(None),
            },
        }
    }
}
