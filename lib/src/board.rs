use crate::colors::Cell;
use crate::colors::Color;
use crate::results::MastermindError;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of peg holes, filled from left to right.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Constructs a row of `length` empty cells.
    pub fn new(length: usize) -> Row {
        Row {
            cells: vec![Cell::Empty; length],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Retrieves the cell at the given 1-based column.
    pub fn cell(&self, column: usize) -> Result<Cell, MastermindError> {
        check_index(column, self.cells.len())?;
        Ok(self.cells[column - 1])
    }

    /// Returns `true` iff no cell in this row is empty.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(Cell::is_empty)
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.cells.contains(&Cell::Filled(*color))
    }

    /// Returns the row's colors, or `None` while any cell is still empty.
    pub fn colors(&self) -> Option<Vec<Color>> {
        self.cells.iter().map(Cell::color).collect()
    }

    /// Places the color into the first empty cell. A full row is left unchanged.
    ///
    /// Returns whether the row changed.
    pub fn place(&mut self, color: Color) -> bool {
        match self.cells.iter_mut().find(|cell| cell.is_empty()) {
            Some(cell) => {
                *cell = Cell::Filled(color);
                true
            }
            None => false,
        }
    }

    /// Like [`Row::place`], but leaves the row unchanged if it already holds the color.
    pub fn place_unique(&mut self, color: Color) -> bool {
        if self.contains(&color) {
            return false;
        }
        self.place(color)
    }

    /// Empties the right-most filled cell, returning the color it held. An empty row is left
    /// unchanged.
    pub fn remove_last(&mut self) -> Option<Color> {
        let cell = self.cells.iter_mut().rev().find(|cell| !cell.is_empty())?;
        let removed = cell.color();
        *cell = Cell::Empty;
        removed
    }
}

/// The grid of guess rows. Rows and columns are addressed with 1-based indices.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    rows: Vec<Row>,
    sequence_length: usize,
}

impl Board {
    /// Constructs a board of `num_rows` empty rows, each with `sequence_length` cells.
    pub fn new(num_rows: usize, sequence_length: usize) -> Board {
        Board {
            rows: vec![Row::new(sequence_length); num_rows],
            sequence_length,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Retrieves the row at the given 1-based index.
    pub fn row(&self, row_index: usize) -> Result<&Row, MastermindError> {
        check_index(row_index, self.rows.len())?;
        Ok(&self.rows[row_index - 1])
    }

    fn row_mut(&mut self, row_index: usize) -> Result<&mut Row, MastermindError> {
        check_index(row_index, self.rows.len())?;
        Ok(&mut self.rows[row_index - 1])
    }

    /// Retrieves the cell at the given 1-based row and column.
    pub fn cell(&self, row_index: usize, column: usize) -> Result<Cell, MastermindError> {
        self.row(row_index)?.cell(column)
    }

    pub fn is_row_full(&self, row_index: usize) -> Result<bool, MastermindError> {
        Ok(self.row(row_index)?.is_full())
    }

    pub fn row_contains(&self, row_index: usize, color: &Color) -> Result<bool, MastermindError> {
        Ok(self.row(row_index)?.contains(color))
    }

    /// Places the color into the first empty cell of the given row.
    ///
    /// Nothing changes if the row is full, or if `duplicates_allowed` is false and the row already
    /// holds this color. Returns whether the board changed.
    pub fn place_color(
        &mut self,
        row_index: usize,
        color: Color,
        duplicates_allowed: bool,
    ) -> Result<bool, MastermindError> {
        let row = self.row_mut(row_index)?;
        if duplicates_allowed {
            Ok(row.place(color))
        } else {
            Ok(row.place_unique(color))
        }
    }

    /// Empties the right-most filled cell of the given row, returning the removed color.
    pub fn remove_last_color(&mut self, row_index: usize) -> Result<Option<Color>, MastermindError> {
        Ok(self.row_mut(row_index)?.remove_last())
    }
}

fn check_index(index: usize, len: usize) -> Result<(), MastermindError> {
    if index == 0 || index > len {
        return Err(MastermindError::IndexOutOfRange { index, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_place_fills_left_to_right() {
        let mut row = Row::new(3);

        assert!(row.place(Color::RED));
        assert!(row.place(Color::BLUE));

        assert_eq!(
            row.cells(),
            &[Cell::Filled(Color::RED), Cell::Filled(Color::BLUE), Cell::Empty]
        );
        assert!(!row.is_full());
        assert_eq!(row.colors(), None);
    }

    #[test]
    fn row_place_into_full_row_is_ignored() {
        let mut row = Row::new(2);
        row.place(Color::RED);
        row.place(Color::RED);
        let full = row.clone();

        assert!(!row.place(Color::GREEN));

        assert_eq!(row, full);
        assert_eq!(row.colors(), Some(vec![Color::RED, Color::RED]));
    }

    #[test]
    fn row_place_unique_rejects_repeat() {
        let mut row = Row::new(3);
        row.place_unique(Color::RED);

        assert!(!row.place_unique(Color::RED));
        assert!(row.place_unique(Color::GREEN));

        assert_eq!(
            row.cells(),
            &[
                Cell::Filled(Color::RED),
                Cell::Filled(Color::GREEN),
                Cell::Empty
            ]
        );
    }

    #[test]
    fn row_remove_last_clears_right_most() {
        let mut row = Row::new(3);
        row.place(Color::RED);
        row.place(Color::BLUE);

        assert_eq!(row.remove_last(), Some(Color::BLUE));
        assert_eq!(row.remove_last(), Some(Color::RED));
        assert_eq!(row.remove_last(), None);
        assert_eq!(row, Row::new(3));
    }

    #[test]
    fn row_remove_last_then_place_reuses_the_gap() {
        let mut row = Row::new(3);
        row.place(Color::RED);
        row.place(Color::BLUE);
        row.place(Color::GREEN);
        row.remove_last();

        row.place(Color::YELLOW);

        assert_eq!(
            row.colors(),
            Some(vec![Color::RED, Color::BLUE, Color::YELLOW])
        );
    }

    #[test]
    fn row_contains_ignores_empty_cells() {
        let mut row = Row::new(2);
        row.place(Color::WHITE);

        assert!(row.contains(&Color::WHITE));
        assert!(!row.contains(&Color::BLACK));
    }

    #[test]
    fn board_new_is_all_empty() {
        let board = Board::new(4, 3);

        assert_eq!(board.num_rows(), 4);
        assert_eq!(board.sequence_length(), 3);
        assert!(board.rows().iter().all(Row::is_empty));
        assert_eq!(board.cell(4, 3), Ok(Cell::Empty));
    }

    #[test]
    fn board_place_color_only_touches_given_row() {
        let mut board = Board::new(2, 2);

        assert_eq!(board.place_color(2, Color::RED, true), Ok(true));

        assert_eq!(board.row(1), Ok(&Row::new(2)));
        assert_eq!(board.cell(2, 1), Ok(Cell::Filled(Color::RED)));
        assert_eq!(board.row_contains(2, &Color::RED), Ok(true));
        assert_eq!(board.row_contains(1, &Color::RED), Ok(false));
    }

    #[test]
    fn board_place_color_rejects_duplicates_when_disallowed() {
        let mut board = Board::new(1, 3);
        board.place_color(1, Color::RED, false).unwrap();
        let before = board.clone();

        assert_eq!(board.place_color(1, Color::RED, false), Ok(false));

        assert_eq!(board, before);
        assert_eq!(board.place_color(1, Color::RED, true), Ok(true));
    }

    #[test]
    fn board_is_row_full() {
        let mut board = Board::new(1, 2);
        board.place_color(1, Color::RED, true).unwrap();
        assert_eq!(board.is_row_full(1), Ok(false));

        board.place_color(1, Color::BLUE, true).unwrap();
        assert_eq!(board.is_row_full(1), Ok(true));
    }

    #[test]
    fn board_remove_last_color() {
        let mut board = Board::new(1, 2);
        board.place_color(1, Color::RED, true).unwrap();

        assert_eq!(board.remove_last_color(1), Ok(Some(Color::RED)));
        assert_eq!(board.remove_last_color(1), Ok(None));
        assert_eq!(board, Board::new(1, 2));
    }

    #[test]
    fn board_index_out_of_range() {
        let mut board = Board::new(2, 3);

        assert_eq!(
            board.row(0),
            Err(MastermindError::IndexOutOfRange { index: 0, len: 2 })
        );
        assert_eq!(
            board.place_color(3, Color::RED, true),
            Err(MastermindError::IndexOutOfRange { index: 3, len: 2 })
        );
        assert_eq!(
            board.remove_last_color(3),
            Err(MastermindError::IndexOutOfRange { index: 3, len: 2 })
        );
        assert_eq!(
            board.cell(1, 4),
            Err(MastermindError::IndexOutOfRange { index: 4, len: 3 })
        );
        assert_eq!(board, Board::new(2, 3));
    }
}
