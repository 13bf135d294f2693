//! Board coordinates.

use crate::error::CellError;
use serde::Serialize;
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// A cell on the board, addressed by `x` (column) and `y` (row), both 0-based.
///
/// Cells can only be built in range, so everything downstream of the input
/// boundary indexes the board without bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    x: u8,
    y: u8,
}

impl Cell {
    /// Creates a cell, rejecting coordinates outside the board.
    #[track_caller]
    pub fn new(x: usize, y: usize) -> Result<Self, CellError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(CellError::new(format!(
                "cell ({}, {}) is outside the {}x{} board",
                x, y, BOARD_SIZE, BOARD_SIZE
            )));
        }
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Column, 0-based.
    pub fn x(self) -> usize {
        self.x as usize
    }

    /// Row, 0-based.
    pub fn y(self) -> usize {
        self.y as usize
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self.y() * BOARD_SIZE + self.x()
    }

    /// Creates a cell from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= BOARD_SIZE * BOARD_SIZE {
            return None;
        }
        Self::new(index % BOARD_SIZE, index / BOARD_SIZE).ok()
    }

    /// Iterates over all nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Self::from_index)
    }

    /// Whether this cell lies on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.x == self.y
    }

    /// Whether this cell lies on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.x() + self.y() == BOARD_SIZE - 1
    }

    /// Human-readable label for this cell.
    pub fn label(self) -> &'static str {
        match (self.x, self.y) {
            (0, 0) => "Top-left",
            (1, 0) => "Top-center",
            (2, 0) => "Top-right",
            (0, 1) => "Middle-left",
            (1, 1) => "Center",
            (2, 1) => "Middle-right",
            (0, 2) => "Bottom-left",
            (1, 2) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl FromStr for Cell {
    type Err = CellError;

    /// Parses `"x,y"` coordinates or a keypad number `"1"`-`"9"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((x, y)) = s.split_once(',') {
            let x = x
                .trim()
                .parse::<usize>()
                .map_err(|e| CellError::new(format!("invalid column {:?}: {}", x, e)))?;
            let y = y
                .trim()
                .parse::<usize>()
                .map_err(|e| CellError::new(format!("invalid row {:?}: {}", y, e)))?;
            return Cell::new(x, y);
        }

        let key = s
            .parse::<usize>()
            .map_err(|e| CellError::new(format!("invalid cell {:?}: {}", s, e)))?;
        key.checked_sub(1)
            .and_then(Cell::from_index)
            .ok_or_else(|| CellError::new(format!("keypad number {} is not 1-9", key)))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        assert!(Cell::new(3, 0).is_err());
        assert!(Cell::new(0, 3).is_err());
        assert!(Cell::new(2, 2).is_ok());
    }

    #[test]
    fn index_is_row_major() {
        let cell = Cell::new(1, 2).unwrap();
        assert_eq!(cell.to_index(), 7);
        assert_eq!(Cell::from_index(7), Some(cell));
        assert_eq!(Cell::from_index(9), None);
        assert_eq!(Cell::all().count(), 9);
    }

    #[test]
    fn labels_follow_rows() {
        assert_eq!(Cell::new(0, 0).unwrap().label(), "Top-left");
        assert_eq!(Cell::new(1, 1).unwrap().label(), "Center");
        assert_eq!(Cell::new(2, 1).unwrap().label(), "Middle-right");
        assert_eq!(Cell::new(2, 2).unwrap().label(), "Bottom-right");
    }

    #[test]
    fn diagonals() {
        assert!(Cell::new(1, 1).unwrap().on_main_diagonal());
        assert!(Cell::new(1, 1).unwrap().on_anti_diagonal());
        assert!(Cell::new(2, 0).unwrap().on_anti_diagonal());
        assert!(!Cell::new(2, 0).unwrap().on_main_diagonal());
        assert!(!Cell::new(1, 0).unwrap().on_anti_diagonal());
    }

    #[test]
    fn parses_coordinates_and_keypad() {
        assert_eq!("2,1".parse::<Cell>().unwrap(), Cell::new(2, 1).unwrap());
        assert_eq!(" 0 , 2 ".parse::<Cell>().unwrap(), Cell::new(0, 2).unwrap());
        assert_eq!("5".parse::<Cell>().unwrap(), Cell::new(1, 1).unwrap());
        assert!("0".parse::<Cell>().is_err());
        assert!("10".parse::<Cell>().is_err());
        assert!("3,0".parse::<Cell>().is_err());
        assert!("a,b".parse::<Cell>().is_err());
    }
}
