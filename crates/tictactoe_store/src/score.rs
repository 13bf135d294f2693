//! Line counters for win detection.
//!
//! Each of the eight lines through the board (three columns, three rows and
//! two diagonals) keeps a running balance: `+1` for every `x` placed on it and
//! `-1` for every `o`. A line whose balance reaches `±3` is held entirely by
//! one player.

use crate::position::Cell;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Balance a line must reach for its owner to win.
pub const WIN_THRESHOLD: i8 = 3;

/// One of the eight lines through a 3x3 board, in counter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Line {
    /// Column x = 0 (counter 0).
    Column0,
    /// Column x = 1 (counter 1).
    Column1,
    /// Column x = 2 (counter 2).
    Column2,
    /// Row y = 0 (counter 3).
    Row0,
    /// Row y = 1 (counter 4).
    Row1,
    /// Row y = 2 (counter 5).
    Row2,
    /// Top-left to bottom-right (counter 6).
    MainDiagonal,
    /// Top-right to bottom-left (counter 7).
    AntiDiagonal,
}

impl Line {
    /// Position of this line's counter in the score vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether `cell` lies on this line.
    pub fn contains(self, cell: Cell) -> bool {
        match self {
            Line::Column0 | Line::Column1 | Line::Column2 => cell.x() == self.index(),
            Line::Row0 | Line::Row1 | Line::Row2 => cell.y() + 3 == self.index(),
            Line::MainDiagonal => cell.on_main_diagonal(),
            Line::AntiDiagonal => cell.on_anti_diagonal(),
        }
    }

    /// Lines passing through `cell`: always its column and row, plus any diagonal.
    pub fn through(cell: Cell) -> impl Iterator<Item = Line> {
        Line::iter().filter(move |line| line.contains(cell))
    }
}

/// The eight line counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score([i8; 8]);

impl Score {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter for one line.
    pub fn get(&self, line: Line) -> i8 {
        self.0[line.index()]
    }

    /// Raw counters in line order.
    pub fn counters(&self) -> &[i8; 8] {
        &self.0
    }

    /// Returns the counters after `player` marks `cell`.
    ///
    /// Counters saturate, so marks repeated on the same cell never overflow.
    pub fn with_mark(&self, cell: Cell, player: Player) -> Self {
        let mut next = *self;
        for line in Line::through(cell) {
            let counter = &mut next.0[line.index()];
            *counter = counter.saturating_add(player.increment());
        }
        next
    }

    /// First line held entirely by one player, if any.
    pub fn winning_line(&self) -> Option<Line> {
        Line::iter().find(|line| self.get(*line).unsigned_abs() == WIN_THRESHOLD.unsigned_abs())
    }
}
