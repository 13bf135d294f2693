//! Core domain types for tic-tac-toe.

use crate::position::Cell;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Player x (goes first).
    #[default]
    #[display("x")]
    X,
    /// Player o (goes second).
    #[display("o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Line counter increment for a mark by this player.
    pub fn increment(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board, stored as rows (`squares[y][x]`).
///
/// Boards are values: [`Board::with_mark`] returns a new board and leaves
/// the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.y()][cell.x()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        Cell::all().all(|cell| !self.is_empty(cell))
    }

    /// Returns a copy of this board with `player`'s mark at `cell`.
    pub fn with_mark(&self, cell: Cell, player: Player) -> Self {
        let mut next = *self;
        next.squares[cell.y()][cell.x()] = Square::Occupied(player);
        next
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.squares
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.squares.iter().enumerate() {
            for (x, square) in row.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, "{}", y * 3 + x + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if x < 2 {
                    f.write_str("|")?;
                }
            }
            if y < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
