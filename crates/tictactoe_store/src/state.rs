//! Application state.

use crate::score::Score;
use crate::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Complete application state: everything the view needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct AppState {
    /// The board.
    pub(crate) board: Board,
    /// Player whose mark the next accepted move places.
    pub(crate) player: Player,
    /// Line counters.
    pub(crate) score: Score,
    /// Transient message from the last rejected move.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub(crate) error: Option<String>,
    /// Winner, once a line is complete.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub(crate) winner: Option<Player>,
}

impl AppState {
    /// Initial state: empty board, `x` to move, zero score, no error, no winner.
    pub fn new() -> Self {
        Self::default()
    }
}

