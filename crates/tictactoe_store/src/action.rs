//! Actions flowing through the store.
//!
//! A player's click enters as [`Action::PlayerAction`], an unvalidated intent.
//! The rule pipeline turns it into the state transitions the reducer applies.

use crate::position::Cell;
use crate::types::Player;

/// Everything that can be dispatched to the store.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// A player activated a cell. Not yet checked against the rules.
    #[display("player_action {}", _0)]
    PlayerAction(Cell),
    /// Place the current player's mark.
    #[display("place_mark {}", _0)]
    PlaceMark(Cell),
    /// Show a transient error message.
    #[display("report_error {:?}", _0)]
    ReportError(String),
    /// Remove any error message.
    #[display("clear_error")]
    ClearError,
    /// Record the winner.
    #[display("declare_winner {}", _0)]
    DeclareWinner(Player),
    /// Start over from the initial state.
    #[display("reset")]
    Reset,
}

impl Action {
    /// Stable name of this action's kind, for logging.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        let cell = Cell::new(0, 1).unwrap();
        assert_eq!(Action::PlayerAction(cell).kind(), "PLAYER_ACTION");
        assert_eq!(Action::ClearError.kind(), "CLEAR_ERROR");
        assert_eq!(Action::DeclareWinner(Player::O).kind(), "DECLARE_WINNER");
    }

    #[test]
    fn display_includes_payload() {
        let cell = Cell::new(2, 0).unwrap();
        assert_eq!(Action::PlaceMark(cell).to_string(), "place_mark (2, 0)");
        assert_eq!(
            Action::ReportError("Square taken!".into()).to_string(),
            "report_error \"Square taken!\""
        );
    }
}
