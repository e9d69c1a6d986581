use crate::domain::board::HyperBoard;
use crate::domain::models::{BoardState, PlayerId};
use crate::error::PlacementError;

/// Anything that can propose moves for one seat: a person at a console, a
/// random player, a scripted test double.
pub trait MoveSource<S: BoardState> {
    /// A coordinate string for `player`, or `None` if the source has nothing
    /// more to offer (e.g. its input ended).
    fn propose_move(&mut self, board: &HyperBoard<S>, player: PlayerId) -> Option<String>;

    /// Called after a proposal was rejected, with the attempts still left
    /// before a random move is made instead.
    fn on_rejected(&mut self, _error: &PlacementError, _remaining_attempts: usize) {}
}
