use rand::Rng;

use crate::{board::Board, common::Coord, common::GuessResult};

/// Interface implemented by the sources of the human side's shots.
pub trait Player {
    /// Choose the next cell to shoot at on `target`, or `None` to give up.
    ///
    /// The returned coordinate must satisfy `target.is_targetable`.
    fn select_target<R: Rng>(&mut self, rng: &mut R, own: &Board, target: &Board)
        -> Option<Coord>;

    /// Inform the player of the result of its last shot.
    fn handle_guess_result(&mut self, _coord: Coord, _result: GuessResult) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_guess(&mut self, _coord: Coord, _result: GuessResult) {}
}
