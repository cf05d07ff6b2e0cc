use rand::Rng;

use crate::{ai::RandomTargeter, board::Board, common::Coord, player::Player};

/// Player that fires at uniformly random untried cells.
#[derive(Debug, Default)]
pub struct RandomPlayer {
    targeter: Option<RandomTargeter>,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self { targeter: None }
    }
}

impl Player for RandomPlayer {
    fn select_target<R: Rng>(
        &mut self,
        rng: &mut R,
        _own: &Board,
        target: &Board,
    ) -> Option<Coord> {
        self.targeter
            .get_or_insert_with(|| RandomTargeter::for_board(target))
            .next_target(target, rng)
    }
}
