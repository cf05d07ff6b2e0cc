//! Uniform random targeting over a shrinking pool of untried cells.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::Coord;

/// Candidate pool for automatic targeting.
///
/// Seeded once with every coordinate of the target board. Each draw removes
/// the drawn cell, so no cell is ever fired at twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomTargeter {
    pool: Vec<Coord>,
}

impl RandomTargeter {
    /// Pool covering the whole of `board`.
    pub fn for_board(board: &Board) -> Self {
        Self {
            pool: board.coordinates(),
        }
    }

    /// Untried cells left in the pool.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty()
    }

    /// Draw the next cell that is still a legal shot on `board`.
    ///
    /// Cells that became illegal in the meantime (the water around a sunk
    /// ship) are dropped from the pool. Returns `None` once the pool is empty.
    pub fn next_target<R: Rng>(&mut self, board: &Board, rng: &mut R) -> Option<Coord> {
        while !self.pool.is_empty() {
            let pick = rng.random_range(0..self.pool.len());
            let (x, y) = self.pool.swap_remove(pick);
            if board.is_targetable(x, y) {
                return Some((x, y));
            }
        }
        None
    }
}
