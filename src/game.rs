//! Turn resolution: alternating shots, extra shot on a hit, sinks and game over.

use alloc::vec::Vec;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    ai::RandomTargeter,
    board::Board,
    common::{BoardError, Coord, GameError, GuessResult, SetupError, Side},
    config::GameConfig,
    placement::place_fleet,
};

/// Whose move it is, or who has won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingPlayerMove,
    AwaitingOpponentMove,
    GameOver(Side),
}

impl TurnState {
    fn awaiting(side: Side) -> Self {
        match side {
            Side::Player => TurnState::AwaitingPlayerMove,
            Side::Computer => TurnState::AwaitingOpponentMove,
        }
    }
}

/// Result of one shot as reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MoveOutcome {
    pub shooter: Side,
    pub coord: Coord,
    pub result: GuessResult,
    /// The shooter moves again: it hit and the game is not over.
    pub turn_continues: bool,
}

/// A match between the human player and the computer.
pub struct Game<R: Rng> {
    config: GameConfig,
    player_board: Board,
    computer_board: Board,
    opponent: RandomTargeter,
    state: TurnState,
    shots: [usize; 2],
    rng: R,
}

impl Game<SmallRng> {
    /// Set up a reproducible match.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, SetupError> {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Validate `config`, place both fleets and hand the first move to the player.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, SetupError> {
        config.validate()?;

        let mut player_board = Board::new(config.dimension);
        place_fleet(&mut player_board, &config.fleet, &mut rng)?;
        let mut computer_board = Board::new(config.dimension);
        place_fleet(&mut computer_board, &config.fleet, &mut rng)?;

        let opponent = RandomTargeter::for_board(&player_board);
        info!(
            "new game on a {0}x{0} board with fleet {1:?}",
            config.dimension, config.fleet
        );
        Ok(Self {
            config,
            player_board,
            computer_board,
            opponent,
            state: TurnState::AwaitingPlayerMove,
            shots: [0; 2],
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The human's own board (the computer shoots at it).
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The computer's board (the human shoots at it).
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Board `side` is shooting at.
    pub fn target_board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.computer_board,
            Side::Computer => &self.player_board,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, TurnState::GameOver(_))
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            TurnState::GameOver(side) => Some(side),
            _ => None,
        }
    }

    /// Shots fired so far by `side`.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side as usize]
    }

    /// Cells the computer has not tried yet.
    pub fn opponent_candidates_left(&self) -> usize {
        self.opponent.remaining()
    }

    /// Fire the player's shot at `coord` on the computer's board.
    pub fn player_move(&mut self, coord: Coord) -> Result<MoveOutcome, GameError> {
        self.expect_turn(Side::Player)?;
        self.fire(Side::Player, coord)
    }

    /// Fire a single computer shot at an untried cell of the player's board.
    pub fn computer_shot(&mut self) -> Result<MoveOutcome, GameError> {
        self.expect_turn(Side::Computer)?;
        let coord = self
            .opponent
            .next_target(&self.player_board, &mut self.rng)
            .ok_or(GameError::CandidatesExhausted)?;
        self.fire(Side::Computer, coord)
    }

    /// Play the computer's whole turn: shoot until a miss or the end of the game.
    pub fn computer_move(&mut self) -> Result<Vec<MoveOutcome>, GameError> {
        self.expect_turn(Side::Computer)?;
        let mut outcomes = Vec::new();
        loop {
            let outcome = self.computer_shot()?;
            outcomes.push(outcome);
            if !outcome.turn_continues {
                return Ok(outcomes);
            }
        }
    }

    fn expect_turn(&self, side: Side) -> Result<(), GameError> {
        match self.state {
            TurnState::GameOver(_) => Err(GameError::GameOver),
            state if state == TurnState::awaiting(side) => Ok(()),
            _ => Err(GameError::OutOfTurn),
        }
    }

    fn fire(&mut self, shooter: Side, (x, y): Coord) -> Result<MoveOutcome, GameError> {
        let board = match shooter {
            Side::Player => &mut self.computer_board,
            Side::Computer => &mut self.player_board,
        };
        if !board.is_valid_coordinate(x, y) {
            return Err(BoardError::OutOfBounds { x, y }.into());
        }
        if !board.is_targetable(x, y) {
            return Err(BoardError::AlreadyTargeted { x, y }.into());
        }

        let result = if board.is_ship(x, y) {
            let result = board.place_hit(x, y)?;
            if let GuessResult::Sink(size) = result {
                let id = board
                    .ship_at(x, y)
                    .map(|(id, _)| id)
                    .ok_or(BoardError::NotAShip { x, y })?;
                board.mark_sink_buffer(id)?;
                info!("{} sank a ship of size {} at ({}, {})", shooter, size, x, y);
            }
            result
        } else {
            board.place_miss(x, y)?;
            GuessResult::Miss
        };
        self.shots[shooter as usize] += 1;
        debug!("{} fired at ({}, {}): {:?}", shooter, x, y, result);

        self.state = if !self.computer_board.has_living_ships() {
            TurnState::GameOver(Side::Player)
        } else if !self.player_board.has_living_ships() {
            TurnState::GameOver(Side::Computer)
        } else if result.is_hit() {
            TurnState::awaiting(shooter)
        } else {
            TurnState::awaiting(shooter.opponent())
        };
        if let TurnState::GameOver(winner) = self.state {
            info!(
                "game over, {} wins after {} player / {} computer shots",
                winner,
                self.shots(Side::Player),
                self.shots(Side::Computer)
            );
        }

        Ok(MoveOutcome {
            shooter,
            coord: (x, y),
            result,
            turn_continues: self.state == TurnState::awaiting(shooter),
        })
    }
}
