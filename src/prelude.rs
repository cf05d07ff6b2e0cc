//! Commonly used types and utilities for ease of import.

pub use crate::{run_match, Game, GameConfig, GuessResult, Player, RandomPlayer, Side, TurnState};

#[cfg(feature = "std")]
pub use crate::{init_logging, render::render_boards, CliPlayer};
