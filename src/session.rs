//! Drives a `Game` to completion, asking a `Player` for the human side's shots.

use log::info;
use rand::Rng;

use crate::{
    common::{GameError, Side},
    game::{Game, TurnState},
    player::Player,
};

/// Play `game` until someone wins.
///
/// `rng` is the player's own randomness, separate from the one the game uses
/// for the computer. Returns `Ok(None)` when the player gives up.
pub fn run_match<R, P, PR>(
    game: &mut Game<R>,
    player: &mut P,
    rng: &mut PR,
) -> Result<Option<Side>, GameError>
where
    R: Rng,
    P: Player,
    PR: Rng,
{
    loop {
        match game.state() {
            TurnState::AwaitingPlayerMove => {
                let Some(coord) =
                    player.select_target(rng, game.player_board(), game.computer_board())
                else {
                    info!("player left the game");
                    return Ok(None);
                };
                let outcome = game.player_move(coord)?;
                player.handle_guess_result(outcome.coord, outcome.result);
            }
            TurnState::AwaitingOpponentMove => {
                for outcome in game.computer_move()? {
                    player.handle_opponent_guess(outcome.coord, outcome.result);
                }
            }
            TurnState::GameOver(winner) => return Ok(Some(winner)),
        }
    }
}
