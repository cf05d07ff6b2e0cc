#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
#[cfg(feature = "std")]
pub mod render;
pub mod session;
mod ship;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level_from_env, LOG_ENV};
pub use placement::place_fleet;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use session::run_match;
pub use ship::*;
