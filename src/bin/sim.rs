use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, run_match, Game, GameConfig, RandomPlayer, Side};
use serde::Serialize;

/// Summary of one automatic match, printed as JSON.
#[derive(Serialize)]
struct MatchReport {
    seed: u64,
    config: GameConfig,
    winner: Option<Side>,
    player_shots: usize,
    computer_shots: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [board-size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut config = GameConfig::default();
    if let Some(size) = args.get(2) {
        config.dimension = size.parse()?;
    }

    let mut game = Game::with_seed(config.clone(), seed).map_err(|e| anyhow::anyhow!(e))?;
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut player = RandomPlayer::new();
    let winner = run_match(&mut game, &mut player, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let report = MatchReport {
        seed,
        config,
        winner,
        player_shots: game.shots(Side::Player),
        computer_shots: game.shots(Side::Computer),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
