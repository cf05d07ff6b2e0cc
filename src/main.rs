#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, render::render_boards, run_match, CliPlayer, Game, GameConfig, RandomPlayer,
    Side, ABOUT, DEFAULT_BOARD_SIZE, DEFAULT_FLEET, HELP,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct MatchArgs {
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, help = "Board dimension")]
    size: usize,
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_FLEET.to_vec(),
        help = "Ship sizes, comma separated (e.g., --fleet 3,2,2,1,1,1,1)"
    )]
    fleet: Vec<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal (the default).
    Play {
        #[command(flatten)]
        args: MatchArgs,
        #[arg(long, help = "Show the computer's ships from the start")]
        reveal: bool,
    },
    /// Let a random player take the human side and print the final boards.
    Auto {
        #[command(flatten)]
        args: MatchArgs,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn new_game(args: &MatchArgs) -> anyhow::Result<Game<SmallRng>> {
    if let Some(s) = args.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let config = GameConfig::new(args.size, args.fleet.clone());
    Game::new(config, seeded_rng(args.seed, 0)).map_err(|e| anyhow::anyhow!(e))
}

#[cfg(feature = "std")]
fn announce(game: &Game<SmallRng>, winner: Option<Side>) {
    println!(
        "{}",
        render_boards(game.player_board(), game.computer_board(), true)
    );
    match winner {
        Some(Side::Player) => println!(
            "Congratulations, you won in {} shots!",
            game.shots(Side::Player)
        ),
        Some(Side::Computer) => println!("You lost! The computer won."),
        None => println!("Game abandoned."),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        args: MatchArgs {
            size: DEFAULT_BOARD_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
            seed: None,
        },
        reveal: false,
    });

    match command {
        Commands::Play { args, reveal } => {
            println!("{}", ABOUT);
            println!("{}", HELP);
            let mut game = new_game(&args)?;
            let mut rng = seeded_rng(args.seed, 1);
            let mut player = CliPlayer::stdio().revealing(reveal);
            let winner = run_match(&mut game, &mut player, &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            announce(&game, winner);
        }
        Commands::Auto { args } => {
            let mut game = new_game(&args)?;
            let mut rng = seeded_rng(args.seed, 1);
            let mut player = RandomPlayer::new();
            let winner = run_match(&mut game, &mut player, &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            announce(&game, winner);
        }
    }
    Ok(())
}
