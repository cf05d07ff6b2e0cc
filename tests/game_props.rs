use seabattle::{run_match, Game, GameConfig, GuessResult, RandomPlayer, Side, TurnState};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A match on the default setup always ends with exactly one side afloat.
    #[test]
    fn random_match_terminates(seed in any::<u64>()) {
        let mut game = Game::with_seed(GameConfig::default(), seed).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let mut player = RandomPlayer::new();
        let winner = run_match(&mut game, &mut player, &mut rng).unwrap();
        prop_assert!(winner.is_some());
        let loser_board = game.target_board(winner.unwrap());
        prop_assert!(!loser_board.has_living_ships());
        prop_assert!(loser_board.ships().iter().all(|s| s.health() == 0));
    }

    /// Turn passes on a miss and stays on a hit, shot by shot.
    #[test]
    fn turn_follows_shot_result(seed in any::<u64>(), dimension in 6usize..9) {
        let mut game = Game::with_seed(GameConfig::new(dimension, vec![3, 2, 2, 1, 1, 1, 1]), seed)
            .unwrap();
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut hits_needed = game.config().total_segments();
        while !game.is_over() {
            let before = game.state();
            let outcome = match before {
                TurnState::AwaitingPlayerMove => {
                    let targets: Vec<_> = game
                        .computer_board()
                        .coordinates()
                        .into_iter()
                        .filter(|&(x, y)| game.computer_board().is_targetable(x, y))
                        .collect();
                    let pick = targets[rng.random_range(0..targets.len())];
                    game.player_move(pick).unwrap()
                }
                TurnState::AwaitingOpponentMove => game.computer_shot().unwrap(),
                TurnState::GameOver(_) => unreachable!(),
            };
            if outcome.shooter == Side::Player && outcome.result != GuessResult::Miss {
                hits_needed -= 1;
            }
            match game.state() {
                TurnState::GameOver(winner) => prop_assert!(outcome.result.is_hit() && winner == outcome.shooter),
                after if outcome.result.is_hit() => prop_assert_eq!(after, before),
                after => prop_assert_ne!(after, before),
            }
        }
        if game.winner() == Some(Side::Player) {
            prop_assert_eq!(hits_needed, 0);
        }
    }
}
