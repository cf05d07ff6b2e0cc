#[cfg(feature = "std")]
mod cli_tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::render::{cell_char, render_board, render_boards};
    use seabattle::{
        parse_command, Board, BoardError, CellView, CliPlayer, Command, Game, GameConfig,
        GuessResult, Orientation, Player, Ship,
    };
    use std::io::Cursor;

    fn run_prompt(input: &str, own: &Board, target: &Board) -> (Option<(usize, usize)>, String) {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut player = CliPlayer::new(Cursor::new(input.to_string()), Vec::new());
        let coord = player.select_target(&mut rng, own, target);
        (coord, String::from_utf8(player.into_output()).unwrap())
    }

    #[test]
    fn test_parse_command_forms() {
        assert_eq!(parse_command("3 5", 6), Ok(Command::Shoot((2, 4))));
        assert_eq!(parse_command(" 3,5 \n", 6), Ok(Command::Shoot((2, 4))));
        assert_eq!(parse_command("4", 6), Ok(Command::Row(3)));
        assert_eq!(parse_command("HELP", 6), Ok(Command::Help));
        assert_eq!(parse_command("want to win", 6), Ok(Command::Reveal));
        assert_eq!(parse_command("quit", 6), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_command_rejects_bad_input() {
        assert!(parse_command("", 6).is_err());
        assert!(parse_command("0 1", 6).is_err());
        assert!(parse_command("7 1", 6).is_err());
        assert!(parse_command("a b", 6).is_err());
        assert!(parse_command("1 2 3", 6).is_err());
    }

    #[test]
    fn test_prompt_skips_invalid_lines() {
        let game = Game::with_seed(GameConfig::default(), 11).unwrap();
        let (coord, output) = run_prompt(
            "help\n9 9\n2 3\n",
            game.player_board(),
            game.computer_board(),
        );
        assert_eq!(coord, Some((1, 2)));
        assert!(output.contains("How to play"));
        assert!(output.contains("out of range"));
    }

    #[test]
    fn test_prompt_row_then_column() {
        let own = Board::new(4);
        let target = Board::new(4);
        let (coord, _) = run_prompt("2\n4\n", &own, &target);
        assert_eq!(coord, Some((1, 3)));
    }

    #[test]
    fn test_prompt_rejects_already_targeted_cell() -> Result<(), BoardError> {
        let own = Board::new(3);
        let mut target = Board::new(3);
        target.place_miss(0, 0)?;
        let (coord, output) = run_prompt("1 1\n2 2\n", &own, &target);
        assert_eq!(coord, Some((1, 1)));
        assert!(output.contains("already fired"));
        Ok(())
    }

    #[test]
    fn test_prompt_end_of_input_gives_up() {
        let own = Board::new(3);
        let target = Board::new(3);
        assert_eq!(run_prompt("", &own, &target).0, None);
        assert_eq!(run_prompt("quit\n", &own, &target).0, None);
    }

    #[test]
    fn test_secret_code_reveals_fleet() -> Result<(), BoardError> {
        let own = Board::new(3);
        let mut target = Board::new(3);
        target.place_with_padding(2, 0, Ship::new(3, Orientation::Horizontal))?;
        target.clear_placement_buffers();

        let mut rng = SmallRng::seed_from_u64(0);
        let mut player = CliPlayer::new(Cursor::new("want to win\n1 1\n"), Vec::new());
        assert!(!player.reveals_enemy());
        assert_eq!(player.select_target(&mut rng, &own, &target), Some((0, 0)));
        assert!(player.reveals_enemy());
        player.handle_guess_result((0, 0), GuessResult::Miss);
        let output = String::from_utf8(player.into_output()).unwrap();
        assert!(output.contains("Miss!"));
        Ok(())
    }

    #[test]
    fn test_secret_code_accepted_at_column_prompt() {
        let own = Board::new(4);
        let target = Board::new(4);
        let mut rng = SmallRng::seed_from_u64(0);
        let mut player = CliPlayer::new(Cursor::new("2\nwant to win\n2 3\n"), Vec::new());
        assert_eq!(player.select_target(&mut rng, &own, &target), Some((1, 2)));
        assert!(player.reveals_enemy());
        let output = String::from_utf8(player.into_output()).unwrap();
        assert!(!output.contains("single column"));
    }

    #[test]
    fn test_render_hides_enemy_ships()-> Result<(), BoardError> {
        let mut board = Board::new(3);
        board.place_with_padding(0, 0, Ship::new(2, Orientation::Horizontal))?;
        board.clear_placement_buffers();
        board.place_hit(0, 1)?;

        assert_eq!(cell_char(CellView::Hit), 'X');
        let hidden = render_board(&board, false);
        let shown = render_board(&board, true);
        assert!(!hidden.contains('S'));
        assert!(hidden.contains('X'));
        assert!(shown.contains('S'));
        assert_eq!(shown.lines().count(), 4);

        let both = render_boards(&board, &Board::new(3), false);
        assert!(both.contains("Your fleet"));
        assert!(both.contains("Computer"));
        Ok(())
    }
}
