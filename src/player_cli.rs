use std::io::{self, BufRead, Write};

use log::error;
use rand::Rng;

use crate::{
    board::Board,
    common::{Coord, GuessResult},
    player::Player,
    render::render_boards,
};

/// Phrase that reveals the computer's fleet for the rest of the match.
pub const REVEAL_CODE: &str = "want to win";

pub const ABOUT: &str = "\
Welcome to Sea Battle!

Two fleets hide on square grids. Take turns naming a cell on the enemy grid.
If an enemy ship occupies it, that segment is destroyed and you shoot again.
The first side to destroy every enemy ship wins.
";

pub const HELP: &str = "\
How to play

Ships are placed at random, horizontally or vertically, and never touch each
other side by side. Enter a row and then a column, either on one line
(`3 5` or `3,5`) or one number per prompt. Numbers start at 1.
Type `help` to see this text again or `quit` to leave the game.
And as in any game against a computer, there is a secret code that uncovers
the enemy fleet.
";

/// A line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Shoot(Coord),
    /// Only the row was given; the column follows on the next line.
    Row(usize),
    Help,
    Reveal,
    Quit,
}

/// Parse a 1-based index into a 0-based one below `dimension`.
pub fn parse_index(token: &str, dimension: usize) -> Result<usize, String> {
    let value: usize = token
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number - enter integers from 1 to {}", token.trim(), dimension))?;
    if value == 0 || value > dimension {
        return Err(format!("{} is out of range - enter integers from 1 to {}", value, dimension));
    }
    Ok(value - 1)
}

/// Parse one line of input for a board of `dimension`.
pub fn parse_command(input: &str, dimension: usize) -> Result<Command, String> {
    let line = input.trim();
    if line.is_empty() {
        return Err("Empty input".to_string());
    }
    match line.to_ascii_lowercase().as_str() {
        "help" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        code if code == REVEAL_CODE => return Ok(Command::Reveal),
        _ => {}
    }
    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [row] => Ok(Command::Row(parse_index(row, dimension)?)),
        [row, col] => Ok(Command::Shoot((
            parse_index(row, dimension)?,
            parse_index(col, dimension)?,
        ))),
        _ => Err("Enter a row and a column, e.g. `3 5`".to_string()),
    }
}

/// Interactive human player reading from `input` and writing prompts to `output`.
pub struct CliPlayer<I, O> {
    input: I,
    output: O,
    reveal: bool,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> CliPlayer<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            reveal: false,
        }
    }

    /// Start with the enemy fleet uncovered.
    pub fn revealing(mut self, reveal: bool) -> Self {
        self.reveal = reveal;
        self
    }

    /// Whether the secret code has been entered.
    pub fn reveals_enemy(&self) -> bool {
        self.reveal
    }

    pub fn into_output(self) -> O {
        self.output
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt_target(&mut self, own: &Board, target: &Board) -> io::Result<Option<Coord>> {
        let n = target.dimension();
        write!(self.output, "{}", render_boards(own, target, self.reveal))?;
        loop {
            write!(self.output, "Your shot - row (1-{}) or `row col`: ", n)?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let (x, y) = match parse_command(&line, n) {
                Ok(Command::Shoot(coord)) => coord,
                Ok(Command::Row(x)) => {
                    write!(self.output, "Column (1-{}): ", n)?;
                    self.output.flush()?;
                    let Some(line) = self.read_line()? else {
                        return Ok(None);
                    };
                    match parse_command(&line, n) {
                        Ok(Command::Row(y)) => (x, y),
                        Ok(Command::Help) => {
                            write!(self.output, "{}", HELP)?;
                            continue;
                        }
                        Ok(Command::Reveal) => {
                            self.reveal = true;
                            write!(self.output, "{}", render_boards(own, target, true))?;
                            continue;
                        }
                        Ok(Command::Quit) => return Ok(None),
                        Ok(_) => {
                            writeln!(self.output, "Enter a single column number.")?;
                            continue;
                        }
                        Err(msg) => {
                            writeln!(self.output, "{}", msg)?;
                            continue;
                        }
                    }
                }
                Ok(Command::Help) => {
                    write!(self.output, "{}", HELP)?;
                    continue;
                }
                Ok(Command::Reveal) => {
                    self.reveal = true;
                    write!(self.output, "{}", render_boards(own, target, true))?;
                    continue;
                }
                Ok(Command::Quit) => return Ok(None),
                Err(msg) => {
                    writeln!(self.output, "{}", msg)?;
                    continue;
                }
            };
            if target.is_targetable(x, y) {
                return Ok(Some((x, y)));
            }
            writeln!(self.output, "You already fired at that cell. Try again.")?;
        }
    }
}

impl<I: BufRead, O: Write> Player for CliPlayer<I, O> {
    fn select_target<R: Rng>(
        &mut self,
        _rng: &mut R,
        own: &Board,
        target: &Board,
    ) -> Option<Coord> {
        match self.prompt_target(own, target) {
            Ok(coord) => coord,
            Err(e) => {
                error!("terminal I/O failed: {}", e);
                None
            }
        }
    }

    fn handle_guess_result(&mut self, _coord: Coord, result: GuessResult) {
        let msg = match result {
            GuessResult::Hit => "Hit! Shoot again.".to_string(),
            GuessResult::Sink(size) => format!("Hit! You sank a ship of size {}.", size),
            GuessResult::Miss => "Miss!".to_string(),
        };
        let _ = writeln!(self.output, "{}", msg);
    }

    fn handle_opponent_guess(&mut self, (x, y): Coord, result: GuessResult) {
        let msg = match result {
            GuessResult::Hit => "hit your ship".to_string(),
            GuessResult::Sink(size) => format!("sank your ship of size {}", size),
            GuessResult::Miss => "missed".to_string(),
        };
        let _ = writeln!(self.output, "Computer fired at {} {} and {}.", x + 1, y + 1, msg);
    }
}
