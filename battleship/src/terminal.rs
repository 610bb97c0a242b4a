// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! [`PlayerInput`] backed by a line based terminal.
use std::{
    collections::HashSet,
    io::{self, BufRead, Write},
};

use once_cell::sync::Lazy;
use regex::Regex;
use seabattle::{
    AttackResult, Board, BoardError, Coordinate, InputError, MoveChoice, Orientation,
    PlayerInput, Ship,
};

use crate::display::{show_board, View};

/// Matches `x,y` or `x y`, optionally followed by a direction.
static PLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:(?:place|put|at)\s+)?
    (?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)
    (?:\s+(?P<dir>\w+))?$",
    )
    .expect("placement pattern is valid")
});

/// Matches `x,y` or `x y` for attacks.
static TARGET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:fire|shoot|at)\s+)?(?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)$")
        .expect("target pattern is valid")
});

enum SetupCommand {
    Choice(MoveChoice),
    Back,
    Help,
}

enum AttackCommand {
    Target(Coordinate),
    Back,
    Help,
}

/// Prompts a human at the terminal.
pub struct TerminalInput<B> {
    reader: InputReader<B>,
    /// Squares of the enemy board this player has missed.
    misses: HashSet<Coordinate>,
}

impl<B: BufRead> TerminalInput<B> {
    pub fn new(read: B) -> Self {
        Self {
            reader: InputReader::new(read),
            misses: HashSet::new(),
        }
    }
}

impl<B: BufRead> PlayerInput for TerminalInput<B> {
    fn choose_move_for_ship(
        &mut self,
        ship: &Ship,
        board: &Board,
    ) -> Result<MoveChoice, InputError> {
        println!();
        println!("Your board:");
        show_board(board, View::Revealed, &HashSet::new());
        let name = ship
            .kind()
            .map(|kind| kind.name().to_owned())
            .unwrap_or_else(|| format!("ship {}", ship.id()));
        let prompt = format!(
            "Place your {} (length {}, facing {} by default). Type help or ? for commands.\n>",
            name,
            ship.size(),
            ship.orientation()
        );
        let default_orientation = ship.orientation();
        loop {
            let command = self.reader.read_input_lower(&prompt, |input| match input {
                "?" | "help" | "h" => Some(SetupCommand::Help),
                "random" | "randomize" | "rand" => {
                    Some(SetupCommand::Choice(MoveChoice::Randomize))
                }
                "back" | "undo" | "b" => Some(SetupCommand::Back),
                other => {
                    let captures = match PLACE.captures(other) {
                        Some(captures) => captures,
                        None => {
                            println!("Invalid placement \"{}\". Use '?' for help", other);
                            return None;
                        }
                    };
                    let location = parse_coordinate(&captures)?;
                    let orientation = match captures.name("dir") {
                        None => default_orientation,
                        Some(dir) => match dir.as_str().parse::<Orientation>() {
                            Ok(orientation) => orientation,
                            Err(err) => {
                                println!("{}", err);
                                return None;
                            }
                        },
                    };
                    Some(SetupCommand::Choice(MoveChoice::Place {
                        location,
                        orientation,
                    }))
                }
            })?;
            match command {
                SetupCommand::Choice(choice) => return Ok(choice),
                SetupCommand::Back => return Err(InputError::Aborted),
                SetupCommand::Help => println!(
                    "Available Commands:
    <x>,<y> [dir]   place the ship with its first segment at x,y extending in the
                    given direction: \"up\", \"down\", \"left\" or \"right\".
    random          place the whole fleet at random and start the game.
    back            go back to the previous ship."
                ),
            }
        }
    }

    fn choose_attack_location(
        &mut self,
        own: &Board,
        enemy: &Board,
    ) -> Result<Coordinate, InputError> {
        println!();
        if let Some((at, result)) = own.last_attack() {
            println!("The enemy fired at {}: {}", at, result);
        }
        println!("Your board:");
        show_board(own, View::Revealed, &HashSet::new());
        println!();
        println!("Enemy board ({} segments left):", enemy.fleet_strength());
        show_board(enemy, View::Hidden, &self.misses);
        loop {
            let command = self.reader.read_input_lower("Fire at x,y >", |input| match input {
                "?" | "help" | "h" => Some(AttackCommand::Help),
                "back" | "b" => Some(AttackCommand::Back),
                other => match TARGET.captures(other) {
                    Some(captures) => parse_coordinate(&captures).map(AttackCommand::Target),
                    None => {
                        println!("Invalid target \"{}\". Use '?' for help", other);
                        None
                    }
                },
            })?;
            match command {
                AttackCommand::Target(target) => return Ok(target),
                AttackCommand::Back => return Err(InputError::Aborted),
                AttackCommand::Help => {
                    println!("Type the x,y coordinate of the square to fire at, e.g. 3,4")
                }
            }
        }
    }

    fn rejected(&mut self, error: &BoardError) {
        println!("Not allowed: {}", error);
    }

    fn attack_result(&mut self, target: Coordinate, result: AttackResult) {
        if result == AttackResult::Miss {
            self.misses.insert(target);
        }
        println!("You fired at {}: {}", target, result);
    }
}

fn parse_coordinate(captures: &regex::Captures) -> Option<Coordinate> {
    let parse = |name: &str| {
        let text = captures.name(name).map_or("", |m| m.as_str());
        match text.parse::<usize>() {
            Ok(value) => Some(value),
            Err(_) => {
                println!("invalid {}: {}", name, text);
                None
            }
        }
    };
    let x = parse("x")?;
    let y = parse("y")?;
    Some(Coordinate::new(x, y))
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Print the prompt, clear the buffer and read a line. End of input is an error.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seabattle::ShipId;

    fn board() -> Board {
        Board::new(10, vec![Ship::new(ShipId::from(0), 3)]).unwrap()
    }

    fn input(text: &str) -> TerminalInput<&[u8]> {
        TerminalInput::new(text.as_bytes())
    }

    #[test]
    fn parses_placements() {
        let board = board();
        let ship = board.ship(ShipId::from(0)).unwrap();
        let mut terminal = input("nonsense\n3, 4 right\n");
        assert_eq!(
            terminal.choose_move_for_ship(ship, &board).unwrap(),
            MoveChoice::Place {
                location: Coordinate::new(3, 4),
                orientation: Orientation::Right
            }
        );
    }

    #[test]
    fn direction_defaults_to_ship_orientation() {
        let board = board();
        let ship = board.ship(ShipId::from(0)).unwrap();
        let mut terminal = input("place 1 2\n");
        assert_eq!(
            terminal.choose_move_for_ship(ship, &board).unwrap(),
            MoveChoice::Place {
                location: Coordinate::new(1, 2),
                orientation: Orientation::Up
            }
        );
    }

    #[test]
    fn setup_keywords() {
        let board = board();
        let ship = board.ship(ShipId::from(0)).unwrap();
        let mut terminal = input("3,4 sideways\nRANDOM\nback\n");
        assert_eq!(
            terminal.choose_move_for_ship(ship, &board).unwrap(),
            MoveChoice::Randomize
        );
        assert!(matches!(
            terminal.choose_move_for_ship(ship, &board),
            Err(InputError::Aborted)
        ));
    }

    #[test]
    fn parses_targets_and_eof() {
        let (own, enemy) = (board(), board());
        let mut terminal = input("fire 7,8\nb\n");
        assert_eq!(
            terminal.choose_attack_location(&own, &enemy).unwrap(),
            Coordinate::new(7, 8)
        );
        assert!(matches!(
            terminal.choose_attack_location(&own, &enemy),
            Err(InputError::Aborted)
        ));
        assert!(matches!(
            terminal.choose_attack_location(&own, &enemy),
            Err(InputError::Io(_))
        ));
    }

    #[test]
    fn remembers_misses() {
        let mut terminal = input("");
        terminal.attack_result(Coordinate::new(1, 1), AttackResult::Miss);
        terminal.attack_result(Coordinate::new(2, 2), AttackResult::Hit);
        assert!(terminal.misses.contains(&Coordinate::new(1, 1)));
        assert!(!terminal.misses.contains(&Coordinate::new(2, 2)));
    }
}
