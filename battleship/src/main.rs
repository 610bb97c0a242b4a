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
use std::{
    collections::HashSet,
    error::Error,
    io::{self, BufReader},
    process,
};

use clap::{App, Arg, ArgMatches};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use seabattle::{
    Config, Game, GameError, HumanController, HuntTargetAi, IdGenerator, InputError, Player,
    PlayerError, PlayerId,
};

use crate::{
    display::{show_board, View},
    terminal::TerminalInput,
};

mod display;
mod terminal;

fn main() {
    env_logger::init();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Simple command line battleship game.")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("configuration file to load")
                .takes_value(true)
                .default_value("user_config.json"),
        )
        .arg(
            Arg::with_name("reset_config")
                .long("reset_config")
                .help("write the default configuration to the configuration file and exit"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for a reproducible game")
                .takes_value(true)
                .validator(|seed| {
                    seed.parse::<u64>()
                        .map(|_| ())
                        .map_err(|err| err.to_string())
                }),
        )
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first_player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("name")
                .short("n")
                .long("name")
                .value_name("NAME")
                .help("your name")
                .takes_value(true)
                .default_value("you"),
        )
        .arg(
            Arg::with_name("watch")
                .short("w")
                .long("watch")
                .help("watch the computer play against itself"),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let config_path = matches.value_of("config").unwrap_or("user_config.json");
    if matches.is_present("reset_config") {
        let mut config = Config::load_or_default(config_path);
        config.restore_defaults();
        config.save(config_path)?;
        println!("Restored the default configuration in {}", config_path);
        return Ok(());
    }
    let config = Config::load_or_default(config_path);
    debug!("using {:?}", config);

    let mut rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_entropy(),
    };
    let mut ids = IdGenerator::new();

    let mut game = if matches.is_present("watch") {
        let first = Player::from_config(
            PlayerId::P1,
            "computer 1",
            &config,
            &mut ids,
            HuntTargetAi::seeded(rng.gen()),
        )?;
        let second = Player::from_config(
            PlayerId::P2,
            "computer 2",
            &config,
            &mut ids,
            HuntTargetAi::seeded(rng.gen()),
        )?;
        Game::new(first, second)?
    } else {
        let side = choose_side(matches, &config, &mut rng)?;
        let name = matches.value_of("name").unwrap_or("you");
        let input = TerminalInput::new(BufReader::new(io::stdin()));
        let controller = HumanController::with_rng(input, StdRng::seed_from_u64(rng.gen()));
        let human = Player::from_config(side, name, &config, &mut ids, controller)?;
        let bot = Player::from_config(
            side.opponent(),
            "computer",
            &config,
            &mut ids,
            HuntTargetAi::seeded(rng.gen()),
        )?;
        if side == PlayerId::P1 {
            Game::new(human, bot)?
        } else {
            Game::new(bot, human)?
        }
    };

    let winner = match game.play() {
        Ok(winner) => winner,
        Err(GameError::Player(PlayerError::Input(InputError::Io(err))))
            if err.kind() == io::ErrorKind::UnexpectedEof =>
        {
            info!("input closed, ending the game");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    for player in game.players() {
        println!();
        println!("{}'s fleet:", player.name());
        show_board(player.board(), View::Revealed, &HashSet::new());
    }
    println!();
    println!(
        "{} won after {} attacks!",
        game.player(winner).name(),
        game.turns()
    );
    Ok(())
}

/// Choose which side the human plays, from the command line or the configuration.
fn choose_side(
    matches: &ArgMatches,
    config: &Config,
    rng: &mut impl Rng,
) -> Result<PlayerId, Box<dyn Error>> {
    Ok(match matches.value_of("first_player") {
        Some(choice) => match choice.to_ascii_lowercase().as_str() {
            "human" | "me" => PlayerId::P1,
            "computer" | "bot" => PlayerId::P2,
            _ => {
                if rng.gen() {
                    PlayerId::P1
                } else {
                    PlayerId::P2
                }
            }
        },
        None => config.player_side()?,
    })
}
