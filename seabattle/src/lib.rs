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
//! A two player game of Battleship on square boards.
//!
//! Each side owns a [`Board`] holding its fleet of [`Ship`]s. Ships may not overlap
//! or touch, diagonals included. A [`Game`] pairs two [`Player`]s and has them fire at
//! each other until one fleet is destroyed. Players are driven by a [`Controller`],
//! either a [`HumanController`] backed by some [`PlayerInput`] or the automated
//! [`HuntTargetAi`].
//!
//! ```
//! use seabattle::{Config, Game, HuntTargetAi, IdGenerator, Player, PlayerId};
//!
//! let config = Config::default();
//! let mut ids = IdGenerator::new();
//! let first = Player::from_config(PlayerId::P1, "red", &config, &mut ids, HuntTargetAi::seeded(1))?;
//! let second = Player::from_config(PlayerId::P2, "blue", &config, &mut ids, HuntTargetAi::seeded(2))?;
//! let mut game = Game::new(first, second)?;
//! let winner = game.play()?;
//! assert!(game.player(winner.opponent()).is_defeated());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use crate::{
    board::{AttackResult, Board, BoardError, Cell, Coordinate},
    config::{Config, ConfigError},
    game::{Game, GameError, Phase},
    ids::{IdGenerator, ShipId},
    player::{
        Controller, HumanController, HuntTargetAi, InputError, MoveChoice, Player, PlayerError,
        PlayerId, PlayerInput,
    },
    ships::{Orientation, Ship, ShipError, ShipKind},
};

pub mod board;
pub mod config;
pub mod game;
pub mod ids;
pub mod player;
pub mod ships;
