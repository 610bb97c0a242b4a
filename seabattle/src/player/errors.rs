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
use std::io;

use thiserror::Error;

use crate::{board::BoardError, config::ConfigError, player::PlayerId};

/// Failure reported by a [`PlayerInput`](super::PlayerInput).
#[derive(Debug, Error)]
pub enum InputError {
    /// The user backed out of the current prompt.
    #[error("input was aborted")]
    Aborted,
    /// Reading input failed.
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised by a [`Player`](super::Player) during setup or combat.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("player has no enemy to attack")]
    NoEnemy,
    #[error("player already has {0} as its enemy")]
    EnemyAlreadySet(PlayerId),
    #[error("a player cannot be its own enemy")]
    SelfEnemy,
    #[error("expected to attack {expected} but was given {found}")]
    UnexpectedEnemy { expected: PlayerId, found: PlayerId },
    #[error("no squares are left to attack")]
    NoTargetsLeft,
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
