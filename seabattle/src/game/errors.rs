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
use thiserror::Error;

use crate::{
    game::Phase,
    player::{PlayerError, PlayerId},
};

/// Errors raised while running a [`Game`](super::Game).
#[derive(Debug, Error)]
pub enum GameError {
    /// The operation is not allowed in the current phase.
    #[error("cannot {action} while the game is in the {phase:?} phase")]
    WrongPhase { action: &'static str, phase: Phase },
    /// Both players were given the same id.
    #[error("both players are {0}")]
    SameSide(PlayerId),
    /// Neither player has any ships left.
    #[error("neither fleet has any ships")]
    EmptyFleets,
    #[error(transparent)]
    Player(#[from] PlayerError),
}
