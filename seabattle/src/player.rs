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
//! A side in the match: its board, its opponent and whoever makes its decisions.
use std::fmt;

use log::debug;

use crate::{
    board::{AttackResult, Board, BoardError, Coordinate},
    config::Config,
    ids::IdGenerator,
};

pub use self::{
    ai::HuntTargetAi,
    controller::Controller,
    errors::{InputError, PlayerError},
    human::{HumanController, MoveChoice, PlayerInput},
};

mod ai;
mod controller;
mod errors;
mod human;

/// Identifies one of the two sides.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    /// `0` for the first player and `1` for the second.
    pub fn index(self) -> usize {
        match self {
            PlayerId::P1 => 0,
            PlayerId::P2 => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PlayerId::P1),
            1 => Some(PlayerId::P2),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            PlayerId::P1 => "player 1",
            PlayerId::P2 => "player 2",
        })
    }
}

/// One side of a match.
pub struct Player {
    id: PlayerId,
    name: String,
    board: Board,
    /// Set once when the match pairs the players.
    enemy: Option<PlayerId>,
    controller: Box<dyn Controller>,
}

impl Player {
    pub fn new<N, C>(id: PlayerId, name: N, board: Board, controller: C) -> Self
    where
        N: Into<String>,
        C: Controller + 'static,
    {
        Self {
            id,
            name: name.into(),
            board,
            enemy: None,
            controller: Box::new(controller),
        }
    }

    /// Build a player with the configured board size and fleet. Ship ids are taken
    /// from `ids`.
    pub fn from_config<N, C>(
        id: PlayerId,
        name: N,
        config: &Config,
        ids: &mut IdGenerator,
        controller: C,
    ) -> Result<Self, PlayerError>
    where
        N: Into<String>,
        C: Controller + 'static,
    {
        let board = Board::new(config.board_size, config.fleet(ids)?)?;
        Ok(Self::new(id, name, board, controller))
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn enemy(&self) -> Option<PlayerId> {
        self.enemy
    }

    /// Intact segments left in this player's fleet.
    pub fn fleet_strength(&self) -> usize {
        self.board.fleet_strength()
    }

    pub fn is_defeated(&self) -> bool {
        self.board.is_defeated()
    }

    /// The last shot fired at this player and what it did.
    pub fn last_received_attack(&self) -> Option<(Coordinate, AttackResult)> {
        self.board.last_attack()
    }

    /// Record the opponent. Can only be done once.
    pub fn set_enemy(&mut self, enemy: PlayerId) -> Result<(), PlayerError> {
        if enemy == self.id {
            return Err(PlayerError::SelfEnemy);
        }
        if let Some(existing) = self.enemy {
            return Err(PlayerError::EnemyAlreadySet(existing));
        }
        self.enemy = Some(enemy);
        Ok(())
    }

    /// Let the controller place the fleet.
    pub fn initialize_board(&mut self) -> Result<(), PlayerError> {
        self.controller.initialize_board(&mut self.board)?;
        debug!(
            "{} ({}) placed {} ships",
            self.name,
            self.id,
            self.board.ship_ids().len()
        );
        Ok(())
    }

    /// Fire one shot at `enemy`, which must be this player's registered opponent.
    ///
    /// Targets that are off the board or already destroyed are handed back to the
    /// controller and a new target is requested.
    pub fn attack_enemy(&mut self, enemy: &mut Player) -> Result<AttackResult, PlayerError> {
        let expected = self.enemy.ok_or(PlayerError::NoEnemy)?;
        if enemy.id != expected {
            return Err(PlayerError::UnexpectedEnemy {
                expected,
                found: enemy.id,
            });
        }
        loop {
            let target = self.controller.choose_target(&self.board, &enemy.board)?;
            if enemy.board.is_attackable(target) {
                let result = enemy.board.attack(target)?;
                self.controller.record_outcome(target, result, &enemy.board);
                debug!("{} fired at {}: {}", self.name, target, result);
                return Ok(result);
            }
            let error = match enemy.board.cell(target) {
                Err(err) => err,
                Ok(_) => BoardError::DoubleDestruction { location: target },
            };
            debug!("{} cannot fire at {}: {}", self.name, target, error);
            self.controller.reject_target(target, &error);
        }
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("board", &self.board)
            .field("enemy", &self.enemy)
            .finish()
    }
}
