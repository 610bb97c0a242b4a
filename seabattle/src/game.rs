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
//! Two player match: pairs the sides, runs setup and alternates attacks.
use log::info;

use crate::player::{Player, PlayerId};

pub use self::errors::GameError;

mod errors;

/// Stage of a [`Game`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Boards have not been initialized.
    Setup,
    /// Ships are placed and the players are exchanging fire.
    Playing,
    /// A winner has been decided.
    Finished(PlayerId),
}

/// A single match between two players. Not reusable once finished.
#[derive(Debug)]
pub struct Game {
    /// The first entry attacks first.
    players: [Player; 2],
    phase: Phase,
    /// Attacks fired so far.
    turns: usize,
}

impl Game {
    /// Pair two players as each other's enemy. `first` attacks first.
    pub fn new(mut first: Player, mut second: Player) -> Result<Self, GameError> {
        if first.id() == second.id() {
            return Err(GameError::SameSide(first.id()));
        }
        first.set_enemy(second.id())?;
        second.set_enemy(first.id())?;
        Ok(Self {
            players: [first, second],
            phase: Phase::Setup,
            turns: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of attacks fired so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// The winner, once the game is finished.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Finished(winner) => Some(winner),
            _ => None,
        }
    }

    /// Both players in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        if self.players[0].id() == id {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        if self.players[0].id() == id {
            &mut self.players[0]
        } else {
            &mut self.players[1]
        }
    }

    fn require(&self, expected: Phase, action: &'static str) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    /// Have each player place their fleet, first player first.
    pub fn initialize_boards(&mut self) -> Result<(), GameError> {
        self.require(Phase::Setup, "initialize boards")?;
        for player in self.players.iter_mut() {
            player.initialize_board()?;
        }
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Alternate attacks until one fleet is destroyed and return the winner.
    ///
    /// The loser is checked after every single attack.
    pub fn start(&mut self) -> Result<PlayerId, GameError> {
        self.require(Phase::Playing, "start")?;
        info!(
            "{} ({}) vs {} ({})",
            self.players[0].name(),
            self.players[0].id(),
            self.players[1].name(),
            self.players[1].id()
        );
        match (self.players[0].is_defeated(), self.players[1].is_defeated()) {
            (true, true) => return Err(GameError::EmptyFleets),
            (false, true) => return Ok(self.finish(0)),
            (true, false) => return Ok(self.finish(1)),
            (false, false) => {}
        }
        loop {
            for attacker in 0..2 {
                let (left, right) = self.players.split_at_mut(1);
                let (offense, defense) = if attacker == 0 {
                    (&mut left[0], &mut right[0])
                } else {
                    (&mut right[0], &mut left[0])
                };
                offense.attack_enemy(defense)?;
                self.turns += 1;
                if defense.is_defeated() {
                    return Ok(self.finish(attacker));
                }
            }
        }
    }

    /// Initialize both boards and play to the end.
    pub fn play(&mut self) -> Result<PlayerId, GameError> {
        self.initialize_boards()?;
        self.start()
    }

    fn finish(&mut self, winner: usize) -> PlayerId {
        let id = self.players[winner].id();
        self.phase = Phase::Finished(id);
        info!(
            "{} ({}) wins after {} attacks",
            self.players[winner].name(),
            id,
            self.turns
        );
        id
    }
}
