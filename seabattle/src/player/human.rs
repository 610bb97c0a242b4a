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
//! Controller that defers every decision to an interactive user.
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    board::{AttackResult, Board, BoardError, Coordinate},
    player::{Controller, InputError, PlayerError},
    ships::{Orientation, Ship},
};

/// What the user wants to do with the ship currently being placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveChoice {
    /// Put the ship at this anchor facing this way.
    Place {
        location: Coordinate,
        orientation: Orientation,
    },
    /// Place the whole fleet at random and finish setup.
    Randomize,
}

/// Source of decisions for a human player, typically a terminal or a GUI.
///
/// Returning [`InputError::Aborted`] while placing goes back to the previous ship; while
/// attacking it simply asks again.
pub trait PlayerInput {
    /// Ask where `ship` should go. The ship is flagged as editing during the call.
    fn choose_move_for_ship(&mut self, ship: &Ship, board: &Board)
        -> Result<MoveChoice, InputError>;

    /// Ask which square of the enemy board to fire at.
    fn choose_attack_location(&mut self, own: &Board, enemy: &Board)
        -> Result<Coordinate, InputError>;

    /// A placement or target was refused.
    fn rejected(&mut self, _error: &BoardError) {}

    /// Result of the player's attack.
    fn attack_result(&mut self, _target: Coordinate, _result: AttackResult) {}
}

/// [`Controller`] driven by a [`PlayerInput`].
pub struct HumanController<I, R = StdRng> {
    input: I,
    /// Used when the user asks for random placement.
    rng: R,
}

impl<I: PlayerInput> HumanController<I> {
    /// Create a controller whose random placement is seeded from the OS.
    pub fn new(input: I) -> Self {
        Self::with_rng(input, StdRng::from_entropy())
    }
}

impl<I: PlayerInput, R: Rng> HumanController<I, R> {
    pub fn with_rng(input: I, rng: R) -> Self {
        Self { input, rng }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn into_input(self) -> I {
        self.input
    }
}

impl<I: PlayerInput, R: Rng> Controller for HumanController<I, R> {
    fn initialize_board(&mut self, board: &mut Board) -> Result<(), PlayerError> {
        let ids = board.ship_ids();
        let mut index = 0;
        while let Some(&id) = ids.get(index) {
            board.set_editing(id, true)?;
            let choice = match board.ship(id) {
                Some(ship) => self.input.choose_move_for_ship(ship, board),
                None => return Err(BoardError::ShipDoesNotExist(id).into()),
            };
            board.set_editing(id, false)?;
            match choice {
                Ok(MoveChoice::Place {
                    location,
                    orientation,
                }) => match board.move_ship(id, location, orientation) {
                    Ok(()) => index += 1,
                    Err(err) => {
                        debug!("placement of ship {} rejected: {}", id, err);
                        self.input.rejected(&err);
                    }
                },
                Ok(MoveChoice::Randomize) => {
                    board.randomize_placements(&mut self.rng)?;
                    return Ok(());
                }
                Err(InputError::Aborted) => index = index.saturating_sub(1),
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    fn choose_target(&mut self, own: &Board, enemy: &Board) -> Result<Coordinate, PlayerError> {
        loop {
            match self.input.choose_attack_location(own, enemy) {
                Ok(target) => return Ok(target),
                Err(InputError::Aborted) => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn reject_target(&mut self, _target: Coordinate, error: &BoardError) {
        self.input.rejected(error);
    }

    fn record_outcome(&mut self, target: Coordinate, result: AttackResult, _enemy: &Board) {
        self.input.attack_result(target, result);
    }
}
