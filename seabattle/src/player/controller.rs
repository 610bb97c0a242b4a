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
use crate::{
    board::{AttackResult, Board, BoardError, Coordinate},
    player::PlayerError,
};

/// Decides where a [`Player`](super::Player) puts its ships and where it fires.
pub trait Controller {
    /// Place every ship on `board`.
    fn initialize_board(&mut self, board: &mut Board) -> Result<(), PlayerError>;

    /// Pick the next square of `enemy` to attack.
    fn choose_target(&mut self, own: &Board, enemy: &Board) -> Result<Coordinate, PlayerError>;

    /// Called when the square returned by [`choose_target`](Controller::choose_target)
    /// cannot be attacked. Another target is requested afterwards.
    fn reject_target(&mut self, _target: Coordinate, _error: &BoardError) {}

    /// Called after an attack lands.
    fn record_outcome(&mut self, _target: Coordinate, _result: AttackResult, _enemy: &Board) {}
}
