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
//! Random placement of ships on a [`Board`].
use enumflags2::BitFlags;
use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::{
    board::{Board, BoardError},
    ids::ShipId,
    ships::Orientation,
};

/// How many times the whole fleet is re-shuffled before giving up.
pub const MAX_FLEET_ATTEMPTS: usize = 64;

impl Board {
    /// Move a single ship to a random legal placement.
    ///
    /// Orientations are tried in random order until one has room. Returns `false` if
    /// the ship fits nowhere, in which case it is left where it was.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        id: ShipId,
        rng: &mut R,
    ) -> Result<bool, BoardError> {
        let mut untried = BitFlags::<Orientation>::all();
        while !untried.is_empty() {
            let options: Vec<Orientation> = Orientation::ALL
                .iter()
                .copied()
                .filter(|&o| untried.contains(o))
                .collect();
            let orientation = match options.choose(rng) {
                Some(&orientation) => orientation,
                None => break,
            };
            untried.remove(orientation);
            let locations = self.possible_locations_for(id, orientation)?;
            if let Some(&location) = locations.choose(rng) {
                self.move_ship(id, location, orientation)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Clear the board and place every ship at random.
    ///
    /// If some ship has nowhere to go the fleet is cleared and shuffled again, up to
    /// [`MAX_FLEET_ATTEMPTS`] times.
    pub fn randomize_placements<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let ids = self.ship_ids();
        'attempts: for attempt in 1..=MAX_FLEET_ATTEMPTS {
            self.clear_placements();
            for &id in &ids {
                if !self.place_randomly(id, rng)? {
                    debug!("attempt {}: no room for ship {}", attempt, id);
                    continue 'attempts;
                }
            }
            return Ok(());
        }
        self.clear_placements();
        Err(BoardError::FleetDoesNotFit)
    }
}
