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
//! Computer opponent using a hunt/target strategy.
use std::collections::HashSet;

use log::trace;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    board::{AttackResult, Board, BoardError, Coordinate},
    player::{Controller, PlayerError},
};

/// Automated [`Controller`].
///
/// While hunting it fires at random untried squares. After a hit it switches to
/// targeting and works through the neighbors of the hits until the ship sinks.
#[derive(Debug, Clone)]
pub struct HuntTargetAi<R = StdRng> {
    rng: R,
    /// Squares worth trying next while a ship is damaged but afloat.
    target_list: Vec<Coordinate>,
    previous_hit: Option<Coordinate>,
    attempted: HashSet<Coordinate>,
}

impl HuntTargetAi {
    /// Create an AI seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an AI with reproducible choices.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for HuntTargetAi {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HuntTargetAi<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            target_list: Vec::new(),
            previous_hit: None,
            attempted: HashSet::new(),
        }
    }

    /// Candidate squares queued for target mode.
    pub fn target_list(&self) -> &[Coordinate] {
        &self.target_list
    }

    pub fn previous_hit(&self) -> Option<Coordinate> {
        self.previous_hit
    }

    /// Whether a square has already been fired at.
    pub fn has_attempted(&self, coord: Coordinate) -> bool {
        self.attempted.contains(&coord)
    }

    fn is_open(&self, coord: Coordinate, enemy: &Board) -> bool {
        !self.attempted.contains(&coord) && enemy.is_attackable(coord)
    }
}

impl<R: Rng> Controller for HuntTargetAi<R> {
    fn initialize_board(&mut self, board: &mut Board) -> Result<(), PlayerError> {
        board.randomize_placements(&mut self.rng)?;
        Ok(())
    }

    fn choose_target(&mut self, _own: &Board, enemy: &Board) -> Result<Coordinate, PlayerError> {
        while !self.target_list.is_empty() {
            let index = self.rng.gen_range(0, self.target_list.len());
            let candidate = self.target_list.swap_remove(index);
            if self.is_open(candidate, enemy) {
                trace!("targeting {}", candidate);
                return Ok(candidate);
            }
        }

        let size = enemy.size();
        let open: Vec<Coordinate> = (0..size)
            .flat_map(|x| (0..size).map(move |y| Coordinate::new(x, y)))
            .filter(|&coord| self.is_open(coord, enemy))
            .collect();
        let target = *open.choose(&mut self.rng).ok_or(PlayerError::NoTargetsLeft)?;
        trace!("hunting at {}", target);
        Ok(target)
    }

    fn reject_target(&mut self, target: Coordinate, _error: &BoardError) {
        self.attempted.insert(target);
    }

    fn record_outcome(&mut self, target: Coordinate, result: AttackResult, enemy: &Board) {
        self.attempted.insert(target);
        match result {
            AttackResult::Miss => {}
            AttackResult::Hit => {
                for neighbor in target.neighbors(enemy.size()) {
                    if !self.attempted.contains(&neighbor) && !self.target_list.contains(&neighbor)
                    {
                        self.target_list.push(neighbor);
                    }
                }
                if let Some(previous) = self.previous_hit {
                    // Two hits give the ship's axis; drop squares off that line.
                    self.target_list
                        .retain(|c| c.shares_line(&target) && c.shares_line(&previous));
                }
                self.previous_hit = Some(target);
                trace!("hit at {}, {} targets queued", target, self.target_list.len());
            }
            AttackResult::Sunk => {
                self.target_list.clear();
                self.previous_hit = None;
                trace!("sunk a ship at {}, back to hunting", target);
            }
        }
    }
}
