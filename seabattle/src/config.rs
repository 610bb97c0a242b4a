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
//! User configuration: board size and the fleet each side starts with.
use std::{collections::BTreeMap, fs, io, path::Path};

use log::{debug, warn};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    board::Board,
    ids::IdGenerator,
    player::PlayerId,
    ships::{Orientation, Ship, ShipKind},
};

/// Smallest board the game can be played on.
pub const MIN_BOARD_SIZE: usize = 10;

/// Seed of the trial placement done by [`Config::validate`], so that validating the
/// same settings always gives the same answer.
const FIT_CHECK_SEED: u64 = 0x5eab_a771;

/// Errors loading, saving or validating a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not access configuration file: {0}")]
    Io(#[from] io::Error),
    #[error("configuration file is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Game settings, stored on disk as JSON. Missing fields take their default value.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width and height of each board.
    pub board_size: usize,
    /// Orientation newly created ships start with.
    pub default_orientation: Orientation,
    /// Number of segments of each ship class.
    pub boat_sizes: BTreeMap<ShipKind, usize>,
    /// How many ships of each class a fleet holds, as `(quantity, class)`.
    pub default_ship_set: Vec<(usize, ShipKind)>,
    /// Which side the human plays, `0` or `1`.
    pub default_player_side: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: MIN_BOARD_SIZE,
            default_orientation: Orientation::Up,
            boat_sizes: ShipKind::ALL
                .iter()
                .map(|&kind| (kind, kind.default_size()))
                .collect(),
            default_ship_set: vec![
                (1, ShipKind::Carrier),
                (1, ShipKind::Battleship),
                (1, ShipKind::Destroyer),
                (2, ShipKind::Submarine),
                (2, ShipKind::PatrolBoat),
            ],
            default_player_side: 0,
        }
    }
}

impl Config {
    /// Read and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        debug!("loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Read a configuration file, falling back to the defaults if it is missing or
    /// unusable.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no configuration at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write this configuration as pretty printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Reset every setting to its default.
    pub fn restore_defaults(&mut self) {
        *self = Self::default();
    }

    /// Side the human plays on.
    pub fn player_side(&self) -> Result<PlayerId, ConfigError> {
        PlayerId::from_index(self.default_player_side).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "player side must be 0 or 1, not {}",
                self.default_player_side
            ))
        })
    }

    /// Size of a ship class.
    pub fn ship_size(&self, kind: ShipKind) -> Option<usize> {
        self.boat_sizes.get(&kind).copied()
    }

    /// Check that a game can be set up with these settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::Invalid(format!(
                "board size {} is smaller than {}",
                self.board_size, MIN_BOARD_SIZE
            )));
        }
        for (&kind, &size) in &self.boat_sizes {
            if size == 0 {
                return Err(ConfigError::Invalid(format!("{} has no segments", kind)));
            }
            if size > self.board_size {
                return Err(ConfigError::Invalid(format!(
                    "{} of size {} does not fit on a board of size {}",
                    kind, size, self.board_size
                )));
            }
        }
        if self.default_ship_set.iter().all(|&(quantity, _)| quantity == 0) {
            return Err(ConfigError::Invalid("the ship set is empty".to_owned()));
        }
        if let Some((_, kind)) = self
            .default_ship_set
            .iter()
            .find(|(_, kind)| !self.boat_sizes.contains_key(kind))
        {
            return Err(ConfigError::Invalid(format!("{} has no size", kind)));
        }
        self.player_side()?;

        // The computer always places at random, so the ship set must be placeable
        // that way.
        let fleet = self.build_fleet(&mut IdGenerator::new())?;
        let mut board = Board::new(self.board_size, fleet)
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;
        let mut rng = StdRng::seed_from_u64(FIT_CHECK_SEED);
        if let Err(err) = board.randomize_placements(&mut rng) {
            debug!("trial placement failed: {}", err);
            return Err(ConfigError::Invalid(format!(
                "the ship set does not fit on a board of size {}",
                self.board_size
            )));
        }
        Ok(())
    }

    /// Build a fresh, unplaced fleet from the ship set, taking ids from `ids`.
    pub fn fleet(&self, ids: &mut IdGenerator) -> Result<Vec<Ship>, ConfigError> {
        self.validate()?;
        self.build_fleet(ids)
    }

    fn build_fleet(&self, ids: &mut IdGenerator) -> Result<Vec<Ship>, ConfigError> {
        let mut ships = Vec::new();
        for &(quantity, kind) in &self.default_ship_set {
            let size = self
                .ship_size(kind)
                .ok_or_else(|| ConfigError::Invalid(format!("{} has no size", kind)))?;
            for _ in 0..quantity {
                let mut ship = Ship::with_kind(ids.next_id(), kind, size);
                ship.set_orientation(self.default_orientation);
                ships.push(ship);
            }
        }
        Ok(ships)
    }
}
