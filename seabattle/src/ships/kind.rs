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
//! Named ship classes used by the standard fleet.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Class of a ship. Only affects how the ship is named; the size of each class comes
/// from the [`Config`][crate::Config].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum ShipKind {
    Carrier,
    Battleship,
    Destroyer,
    Submarine,
    PatrolBoat,
}

impl ShipKind {
    /// All ship classes, largest first.
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Destroyer,
        ShipKind::Submarine,
        ShipKind::PatrolBoat,
    ];

    /// Size of this class in the standard rules.
    pub fn default_size(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 3,
            ShipKind::PatrolBoat => 2,
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "carrier",
            ShipKind::Battleship => "battleship",
            ShipKind::Destroyer => "destroyer",
            ShipKind::Submarine => "submarine",
            ShipKind::PatrolBoat => "patrol boat",
        }
    }

    /// Two letter abbreviation, suitable for drawing boards.
    pub fn abbrev(self) -> &'static str {
        match self {
            ShipKind::Carrier => "cv",
            ShipKind::Battleship => "bb",
            ShipKind::Destroyer => "dd",
            ShipKind::Submarine => "ss",
            ShipKind::PatrolBoat => "pb",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}
