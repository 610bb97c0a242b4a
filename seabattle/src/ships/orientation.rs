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
//! Direction a ship extends in from its anchor square.
use std::{fmt, str::FromStr};

use enumflags2::BitFlags;
use serde::{Deserialize, Serialize};

use crate::ships::ShipError;

/// Placement orientation of a ship.
///
/// Segment `0` sits on the anchor square and every following segment is one step
/// further in this direction.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Orientation {
    /// Increasing `y`.
    Up = 0b0001,
    /// Decreasing `y`.
    Down = 0b0010,
    /// Decreasing `x`.
    Left = 0b0100,
    /// Increasing `x`.
    Right = 0b1000,
}

impl Orientation {
    /// Every orientation, in a fixed order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Down,
        Orientation::Left,
        Orientation::Right,
    ];

    /// Offset of the next segment along the ship.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Up => (0, 1),
            Orientation::Down => (0, -1),
            Orientation::Left => (-1, 0),
            Orientation::Right => (1, 0),
        }
    }

    /// Offset that moves sideways off the ship's axis.
    pub fn across(self) -> (isize, isize) {
        match self {
            Orientation::Up | Orientation::Down => (1, 0),
            Orientation::Left | Orientation::Right => (0, 1),
        }
    }

    /// Name used in configuration files and prompts.
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Up => "UP",
            Orientation::Down => "DOWN",
            Orientation::Left => "LEFT",
            Orientation::Right => "RIGHT",
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Up
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Orientation {
    type Err = ShipError;

    /// Parse an orientation name, ignoring case. Compass directions and single-letter
    /// abbreviations are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" | "north" | "n" => Ok(Orientation::Up),
            "down" | "d" | "south" | "s" => Ok(Orientation::Down),
            "left" | "l" | "west" | "w" => Ok(Orientation::Left),
            "right" | "r" | "east" | "e" => Ok(Orientation::Right),
            _ => Err(ShipError::InvalidOrientation(s.to_owned())),
        }
    }
}
