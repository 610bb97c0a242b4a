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

use crate::{board::Coordinate, ids::ShipId, ships::ShipError};

/// Errors raised while placing ships on a [`Board`](super::Board) or attacking it.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum BoardError {
    /// A coordinate, or part of a ship projected from it, is off the board.
    #[error("location {location} is outside of the {size}x{size} board")]
    LocationOutsideOfRange { location: Coordinate, size: usize },

    /// The placement overlaps or touches another ship.
    #[error("square {location} is already occupied or adjacent to a ship")]
    CellAlreadyOccupied { location: Coordinate },

    /// No ship with that id belongs to this board.
    #[error("ship {0} does not exist on this board")]
    ShipDoesNotExist(ShipId),

    /// Tried to remove a ship that was never placed.
    #[error("ship {0} cannot be removed because it has no location")]
    UnlocatedShipRemoval(ShipId),

    /// A cell was destroyed twice.
    #[error("cell at {location} was already destroyed")]
    DoubleDestruction { location: Coordinate },

    /// The same ship id was supplied twice when building a board.
    #[error("ship {0} was added to the board twice")]
    DuplicateShip(ShipId),

    /// A ship projection was requested for a size of zero.
    #[error("ship size must be at least 1")]
    InvalidSize,

    /// Random placement could not find room for the whole fleet.
    #[error("the fleet does not fit on the board")]
    FleetDoesNotFit,

    /// An operation on a single ship failed.
    #[error("ship {id}: {source}")]
    Ship {
        id: ShipId,
        #[source]
        source: ShipError,
    },
}
