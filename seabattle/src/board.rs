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
//! A single side's square board, the fleet placed on it and attack resolution.
use std::{collections::BTreeMap, fmt};

use log::debug;

use crate::{
    ids::ShipId,
    ships::{Orientation, Ship},
};

pub use self::{
    coordinate::Coordinate,
    errors::BoardError,
    grid::Cell,
    projection::{project, Projection},
    setup::MAX_FLEET_ATTEMPTS,
};
use self::grid::Grid;

mod coordinate;
mod errors;
mod grid;
mod projection;
mod setup;

/// Result of a single attack on a [`Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AttackResult {
    /// Nothing occupied the square.
    Miss,
    /// A ship was hit and still has intact segments.
    Hit,
    /// The hit destroyed the last intact segment of a ship.
    Sunk,
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            AttackResult::Miss => "MISS",
            AttackResult::Hit => "HIT",
            AttackResult::Sunk => "SUNK",
        })
    }
}

/// One side's ocean: a square grid of cells plus the ships that may occupy it.
///
/// The board owns its ships, so every occupied cell always refers to a ship in
/// [`ships`](Board::ships).
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    ships: BTreeMap<ShipId, Ship>,
    /// Sum of the strength of every ship.
    fleet_strength: usize,
    last_attack: Option<(Coordinate, AttackResult)>,
}

impl Board {
    /// Build a `size` x `size` board holding the given ships. Ships that already have
    /// a location are placed immediately.
    pub fn new<S: IntoIterator<Item = Ship>>(size: usize, ships: S) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }
        let mut board = Self {
            grid: Grid::new(size),
            ships: BTreeMap::new(),
            fleet_strength: 0,
            last_attack: None,
        };
        let mut located = Vec::new();
        for mut ship in ships {
            let id = ship.id();
            if board.ships.contains_key(&id) {
                return Err(BoardError::DuplicateShip(id));
            }
            if let Some(location) = ship.location() {
                located.push((id, location, ship.orientation()));
                ship.unplace();
            }
            board.fleet_strength += ship.strength();
            board.ships.insert(id, ship);
        }
        for (id, location, orientation) in located {
            board.add_ship(id, location, orientation)?;
        }
        Ok(board)
    }

    /// Width and height of the board.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// All ships on this board in ascending id order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    pub fn ship_ids(&self) -> Vec<ShipId> {
        self.ships.keys().copied().collect()
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(&id)
    }

    fn ship_mut(&mut self, id: ShipId) -> Result<&mut Ship, BoardError> {
        self.ships
            .get_mut(&id)
            .ok_or(BoardError::ShipDoesNotExist(id))
    }

    /// Number of intact ship segments left on this board.
    pub fn fleet_strength(&self) -> usize {
        self.fleet_strength
    }

    /// True once every ship has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.fleet_strength == 0
    }

    /// The most recent attack this board received and its result.
    pub fn last_attack(&self) -> Option<(Coordinate, AttackResult)> {
        self.last_attack
    }

    /// Flag a ship as being edited by a placement front end.
    pub fn set_editing(&mut self, id: ShipId, editing: bool) -> Result<(), BoardError> {
        self.ship_mut(id)?.set_editing(editing);
        Ok(())
    }

    /// Rows of cells from `y = 0` upwards, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Cell>]> {
        self.grid.rows()
    }

    /// Get the cell at a coordinate.
    pub fn cell<C: Into<Coordinate>>(&self, coord: C) -> Result<Option<Cell>, BoardError> {
        let coord = coord.into();
        self.grid
            .get(coord)
            .copied()
            .ok_or_else(|| self.out_of_range(coord))
    }

    /// True if the coordinate is on the board and has not already been hit.
    pub fn is_attackable<C: Into<Coordinate>>(&self, coord: C) -> bool {
        match self.grid.get(coord.into()) {
            Some(Some(cell)) => cell.alive,
            Some(None) => true,
            None => false,
        }
    }

    fn out_of_range(&self, location: Coordinate) -> BoardError {
        BoardError::LocationOutsideOfRange {
            location,
            size: self.size(),
        }
    }

    /// Compute the squares a ship of `size` anchored at `start` would occupy and the
    /// squares that must be clear around it.
    pub fn calculate_square_locations<C: Into<Coordinate>>(
        &self,
        start: C,
        orientation: Orientation,
        size: usize,
    ) -> Result<Projection, BoardError> {
        project(start.into(), orientation, size, self.size())
    }

    /// Place an unplaced ship with its anchor at `location`.
    ///
    /// Ships may neither overlap nor touch, diagonals included. The ship's own cells
    /// count as occupied, so use [`move_ship`](Board::move_ship) for ships that are
    /// already on the board.
    pub fn add_ship<C: Into<Coordinate>>(
        &mut self,
        id: ShipId,
        location: C,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let location = location.into();
        let size = self.size();
        let ship_size = self
            .ships
            .get(&id)
            .ok_or(BoardError::ShipDoesNotExist(id))?
            .size();
        let projection = self.calculate_square_locations(location, orientation, ship_size)?;
        if let Some(&taken) = projection
            .surrounding
            .iter()
            .find(|&&square| self.grid[square].is_some())
        {
            return Err(BoardError::CellAlreadyOccupied { location: taken });
        }

        let ship = self.ship_mut(id)?;
        ship.set_location(Some(location), size)
            .map_err(|source| BoardError::Ship { id, source })?;
        ship.set_orientation(orientation);
        let health = ship.segments().to_vec();
        for (segment, (&square, &alive)) in projection.squares.iter().zip(&health).enumerate() {
            self.grid[square] = Some(Cell::new(id, segment, alive));
        }
        debug!("placed ship {} at {} facing {}", id, location, orientation);
        Ok(())
    }

    /// Take a placed ship off the board. Its health is kept.
    pub fn remove_ship(&mut self, id: ShipId) -> Result<(), BoardError> {
        let size = self.size();
        let ship = self.ship_mut(id)?;
        let location = ship
            .location()
            .ok_or(BoardError::UnlocatedShipRemoval(id))?;
        let projection = project(location, ship.orientation(), ship.size(), size)?;
        ship.unplace();
        for square in projection.squares {
            self.grid[square] = None;
        }
        debug!("removed ship {} from {}", id, location);
        Ok(())
    }

    /// Move a ship to a new placement. Unplaced ships are simply added.
    ///
    /// If the new placement is rejected the ship is returned to where it was.
    pub fn move_ship<C: Into<Coordinate>>(
        &mut self,
        id: ShipId,
        location: C,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let previous = {
            let ship = self.ships.get(&id).ok_or(BoardError::ShipDoesNotExist(id))?;
            ship.location().map(|at| (at, ship.orientation()))
        };
        match self.remove_ship(id) {
            Ok(()) | Err(BoardError::UnlocatedShipRemoval(_)) => {}
            Err(err) => return Err(err),
        }
        if let Err(err) = self.add_ship(id, location, orientation) {
            if let Some((at, facing)) = previous {
                self.add_ship(id, at, facing)?;
            }
            return Err(err);
        }
        Ok(())
    }

    /// Take every ship off the board.
    pub fn clear_placements(&mut self) {
        self.grid.clear();
        for ship in self.ships.values_mut() {
            ship.unplace();
        }
    }

    /// Every anchor where a ship of `size` facing `orientation` would currently be
    /// accepted. Ordered by x, then by y.
    pub fn get_possible_locations(&self, size: usize, orientation: Orientation) -> Vec<Coordinate> {
        self.possible_locations(size, orientation, None)
    }

    /// Like [`get_possible_locations`](Board::get_possible_locations) for a specific
    /// ship, treating the squares it currently occupies as free.
    pub fn possible_locations_for(
        &self,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<Vec<Coordinate>, BoardError> {
        let ship = self.ship(id).ok_or(BoardError::ShipDoesNotExist(id))?;
        Ok(self.possible_locations(ship.size(), orientation, Some(id)))
    }

    fn possible_locations(
        &self,
        size: usize,
        orientation: Orientation,
        ignore: Option<ShipId>,
    ) -> Vec<Coordinate> {
        let n = self.size();
        if size == 0 || size > n {
            return Vec::new();
        }
        let (xs, ys) = match orientation {
            Orientation::Up => (0..n, 0..n - size + 1),
            Orientation::Down => (0..n, size - 1..n),
            Orientation::Left => (size - 1..n, 0..n),
            Orientation::Right => (0..n - size + 1, 0..n),
        };
        let mut found = Vec::new();
        for x in xs {
            for y in ys.clone() {
                let start = Coordinate::new(x, y);
                let clear = match project(start, orientation, size, n) {
                    Ok(projection) => projection.surrounding.iter().all(|&square| {
                        match self.grid[square] {
                            None => true,
                            Some(cell) => Some(cell.ship) == ignore,
                        }
                    }),
                    Err(_) => false,
                };
                if clear {
                    found.push(start);
                }
            }
        }
        found
    }

    /// Fire at a square of this board.
    ///
    /// Empty squares are a [`Miss`](AttackResult::Miss) and change nothing. Hitting an
    /// already destroyed segment is an error.
    pub fn attack<C: Into<Coordinate>>(&mut self, coord: C) -> Result<AttackResult, BoardError> {
        let coord = coord.into();
        let error = self.out_of_range(coord);
        let slot = self.grid.get_mut(coord).ok_or(error)?;
        let result = match slot {
            None => AttackResult::Miss,
            Some(cell) => {
                let id = cell.ship;
                let ship = self
                    .ships
                    .get_mut(&id)
                    .ok_or(BoardError::ShipDoesNotExist(id))?;
                let remaining = ship
                    .take_a_hit(cell.segment)
                    .map_err(|source| BoardError::Ship { id, source })?;
                cell.destroy(coord)?;
                self.fleet_strength = self.fleet_strength.saturating_sub(1);
                if remaining > 0 {
                    AttackResult::Hit
                } else {
                    AttackResult::Sunk
                }
            }
        };
        debug!("attack at {}: {}", coord, result);
        self.last_attack = Some((coord, result));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::ShipError;

    fn fleet(sizes: &[usize]) -> Vec<Ship> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| Ship::new(ShipId::from(i as u32), size))
            .collect()
    }

    fn id(n: u32) -> ShipId {
        ShipId::from(n)
    }

    #[test]
    fn new_board_counts_strength() {
        let board = Board::new(10, fleet(&[5, 4, 3])).unwrap();
        assert_eq!(board.size(), 10);
        assert_eq!(board.fleet_strength(), 12);
        assert!(!board.is_defeated());
        assert_eq!(board.ship_ids(), vec![id(0), id(1), id(2)]);
        assert_eq!(board.last_attack(), None);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let ships = vec![Ship::new(id(1), 2), Ship::new(id(1), 3)];
        assert_eq!(
            Board::new(10, ships).unwrap_err(),
            BoardError::DuplicateShip(id(1))
        );
    }

    #[test]
    fn prelocated_ships_are_placed() {
        let mut ship = Ship::new(id(4), 2);
        ship.set_orientation(Orientation::Right);
        ship.set_location(Some(Coordinate::new(1, 1)), 10).unwrap();
        let board = Board::new(10, vec![ship]).unwrap();
        assert_eq!(board.cell((2, 1)).unwrap().map(|c| c.segment), Some(1));
    }

    #[test]
    fn add_then_attack_until_sunk() {
        let mut board = Board::new(10, fleet(&[2])).unwrap();
        board.add_ship(id(0), (0, 0), Orientation::Up).unwrap();
        assert_eq!(board.attack((0, 0)), Ok(AttackResult::Hit));
        assert_eq!(board.fleet_strength(), 1);
        assert_eq!(board.attack((0, 1)), Ok(AttackResult::Sunk));
        assert!(board.is_defeated());
        assert!(board.ship(id(0)).unwrap().is_sunk());
        assert_eq!(
            board.last_attack(),
            Some((Coordinate::new(0, 1), AttackResult::Sunk))
        );
    }

    #[test]
    fn second_attack_on_segment_fails() {
        let mut board = Board::new(10, fleet(&[2])).unwrap();
        board.add_ship(id(0), (0, 0), Orientation::Up).unwrap();
        board.attack((0, 0)).unwrap();
        assert_eq!(
            board.attack((0, 0)),
            Err(BoardError::Ship {
                id: id(0),
                source: ShipError::AlreadyDestroyed { index: 0 }
            })
        );
        assert_eq!(board.fleet_strength(), 1);
        assert!(!board.is_attackable((0, 0)));
        assert!(board.is_attackable((0, 1)));
    }

    #[test]
    fn attack_off_board_fails() {
        let mut board = Board::new(10, fleet(&[2])).unwrap();
        assert_eq!(
            board.attack((10, 3)),
            Err(BoardError::LocationOutsideOfRange {
                location: Coordinate::new(10, 3),
                size: 10
            })
        );
        assert!(!board.is_attackable((10, 3)));
    }

    #[test]
    fn unknown_ship() {
        let mut board = Board::new(10, fleet(&[2])).unwrap();
        assert_eq!(
            board.add_ship(id(9), (0, 0), Orientation::Up),
            Err(BoardError::ShipDoesNotExist(id(9)))
        );
        assert_eq!(
            board.remove_ship(id(9)),
            Err(BoardError::ShipDoesNotExist(id(9)))
        );
        assert!(board.possible_locations_for(id(9), Orientation::Up).is_err());
    }

    #[test]
    fn ships_may_not_touch() {
        let mut board = Board::new(10, fleet(&[3, 2])).unwrap();
        board.add_ship(id(0), (3, 4), Orientation::Right).unwrap();
        assert_eq!(
            board.add_ship(id(1), (6, 5), Orientation::Up),
            Err(BoardError::CellAlreadyOccupied {
                location: Coordinate::new(5, 4)
            })
        );
        assert_eq!(board.ship(id(1)).unwrap().location(), None);
        board.add_ship(id(1), (7, 5), Orientation::Up).unwrap();
    }

    #[test]
    fn adding_placed_ship_again_fails() {
        let mut board = Board::new(10, fleet(&[3])).unwrap();
        board.add_ship(id(0), (3, 4), Orientation::Right).unwrap();
        assert!(matches!(
            board.add_ship(id(0), (3, 4), Orientation::Right),
            Err(BoardError::CellAlreadyOccupied { .. })
        ));
    }

    #[test]
    fn remove_keeps_health() {
        let mut board = Board::new(10, fleet(&[3])).unwrap();
        assert_eq!(
            board.remove_ship(id(0)),
            Err(BoardError::UnlocatedShipRemoval(id(0)))
        );
        board.add_ship(id(0), (0, 0), Orientation::Right).unwrap();
        board.attack((1, 0)).unwrap();
        board.remove_ship(id(0)).unwrap();
        assert!(board.rows().flatten().all(Option::is_none));
        assert_eq!(board.ship(id(0)).unwrap().location(), None);
        assert_eq!(board.fleet_strength(), 2);

        board.add_ship(id(0), (5, 5), Orientation::Up).unwrap();
        assert_eq!(board.cell((5, 6)).unwrap().map(|c| c.alive), Some(false));
        assert!(!board.is_attackable((5, 6)));
    }

    #[test]
    fn failed_move_restores_placement() {
        let mut board = Board::new(10, fleet(&[3, 2])).unwrap();
        board.add_ship(id(0), (0, 0), Orientation::Up).unwrap();
        board.add_ship(id(1), (5, 5), Orientation::Right).unwrap();
        assert!(board.move_ship(id(1), (1, 1), Orientation::Up).is_err());
        let ship = board.ship(id(1)).unwrap();
        assert_eq!(ship.location(), Some(Coordinate::new(5, 5)));
        assert_eq!(ship.orientation(), Orientation::Right);
        assert!(board.cell((6, 5)).unwrap().is_some());
    }

    #[test]
    fn move_to_overlapping_own_position() {
        let mut board = Board::new(10, fleet(&[3])).unwrap();
        board.add_ship(id(0), (2, 2), Orientation::Up).unwrap();
        board.move_ship(id(0), (2, 3), Orientation::Up).unwrap();
        assert!(board.cell((2, 2)).unwrap().is_none());
        assert!(board.cell((2, 5)).unwrap().is_some());
    }

    #[test]
    fn possible_locations_ranges() {
        let board = Board::new(10, fleet(&[3])).unwrap();
        let up = board.get_possible_locations(3, Orientation::Up);
        assert_eq!(up.len(), 80);
        assert_eq!(up[0], Coordinate::new(0, 0));
        assert_eq!(up[1], Coordinate::new(0, 1));
        assert_eq!(up[79], Coordinate::new(9, 7));
        let left = board.get_possible_locations(3, Orientation::Left);
        assert_eq!(left[0], Coordinate::new(2, 0));
        assert!(board.get_possible_locations(11, Orientation::Up).is_empty());
        assert!(board.get_possible_locations(0, Orientation::Up).is_empty());
    }

    #[test]
    fn possible_locations_ignore_own_ship() {
        let mut board = Board::new(10, fleet(&[5])).unwrap();
        board.add_ship(id(0), (0, 0), Orientation::Right).unwrap();
        let generic = board.get_possible_locations(5, Orientation::Right);
        let own = board
            .possible_locations_for(id(0), Orientation::Right)
            .unwrap();
        assert!(!generic.contains(&Coordinate::new(0, 0)));
        assert!(own.contains(&Coordinate::new(0, 0)));
        assert_eq!(own.len(), 60);
    }

    #[test]
    fn clear_placements_empties_grid() {
        let mut board = Board::new(10, fleet(&[3, 2])).unwrap();
        board.add_ship(id(0), (0, 0), Orientation::Up).unwrap();
        board.add_ship(id(1), (5, 5), Orientation::Up).unwrap();
        board.clear_placements();
        assert!(board.rows().flatten().all(Option::is_none));
        assert!(board.ships().all(|s| s.location().is_none()));
    }
}
