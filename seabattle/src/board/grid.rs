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
use std::ops::{Index, IndexMut};

use crate::{
    board::{BoardError, Coordinate},
    ids::ShipId,
};

/// A square occupied by one segment of a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Cell {
    /// The ship that occupies this square.
    pub ship: ShipId,
    /// Index of the ship's segment that lies on this square.
    pub segment: usize,
    /// False once the segment here has been hit.
    pub alive: bool,
}

impl Cell {
    pub(super) fn new(ship: ShipId, segment: usize, alive: bool) -> Self {
        Self {
            ship,
            segment,
            alive,
        }
    }

    /// Mark this cell destroyed. Fails if it already was.
    pub(super) fn destroy(&mut self, location: Coordinate) -> Result<(), BoardError> {
        if !self.alive {
            return Err(BoardError::DoubleDestruction { location });
        }
        self.alive = false;
        Ok(())
    }
}

/// Square matrix of optional cells, stored row by row.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    size: usize,
    cells: Box<[Option<Cell>]>,
}

impl Grid {
    pub(super) fn new(size: usize) -> Self {
        let cells = (0..size * size).map(|_| None).collect();
        Self { size, cells }
    }

    pub(super) fn size(&self) -> usize {
        self.size
    }

    fn linearize(&self, coord: Coordinate) -> Option<usize> {
        if coord.within(self.size) {
            Some(coord.y * self.size + coord.x)
        } else {
            None
        }
    }

    /// Get the cell slot at the given [`Coordinate`], or `None` if out of bounds.
    pub(super) fn get(&self, coord: Coordinate) -> Option<&Option<Cell>> {
        self.linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable cell slot at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut Option<Cell>> {
        self.linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Rows of the grid from `y = 0` upwards.
    pub(super) fn rows(&self) -> impl Iterator<Item = &[Option<Cell>]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Empty every square.
    pub(super) fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }
    }
}

impl Index<Coordinate> for Grid {
    type Output = Option<Cell>;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.rows().count(), 4);
        assert!(grid.rows().flatten().all(Option::is_none));
        assert_eq!(grid.get(Coordinate::new(4, 0)), None);
    }

    #[test]
    fn cells_are_row_major() {
        let mut grid = Grid::new(3);
        grid[Coordinate::new(2, 1)] = Some(Cell::new(ShipId::from(1), 0, true));
        let rows: Vec<_> = grid.rows().collect();
        assert!(rows[1][2].is_some());
        assert!(rows[2][1].is_none());
    }

    #[test]
    fn destroy_once() {
        let at = Coordinate::new(0, 0);
        let mut cell = Cell::new(ShipId::from(1), 0, true);
        assert_eq!(cell.destroy(at), Ok(()));
        assert!(!cell.alive);
        assert_eq!(
            cell.destroy(at),
            Err(BoardError::DoubleDestruction { location: at })
        );
    }
}
