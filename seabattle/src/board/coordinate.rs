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
//! Two dimensional grid coordinates.
use std::fmt;

/// Coordinate on a square board. `x` selects the column and `y` the row.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Check whether this coordinate lies on a `size` x `size` board.
    pub fn within(&self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Shift by `(dx, dy)`, returning `None` if the result leaves a `size` x `size`
    /// board.
    pub fn offset(&self, dx: isize, dy: isize, size: usize) -> Option<Self> {
        let x = shift(self.x, dx)?;
        let y = shift(self.y, dy)?;
        let coord = Self::new(x, y);
        if coord.within(size) {
            Some(coord)
        } else {
            None
        }
    }

    /// The orthogonal neighbors of this coordinate that are on the board, in the order
    /// left, right, down, up.
    pub fn neighbors(&self, size: usize) -> impl Iterator<Item = Coordinate> {
        let this = *self;
        ORTHOGONAL
            .iter()
            .filter_map(move |&(dx, dy)| this.offset(dx, dy, size))
    }

    /// True if both coordinates are in the same row or the same column.
    pub fn shares_line(&self, other: &Coordinate) -> bool {
        self.x == other.x || self.y == other.y
    }
}

static ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

fn shift(value: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        value.checked_sub(delta.unsigned_abs())
    } else {
        value.checked_add(delta as usize)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
