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
//! Projection of a ship onto the squares it would occupy.
use crate::{
    board::{BoardError, Coordinate},
    ships::Orientation,
};

/// The squares a ship would cover and the squares around it that must stay clear.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Projection {
    /// Occupied squares, starting at the anchor and following the orientation.
    pub squares: Vec<Coordinate>,
    /// Every on-board square within one step of an occupied square, diagonals
    /// included. Also contains the occupied squares themselves.
    pub surrounding: Vec<Coordinate>,
}

/// Project a ship of `size` segments anchored at `start` onto a `bound` x `bound`
/// board.
///
/// The surrounding squares are listed with the offset across the ship in the outer
/// loop and the offset along the ship in the inner loop.
pub fn project(
    start: Coordinate,
    orientation: Orientation,
    size: usize,
    bound: usize,
) -> Result<Projection, BoardError> {
    if size == 0 {
        return Err(BoardError::InvalidSize);
    }
    let out_of_range = BoardError::LocationOutsideOfRange {
        location: start,
        size: bound,
    };
    if !start.within(bound) {
        return Err(out_of_range);
    }
    let (sx, sy) = orientation.step();
    let (ax, ay) = orientation.across();
    let last = (size - 1) as isize;
    start
        .offset(sx * last, sy * last, bound)
        .ok_or(out_of_range)?;

    let squares = (0..size as isize)
        .filter_map(|a| start.offset(sx * a, sy * a, bound))
        .collect();
    let mut surrounding = Vec::with_capacity(3 * (size + 2));
    for b in -1..=1isize {
        for a in -1..=size as isize {
            if let Some(coord) = start.offset(sx * a + ax * b, sy * a + ay * b, bound) {
                surrounding.push(coord);
            }
        }
    }
    Ok(Projection {
        squares,
        surrounding,
    })
}
