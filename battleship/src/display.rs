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
//! Plain text rendering of boards.
use std::{collections::HashSet, fmt};

use seabattle::{Board, Coordinate, Ship};

/// How much of a board the viewer may see.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum View {
    /// The owner's view: every ship is shown.
    Revealed,
    /// The opponent's view: only squares that have been shot are shown.
    Hidden,
}

/// Display helper that prints a ship's class abbreviation, or `##` for ships without a
/// class.
struct ShipAbbreviation<'a>(&'a Ship);

impl fmt::Display for ShipAbbreviation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0.kind() {
            Some(kind) => f.pad(kind.abbrev()),
            None => f.pad("##"),
        }
    }
}

enum BoardCell<'a> {
    Empty,
    Miss,
    Editing,
    Intact(ShipAbbreviation<'a>),
    Hit(ShipAbbreviation<'a>),
    Sunk(ShipAbbreviation<'a>),
}

impl fmt::Display for BoardCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardCell::Empty => f.pad("~~"),
            BoardCell::Miss => f.pad("x"),
            BoardCell::Editing => f.pad("[]"),
            BoardCell::Intact(ship) => fmt::Display::fmt(ship, f),
            BoardCell::Hit(ship) => f.pad(&format!("x{}", ship)),
            BoardCell::Sunk(ship) => f.pad(&format!("X{}", ship)),
        }
    }
}

/// Print a board with the highest row on top, so that up points up. `misses` are
/// squares known to have been shot without hitting anything.
pub fn show_board(board: &Board, view: View, misses: &HashSet<Coordinate>) {
    let size = board.size();
    let rows: Vec<_> = board.rows().collect();
    print!("   ");
    for x in 0..size {
        print!("{:^4}", x);
    }
    println!();
    for (y, row) in rows.iter().enumerate().rev() {
        print!("{:>2} ", y);
        for (x, cell) in row.iter().enumerate() {
            let at = Coordinate::new(x, y);
            let shown = match cell.and_then(|cell| board.ship(cell.ship).map(|s| (cell, s))) {
                None if misses.contains(&at) => BoardCell::Miss,
                None => BoardCell::Empty,
                Some((_, ship)) if ship.is_sunk() => BoardCell::Sunk(ShipAbbreviation(ship)),
                Some((cell, ship)) if !cell.alive => BoardCell::Hit(ShipAbbreviation(ship)),
                Some(_) if view == View::Hidden => BoardCell::Empty,
                Some((_, ship)) if ship.is_editing() => BoardCell::Editing,
                Some((_, ship)) => BoardCell::Intact(ShipAbbreviation(ship)),
            };
            print!("{:^4}", shown);
        }
        println!();
    }
}
