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
//! Ships and their per-segment health.
use thiserror::Error;

use crate::{board::Coordinate, ids::ShipId};

pub use self::{kind::ShipKind, orientation::Orientation};

mod kind;
mod orientation;

/// Errors raised by operations on a single [`Ship`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ShipError {
    /// The ship was hit while it was not placed anywhere.
    #[error("cannot hit a ship that has no location")]
    UnlocatedHit,
    /// The segment index does not exist on this ship.
    #[error("segment {index} is not within 0..{size}")]
    IndexOutOfRange { index: usize, size: usize },
    /// The segment was already destroyed.
    #[error("segment {index} is already destroyed")]
    AlreadyDestroyed { index: usize },
    /// Text did not name one of the four orientations.
    #[error("{0:?} is not one of UP, DOWN, LEFT, RIGHT")]
    InvalidOrientation(String),
    /// The location does not fit on a board of the given size.
    #[error("location {location} does not fit on a {bound}x{bound} board")]
    LocationOutOfRange { location: Coordinate, bound: usize },
}

/// A single vessel: its size, which segments are still intact, and where it sits.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    id: ShipId,
    kind: Option<ShipKind>,
    /// One entry per segment, `true` while the segment is intact.
    segments: Vec<bool>,
    location: Option<Coordinate>,
    orientation: Orientation,
    /// Set by placement front ends while the ship is being moved around.
    editing: bool,
}

impl Ship {
    /// Construct an unplaced, undamaged ship with `size` segments.
    /// Panics if `size` is 0.
    pub fn new(id: ShipId, size: usize) -> Self {
        assert!(size > 0, "ships must have at least one segment");
        Self {
            id,
            kind: None,
            segments: vec![true; size],
            location: None,
            orientation: Orientation::default(),
            editing: false,
        }
    }

    /// Construct an unplaced ship of the given class.
    /// Panics if `size` is 0.
    pub fn with_kind(id: ShipId, kind: ShipKind, size: usize) -> Self {
        Self {
            kind: Some(kind),
            ..Self::new(id, size)
        }
    }

    /// Construct a ship whose segments start with the given health, for instance a
    /// ship carried over already damaged. Panics if `segments` is empty.
    pub fn with_segments(id: ShipId, segments: Vec<bool>) -> Self {
        assert!(!segments.is_empty(), "ships must have at least one segment");
        Self {
            segments,
            ..Self::new(id, 1)
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn kind(&self) -> Option<ShipKind> {
        self.kind
    }

    /// Number of segments.
    pub fn size(&self) -> usize {
        self.segments.len()
    }

    /// Number of intact segments. `0` means the ship is sunk.
    pub fn strength(&self) -> usize {
        self.segments.iter().filter(|&&alive| alive).count()
    }

    pub fn is_sunk(&self) -> bool {
        self.strength() == 0
    }

    /// Health of every segment in order.
    pub fn segments(&self) -> &[bool] {
        &self.segments
    }

    /// Health of one segment, or `None` if the index is out of range.
    pub fn segment(&self, index: usize) -> Option<bool> {
        self.segments.get(index).copied()
    }

    /// Anchor square of the ship, if it has been placed.
    pub fn location(&self) -> Option<Coordinate> {
        self.location
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Set or clear the anchor square. A location must fit on a `bound` x `bound`
    /// board.
    pub fn set_location(
        &mut self,
        location: Option<Coordinate>,
        bound: usize,
    ) -> Result<(), ShipError> {
        if let Some(location) = location {
            if location.x >= bound || location.y >= bound {
                return Err(ShipError::LocationOutOfRange { location, bound });
            }
        }
        self.location = location;
        Ok(())
    }

    /// Forget the anchor square. Health and orientation are kept.
    pub fn unplace(&mut self) {
        self.location = None;
    }

    /// Whether a placement front end is currently moving this ship.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    /// Destroy the segment at `index` and return the remaining strength.
    ///
    /// Only updates this ship; the board that owns it is responsible for the fleet
    /// totals.
    pub fn take_a_hit(&mut self, index: usize) -> Result<usize, ShipError> {
        if self.location.is_none() {
            return Err(ShipError::UnlocatedHit);
        }
        let size = self.size();
        match self.segments.get_mut(index) {
            None => Err(ShipError::IndexOutOfRange { index, size }),
            Some(alive) if !*alive => Err(ShipError::AlreadyDestroyed { index }),
            Some(alive) => {
                *alive = false;
                Ok(self.strength())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(size: usize) -> Ship {
        let mut ship = Ship::new(ShipId::from(7), size);
        ship.set_location(Some(Coordinate::new(1, 1)), 10).unwrap();
        ship
    }

    #[test]
    fn new_ship_is_intact_and_unplaced() {
        let ship = Ship::new(ShipId::from(3), 4);
        assert_eq!(ship.size(), 4);
        assert_eq!(ship.strength(), 4);
        assert_eq!(ship.segments(), &[true, true, true, true]);
        assert_eq!(ship.location(), None);
        assert_eq!(ship.orientation(), Orientation::Up);
        assert!(!ship.is_editing());
        assert_eq!(ship.kind(), None);
    }

    #[test]
    #[should_panic]
    fn zero_sized_ship_panics() {
        Ship::new(ShipId::from(0), 0);
    }

    #[test]
    fn take_a_hit_reduces_strength() {
        let mut ship = placed(3);
        assert_eq!(ship.take_a_hit(1), Ok(2));
        assert_eq!(ship.segment(1), Some(false));
        assert_eq!(ship.take_a_hit(0), Ok(1));
        assert_eq!(ship.take_a_hit(2), Ok(0));
        assert!(ship.is_sunk());
    }

    #[test]
    fn take_a_hit_requires_location() {
        let mut ship = Ship::new(ShipId::from(0), 2);
        assert_eq!(ship.take_a_hit(0), Err(ShipError::UnlocatedHit));
        assert_eq!(ship.strength(), 2);
    }

    #[test]
    fn take_a_hit_rejects_bad_index() {
        let mut ship = placed(2);
        assert_eq!(
            ship.take_a_hit(2),
            Err(ShipError::IndexOutOfRange { index: 2, size: 2 })
        );
    }

    #[test]
    fn take_a_hit_twice_fails() {
        let mut ship = placed(2);
        ship.take_a_hit(0).unwrap();
        assert_eq!(
            ship.take_a_hit(0),
            Err(ShipError::AlreadyDestroyed { index: 0 })
        );
        assert_eq!(ship.strength(), 1);
    }

    #[test]
    fn location_must_fit_bound() {
        let mut ship = Ship::new(ShipId::from(0), 2);
        let err = ship.set_location(Some(Coordinate::new(10, 0)), 10);
        assert_eq!(
            err,
            Err(ShipError::LocationOutOfRange {
                location: Coordinate::new(10, 0),
                bound: 10
            })
        );
        assert_eq!(ship.location(), None);
        ship.set_location(Some(Coordinate::new(9, 9)), 10).unwrap();
        ship.set_location(None, 10).unwrap();
        assert_eq!(ship.location(), None);
    }

    #[test]
    fn unplace_keeps_health_and_orientation() {
        let mut ship = Ship::new(ShipId::from(3), 3);
        ship.set_orientation(Orientation::Left);
        ship.set_location(Some(Coordinate::new(5, 5)), 10).unwrap();
        ship.take_a_hit(1).unwrap();
        ship.unplace();
        assert_eq!(ship.location(), None);
        assert_eq!(ship.orientation(), Orientation::Left);
        assert_eq!(ship.strength(), 2);
        assert_eq!(ship.take_a_hit(0), Err(ShipError::UnlocatedHit));
        ship.unplace();
        assert_eq!(ship.location(), None);
    }

    #[test]
    fn predamaged_ship_keeps_health() {
        let ship = Ship::with_segments(ShipId::from(1), vec![true, false, true, true]);
        assert_eq!(ship.size(), 4);
        assert_eq!(ship.strength(), 3);
    }
}
