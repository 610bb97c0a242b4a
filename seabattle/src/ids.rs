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
//! Ship identifiers.
use std::fmt;

/// Identifier of a single ship. Unique within everything built from one
/// [`IdGenerator`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShipId(u32);

impl ShipId {
    /// Raw integer value of this id.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ShipId {
    fn from(id: u32) -> Self {
        ShipId(id)
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Hands out consecutive [`ShipId`]s starting at zero.
///
/// Whatever builds the ships for a match owns one of these, so two generators never
/// share state and a fresh generator always starts over from zero.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    /// Construct a generator whose first id is `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next unused id.
    pub fn next_id(&mut self) -> ShipId {
        let id = ShipId(self.next);
        self.next += 1;
        id
    }

    /// Forget every id handed out so far.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}

impl Iterator for IdGenerator {
    type Item = ShipId;

    fn next(&mut self) -> Option<ShipId> {
        Some(self.next_id())
    }
}
