// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element keys and ids.
//!
//! Keys are `slotmap` generational indices used for O(1) lookup inside a
//! [`crate::Document`]. Every element also carries an [`ElementId`], a
//! monotonically increasing number that defines collection order: the
//! "first" level is the one with the lowest id.

use slotmap::new_key_type;

new_key_type! {
    /// Key for a building level.
    pub struct LevelKey;

    /// Key for a floor type (construction assembly).
    pub struct FloorTypeKey;

    /// Key for a floor element.
    pub struct FloorKey;
}

/// Document-wide element number, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discriminant for element categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    Level,
    FloorType,
    Floor,
}

impl ElementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCategory::Level => "Level",
            ElementCategory::FloorType => "FloorType",
            ElementCategory::Floor => "Floor",
        }
    }
}

impl std::fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
