// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for building elements.
//!
//! The [`Document`] owns every level, floor type and floor in slot maps with
//! stable, generational keys. Floors are indexed by the level they sit on so
//! that a level can list its floors without a scan.

use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;

use floor_lite_geometry::Segment;

use crate::keys::*;

/// A building level (storey) at a given elevation.
#[derive(Debug, Clone)]
pub struct LevelData {
    pub id: ElementId,
    pub name: String,
    pub elevation: f64,
}

/// A floor construction type.
#[derive(Debug, Clone)]
pub struct FloorTypeData {
    pub id: ElementId,
    pub name: String,
    pub thickness: f64,
}

/// A floor slab bounded by a closed outline.
#[derive(Debug, Clone)]
pub struct FloorData {
    pub id: ElementId,
    pub boundary: Vec<Segment>,
    pub floor_type: FloorTypeKey,
    pub level: LevelKey,
    pub structural: bool,
}

/// Bookkeeping for the open transaction.
#[derive(Debug, Clone)]
pub(crate) struct TransactionState {
    pub(crate) name: String,
    pub(crate) created: Vec<FloorKey>,
}

/// The building model.
///
/// # Example
///
/// ```
/// use floor_lite_document::Document;
///
/// let mut doc = Document::new();
/// let ground = doc.add_level("Level 0", 0.0);
/// doc.add_level("Level 1", 3.0);
///
/// assert_eq!(doc.first_level(), Some(ground));
/// ```
#[derive(Debug)]
pub struct Document {
    pub(crate) levels: SlotMap<LevelKey, LevelData>,
    pub(crate) floor_types: SlotMap<FloorTypeKey, FloorTypeData>,
    pub(crate) floors: SlotMap<FloorKey, FloorData>,

    // Upward adjacency: level → floors hosted on it
    pub(crate) level_to_floors: FxHashMap<LevelKey, FxHashSet<FloorKey>>,

    pub(crate) next_id: u64,
    pub(crate) transaction: Option<TransactionState>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a new, empty document.
    pub fn new() -> Self {
        Self {
            levels: SlotMap::with_key(),
            floor_types: SlotMap::with_key(),
            floors: SlotMap::with_key(),
            level_to_floors: FxHashMap::default(),
            next_id: 1,
            transaction: None,
        }
    }

    pub(crate) fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    // --- Level operations ---

    /// Adds a level. Levels are reference data and need no transaction.
    pub fn add_level(&mut self, name: impl Into<String>, elevation: f64) -> LevelKey {
        let id = self.allocate_id();
        let name = name.into();
        tracing::debug!(category = %ElementCategory::Level, %id, %name, elevation, "element added");
        self.levels.insert(LevelData { id, name, elevation })
    }

    pub fn level(&self, key: LevelKey) -> Option<&LevelData> {
        self.levels.get(key)
    }

    /// The level with the lowest element id.
    pub fn first_level(&self) -> Option<LevelKey> {
        self.levels
            .iter()
            .min_by_key(|(_, level)| level.id)
            .map(|(key, _)| key)
    }

    // --- Floor type operations ---

    /// Adds a floor type. Like levels, no transaction is needed.
    pub fn add_floor_type(&mut self, name: impl Into<String>, thickness: f64) -> FloorTypeKey {
        let id = self.allocate_id();
        let name = name.into();
        tracing::debug!(category = %ElementCategory::FloorType, %id, %name, thickness, "element added");
        self.floor_types.insert(FloorTypeData { id, name, thickness })
    }

    pub fn floor_type(&self, key: FloorTypeKey) -> Option<&FloorTypeData> {
        self.floor_types.get(key)
    }

    /// The floor type with the lowest element id.
    pub fn first_floor_type(&self) -> Option<FloorTypeKey> {
        self.floor_types
            .iter()
            .min_by_key(|(_, ft)| ft.id)
            .map(|(key, _)| key)
    }

    // --- Floor operations ---

    pub fn floor(&self, key: FloorKey) -> Option<&FloorData> {
        self.floors.get(key)
    }

    /// All floors, in creation order.
    pub fn floors(&self) -> Vec<FloorKey> {
        let mut keys: Vec<_> = self.floors.iter().map(|(k, f)| (f.id, k)).collect();
        keys.sort_unstable_by_key(|(id, _)| *id);
        keys.into_iter().map(|(_, k)| k).collect()
    }

    /// Floors hosted on a level.
    pub fn level_floors(&self, level: LevelKey) -> Option<&FxHashSet<FloorKey>> {
        self.level_to_floors.get(&level)
    }

    /// Number of elements in a category.
    pub fn count(&self, category: ElementCategory) -> usize {
        match category {
            ElementCategory::Level => self.levels.len(),
            ElementCategory::FloorType => self.floor_types.len(),
            ElementCategory::Floor => self.floors.len(),
        }
    }

    // --- Adjacency index helpers ---

    pub(crate) fn link_level_floor(&mut self, level: LevelKey, floor: FloorKey) {
        self.level_to_floors.entry(level).or_default().insert(floor);
    }

    pub(crate) fn unlink_level_floor(&mut self, level: LevelKey, floor: FloorKey) {
        if let Some(set) = self.level_to_floors.get_mut(&level) {
            set.remove(&floor);
            if set.is_empty() {
                self.level_to_floors.remove(&level);
            }
        }
    }
}
