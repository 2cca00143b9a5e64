// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host capabilities used by the floor command.
//!
//! The command never touches a document directly. It asks for the first
//! level and floor type, then builds the floor inside a transaction. Any
//! building model that provides these three capabilities can host it.

use floor_lite_document::{Document, FloorKey, FloorTypeKey, LevelKey};
use floor_lite_geometry::Segment;

/// Finds the level a new floor is placed on.
pub trait LevelProvider {
    type Level;

    /// The first level in collection order, if the model has any.
    fn first_level(&self) -> Option<Self::Level>;
}

/// Finds the construction type for a new floor.
pub trait FloorTypeProvider {
    type FloorType;

    /// The first floor type in collection order, if the model has any.
    fn first_floor_type(&self) -> Option<Self::FloorType>;
}

/// Creates floors inside a transaction.
pub trait FloorFactory {
    type Level;
    type FloorType;
    type Floor;
    type Error: std::error::Error;

    fn start_transaction(&mut self, name: &str) -> Result<(), Self::Error>;

    /// Builds a floor. `Ok(None)` means the host declined without an error.
    fn new_floor(
        &mut self,
        boundary: &[Segment],
        floor_type: &Self::FloorType,
        level: &Self::Level,
        structural: bool,
    ) -> Result<Option<Self::Floor>, Self::Error>;

    fn commit_transaction(&mut self) -> Result<(), Self::Error>;

    fn rollback_transaction(&mut self) -> Result<(), Self::Error>;
}

impl LevelProvider for Document {
    type Level = LevelKey;

    fn first_level(&self) -> Option<LevelKey> {
        Document::first_level(self)
    }
}

impl FloorTypeProvider for Document {
    type FloorType = FloorTypeKey;

    fn first_floor_type(&self) -> Option<FloorTypeKey> {
        Document::first_floor_type(self)
    }
}

impl FloorFactory for Document {
    type Level = LevelKey;
    type FloorType = FloorTypeKey;
    type Floor = FloorKey;
    type Error = floor_lite_document::Error;

    fn start_transaction(&mut self, name: &str) -> floor_lite_document::Result<()> {
        Document::start_transaction(self, name)
    }

    fn new_floor(
        &mut self,
        boundary: &[Segment],
        floor_type: &FloorTypeKey,
        level: &LevelKey,
        structural: bool,
    ) -> floor_lite_document::Result<Option<FloorKey>> {
        Document::new_floor(self, boundary, *floor_type, *level, structural).map(Some)
    }

    fn commit_transaction(&mut self) -> floor_lite_document::Result<()> {
        Document::commit(self)
    }

    fn rollback_transaction(&mut self) -> floor_lite_document::Result<()> {
        Document::rollback(self)
    }
}
