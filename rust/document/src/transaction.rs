// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transactions and floor construction.
//!
//! Floors can only be created inside a named transaction. Committing keeps
//! them; rolling back deletes every floor created since the transaction
//! started and touches nothing else. Transactions do not nest.

use floor_lite_geometry::Segment;

use crate::document::{Document, FloorData, TransactionState};
use crate::error::{Error, Result};
use crate::keys::*;

impl Document {
    /// Opens a transaction.
    pub fn start_transaction(&mut self, name: impl Into<String>) -> Result<()> {
        if let Some(active) = &self.transaction {
            return Err(Error::TransactionAlreadyActive(active.name.clone()));
        }
        let name = name.into();
        tracing::debug!(transaction = %name, "transaction started");
        self.transaction = Some(TransactionState {
            name,
            created: Vec::new(),
        });
        Ok(())
    }

    /// Name of the open transaction, if any.
    pub fn active_transaction(&self) -> Option<&str> {
        self.transaction.as_ref().map(|t| t.name.as_str())
    }

    /// Keeps everything created in the open transaction.
    pub fn commit(&mut self) -> Result<()> {
        let state = self.transaction.take().ok_or(Error::NoActiveTransaction)?;
        tracing::debug!(
            transaction = %state.name,
            floors = state.created.len(),
            "transaction committed"
        );
        Ok(())
    }

    /// Discards everything created in the open transaction.
    pub fn rollback(&mut self) -> Result<()> {
        let state = self.transaction.take().ok_or(Error::NoActiveTransaction)?;
        for key in state.created.iter().rev() {
            if let Some(floor) = self.floors.remove(*key) {
                self.unlink_level_floor(floor.level, *key);
            }
        }
        tracing::debug!(
            transaction = %state.name,
            floors = state.created.len(),
            "transaction rolled back"
        );
        Ok(())
    }

    /// Creates a floor on `level` bounded by `boundary`.
    ///
    /// The boundary is stored as given; closure is the caller's concern.
    /// Requires an open transaction, existing level and floor type keys, and
    /// at least three boundary lines.
    pub fn new_floor(
        &mut self,
        boundary: &[Segment],
        floor_type: FloorTypeKey,
        level: LevelKey,
        structural: bool,
    ) -> Result<FloorKey> {
        if self.transaction.is_none() {
            return Err(Error::NoActiveTransaction);
        }
        if !self.levels.contains_key(level) {
            return Err(Error::LevelNotFound(level));
        }
        if !self.floor_types.contains_key(floor_type) {
            return Err(Error::FloorTypeNotFound(floor_type));
        }
        if boundary.len() < 3 {
            return Err(Error::DegenerateBoundary(boundary.len()));
        }

        let id = self.allocate_id();
        let key = self.floors.insert(FloorData {
            id,
            boundary: boundary.to_vec(),
            floor_type,
            level,
            structural,
        });
        self.link_level_floor(level, key);
        if let Some(state) = self.transaction.as_mut() {
            state.created.push(key);
        }

        tracing::debug!(category = %ElementCategory::Floor, %id, lines = boundary.len(), "element added");
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floor_lite_geometry::sample_outline;

    fn seeded() -> (Document, LevelKey, FloorTypeKey) {
        let mut doc = Document::new();
        let level = doc.add_level("Level 1", 0.0);
        let ft = doc.add_floor_type("Generic 150mm", 0.15);
        (doc, level, ft)
    }

    #[test]
    fn floor_requires_transaction() {
        let (mut doc, level, ft) = seeded();
        let err = doc.new_floor(&sample_outline(), ft, level, false).unwrap_err();
        assert!(matches!(err, Error::NoActiveTransaction));
    }

    #[test]
    fn commit_keeps_floor() {
        let (mut doc, level, ft) = seeded();
        doc.start_transaction("Create Floor").unwrap();
        assert_eq!(doc.active_transaction(), Some("Create Floor"));

        let floor = doc.new_floor(&sample_outline(), ft, level, false).unwrap();
        doc.commit().unwrap();

        assert!(doc.active_transaction().is_none());
        let data = doc.floor(floor).unwrap();
        assert_eq!(data.boundary.len(), 12);
        assert_eq!(data.level, level);
        assert!(!data.structural);
        assert!(doc.level_floors(level).unwrap().contains(&floor));
    }

    #[test]
    fn rollback_discards_floor() {
        let (mut doc, level, ft) = seeded();
        doc.start_transaction("Create Floor").unwrap();
        let floor = doc.new_floor(&sample_outline(), ft, level, true).unwrap();
        doc.rollback().unwrap();

        assert!(doc.floor(floor).is_none());
        assert!(doc.level_floors(level).is_none());
        assert_eq!(doc.count(ElementCategory::Floor), 0);
    }

    #[test]
    fn rollback_only_touches_its_own_floors() {
        let (mut doc, level, ft) = seeded();
        doc.start_transaction("first").unwrap();
        let kept = doc.new_floor(&sample_outline(), ft, level, false).unwrap();
        doc.commit().unwrap();

        doc.start_transaction("second").unwrap();
        let discarded = doc.new_floor(&sample_outline(), ft, level, false).unwrap();
        doc.rollback().unwrap();

        assert_eq!(doc.floors(), vec![kept]);
        assert!(doc.floor(kept).is_some());
        assert!(doc.floor(discarded).is_none());
        let hosted = doc.level_floors(level).unwrap();
        assert!(hosted.contains(&kept));
        assert_eq!(hosted.len(), 1);
    }

    #[test]
    fn empty_rollback_keeps_committed_floors() {
        let (mut doc, level, ft) = seeded();
        doc.start_transaction("Create Floor").unwrap();
        let kept = doc.new_floor(&sample_outline(), ft, level, false).unwrap();
        doc.commit().unwrap();

        doc.start_transaction("edit").unwrap();
        doc.rollback().unwrap();

        assert!(doc.floor(kept).is_some());
        assert_eq!(doc.count(ElementCategory::Floor), 1);
    }

    #[test]
    fn transactions_do_not_nest() {
        let (mut doc, _, _) = seeded();
        doc.start_transaction("outer").unwrap();
        let err = doc.start_transaction("inner").unwrap_err();
        assert!(matches!(err, Error::TransactionAlreadyActive(name) if name == "outer"));
    }

    #[test]
    fn commit_without_transaction_fails() {
        let (mut doc, _, _) = seeded();
        assert!(matches!(doc.commit(), Err(Error::NoActiveTransaction)));
        assert!(matches!(doc.rollback(), Err(Error::NoActiveTransaction)));
    }

    #[test]
    fn degenerate_boundary_is_refused() {
        let (mut doc, level, ft) = seeded();
        doc.start_transaction("Create Floor").unwrap();
        let two = &sample_outline()[..2];
        let err = doc.new_floor(two, ft, level, false).unwrap_err();
        assert!(matches!(err, Error::DegenerateBoundary(2)));
    }

    #[test]
    fn stale_keys_are_refused() {
        let (mut doc, level, ft) = seeded();
        let removed = doc.add_level("temp", 9.0);
        doc.levels.remove(removed);

        doc.start_transaction("Create Floor").unwrap();
        let err = doc.new_floor(&sample_outline(), ft, removed, false).unwrap_err();
        assert!(matches!(err, Error::LevelNotFound(_)));
        assert!(doc.new_floor(&sample_outline(), ft, level, false).is_ok());
    }
}
