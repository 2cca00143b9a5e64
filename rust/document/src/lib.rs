// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Floor-Lite Document
//!
//! A small in-memory building model: levels, floor types, and floors created
//! inside transactions. It plays the role of the host application's document
//! so that floor creation can run and be tested without one.

pub mod document;
pub mod error;
pub mod keys;
pub mod transaction;

pub use document::{Document, FloorData, FloorTypeData, LevelData};
pub use error::{Error, Result};
pub use keys::{ElementCategory, ElementId, FloorKey, FloorTypeKey, LevelKey};
