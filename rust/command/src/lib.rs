// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Floor-Lite Command
//!
//! Validates a line outline and, when it closes, creates a floor on the
//! first level with the first floor type. Level lookup, floor type lookup
//! and floor construction are host capabilities ([`LevelProvider`],
//! [`FloorTypeProvider`], [`FloorFactory`]); the in-memory
//! [`floor_lite_document::Document`] implements all three.

pub mod create_floor;
pub mod error;
pub mod host;

pub use create_floor::{
    CommandOutcome, CommandResult, CreateFloorFromLines, SUCCESS_MESSAGE, TRANSACTION_NAME,
};
pub use error::CommandFailure;
pub use host::{FloorFactory, FloorTypeProvider, LevelProvider};
