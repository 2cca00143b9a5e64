// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reasons a floor command fails.

use floor_lite_geometry::LoopDefect;
use thiserror::Error;

/// Why the command returned [`crate::CommandResult::Failed`].
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandFailure {
    /// The outline is not a closed loop.
    #[error("{0}")]
    OpenOutline(#[from] LoopDefect),

    #[error("No level found in the project")]
    NoLevel,

    #[error("No default floor type found")]
    NoFloorType,

    /// The host returned no floor and no error.
    #[error("Failed to create floor")]
    FloorNotCreated,

    /// The host raised an error while building the floor.
    #[error("Error while creating floor: {0}")]
    Creation(String),

    /// Transaction handling failed outside floor construction.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
