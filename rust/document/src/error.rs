// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for document operations.

use crate::keys::{FloorKey, FloorTypeKey, LevelKey};

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Level key not found in the document.
    #[error("level not found: {0:?}")]
    LevelNotFound(LevelKey),

    /// Floor type key not found in the document.
    #[error("floor type not found: {0:?}")]
    FloorTypeNotFound(FloorTypeKey),

    /// Floor key not found in the document.
    #[error("floor not found: {0:?}")]
    FloorNotFound(FloorKey),

    /// A floor boundary needs at least three lines.
    #[error("floor boundary has {0} lines, at least 3 are required")]
    DegenerateBoundary(usize),

    /// Modifications require an open transaction.
    #[error("no active transaction")]
    NoActiveTransaction,

    /// Only one transaction may be open at a time.
    #[error("transaction \"{0}\" is already active")]
    TransactionAlreadyActive(String),
}
