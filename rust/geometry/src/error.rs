// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for outline geometry.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or reading outlines.
///
/// Validation outcomes (open loops, missing lines) are not errors; they are
/// reported as [`crate::LoopDefect`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid tolerance: {0} (must be finite and non-negative)")]
    InvalidTolerance(f64),

    #[error("Invalid outline file: {0}")]
    InvalidOutline(#[from] serde_json::Error),

    #[error("Failed to read outline: {0}")]
    Io(#[from] std::io::Error),
}
