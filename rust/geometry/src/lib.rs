// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Floor-Lite Geometry
//!
//! Line-segment outlines for floor boundaries and the closed-loop check that
//! gates floor creation. Points are nalgebra `Point3<f64>`; two points are
//! the same location when each coordinate differs by no more than a
//! tolerance.

pub mod chain;
pub mod closure;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod point;
pub mod sample;
pub mod segment;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;

pub use chain::chain_order;
pub use closure::{DefectKind, LoopDefect, LoopValidator};
pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, Severity, Tee, TracingSink};
pub use error::{Error, Result};
pub use io::{OutlineFile, ValidationReport};
pub use point::{points_coincide, Tolerance, DEFAULT_TOLERANCE};
pub use sample::{sample_outline, sample_outline_as_listed};
pub use segment::Segment;
