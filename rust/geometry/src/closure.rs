// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closed-loop validation for line outlines.
//!
//! An outline is accepted when:
//!
//! 1. it has at least one segment,
//! 2. every segment's end point coincides with the start point of some
//!    *other* segment (checked in input order, all-pairs), and
//! 3. the first segment's start point coincides with the last segment's
//!    end point.
//!
//! Step 2 is independent of input order, step 3 is not. The checks do not
//! prove the outline is a single simple cycle: two disjoint closed sub-loops
//! whose overall first and last points meet are accepted.

use serde::Serialize;
use thiserror::Error;

use crate::diagnostics::{DiagnosticSink, Severity};
use crate::point::{points_coincide, Tolerance};
use crate::segment::Segment;

/// Why an outline is not a closed loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoopDefect {
    /// No segments at all.
    #[error("No lines supplied: an empty outline cannot form a closed shape")]
    EmptyInput,

    /// The segment at `index` (zero-based) has no successor.
    #[error("Line {} is not connected to any other line at its endpoint", .index + 1)]
    DisconnectedSegment { index: usize },

    /// Every segment connects, but the last end point misses the first start point.
    #[error("Shape is not closed: End point does not connect to start point")]
    LoopNotClosed,
}

impl LoopDefect {
    /// Stable machine-readable name for reports.
    pub fn kind(&self) -> DefectKind {
        match self {
            LoopDefect::EmptyInput => DefectKind::EmptyInput,
            LoopDefect::DisconnectedSegment { .. } => DefectKind::DisconnectedSegment,
            LoopDefect::LoopNotClosed => DefectKind::LoopNotClosed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DefectKind {
    EmptyInput,
    DisconnectedSegment,
    LoopNotClosed,
}

/// Checks that an ordered list of segments closes on itself.
///
/// # Example
///
/// ```
/// use floor_lite_geometry::{LoopValidator, Segment};
///
/// let square = [
///     Segment::from_coords([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
///     Segment::from_coords([1.0, 0.0, 0.0], [1.0, 1.0, 0.0]),
///     Segment::from_coords([1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
///     Segment::from_coords([0.0, 1.0, 0.0], [0.0, 0.0, 0.0]),
/// ];
///
/// assert!(LoopValidator::default().validate(&square).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopValidator {
    tolerance: Tolerance,
}

impl LoopValidator {
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Runs the checks, stopping at the first defect found.
    pub fn validate(&self, segments: &[Segment]) -> Result<(), LoopDefect> {
        tracing::debug!(
            segments = segments.len(),
            tolerance = self.tolerance.value(),
            "validating outline"
        );

        let (first, last) = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(LoopDefect::EmptyInput),
        };

        if let Some(index) = self.first_disconnected(segments) {
            tracing::debug!(index, "segment has no successor");
            return Err(LoopDefect::DisconnectedSegment { index });
        }

        if !points_coincide(&first.start, &last.end, self.tolerance) {
            tracing::debug!("first start and last end do not coincide");
            return Err(LoopDefect::LoopNotClosed);
        }

        Ok(())
    }

    /// Like [`validate`](Self::validate), treating absent input as empty.
    pub fn validate_optional(&self, segments: Option<&[Segment]>) -> Result<(), LoopDefect> {
        self.validate(segments.unwrap_or_default())
    }

    /// Returns whether the outline is closed, emitting one warning on failure.
    pub fn is_closed_loop(&self, segments: &[Segment], sink: &mut dyn DiagnosticSink) -> bool {
        self.check(segments, sink).is_ok()
    }

    /// [`validate`](Self::validate), also emitting the defect as a warning.
    pub fn check(
        &self,
        segments: &[Segment],
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), LoopDefect> {
        self.validate(segments).inspect_err(|defect| {
            sink.emit(Severity::Warning, &defect.to_string());
        })
    }

    /// Index of the first segment whose end matches no other segment's start.
    fn first_disconnected(&self, segments: &[Segment]) -> Option<usize> {
        (0..segments.len()).find(|&i| !self.has_successor(segments, i))
    }

    fn has_successor(&self, segments: &[Segment], i: usize) -> bool {
        let end = &segments[i].end;
        segments
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && points_coincide(end, &other.start, self.tolerance))
    }
}
