// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON outline files and validation reports.
//!
//! ```json
//! {
//!   "tolerance": 0.0001,
//!   "segments": [
//!     { "start": [0, 0, 0], "end": [79, 0, 0] },
//!     { "start": [79, 0, 0], "end": [79, 34, 0] }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::closure::{DefectKind, LoopDefect};
use crate::error::Result;
use crate::point::Tolerance;
use crate::segment::Segment;

/// An outline as stored on disk.
///
/// A missing or `null` segment list is kept as `None`, which validates as
/// empty input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutlineFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(default)]
    pub segments: Option<Vec<Segment>>,
}

impl OutlineFile {
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self {
            tolerance: None,
            segments: Some(segments),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// The tolerance stored in the file, validated.
    pub fn tolerance(&self) -> Result<Option<Tolerance>> {
        self.tolerance.map(Tolerance::new).transpose()
    }

    pub fn segments(&self) -> Option<&[Segment]> {
        self.segments.as_deref()
    }
}

/// Outcome of a validation run, ready for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub closed: bool,
    pub segment_count: usize,
    pub tolerance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defect_kind: Option<DefectKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defect: Option<String>,
    /// Zero-based index of the disconnected segment, when that is the defect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_index: Option<usize>,
}

impl ValidationReport {
    pub fn new(
        segment_count: usize,
        tolerance: Tolerance,
        outcome: std::result::Result<(), LoopDefect>,
    ) -> Self {
        let defect = outcome.err();
        Self {
            closed: defect.is_none(),
            segment_count,
            tolerance: tolerance.value(),
            defect_kind: defect.map(|d| d.kind()),
            defect: defect.map(|d| d.to_string()),
            segment_index: match defect {
                Some(LoopDefect::DisconnectedSegment { index }) => Some(index),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure::LoopValidator;

    #[test]
    fn reads_tolerance_and_segments() {
        let file = OutlineFile::from_json(
            r#"{"tolerance":0.5,"segments":[{"start":[0,0,0],"end":[1,0,0]}]}"#,
        )
        .unwrap();
        assert_eq!(file.tolerance().unwrap().unwrap().value(), 0.5);
        assert_eq!(file.segments().unwrap().len(), 1);
    }

    #[test]
    fn null_segments_validate_as_empty() {
        let file = OutlineFile::from_json(r#"{"segments":null}"#).unwrap();
        assert!(file.segments().is_none());
        assert_eq!(
            LoopValidator::default().validate_optional(file.segments()),
            Err(LoopDefect::EmptyInput)
        );
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        let file = OutlineFile::from_json(r#"{"tolerance":-1,"segments":[]}"#).unwrap();
        assert!(file.tolerance().is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(OutlineFile::from_json(r#"{"segments":[{"start":[0,0]}]}"#).is_err());
    }

    #[test]
    fn report_carries_segment_index() {
        let report = ValidationReport::new(
            5,
            Tolerance::default(),
            Err(LoopDefect::DisconnectedSegment { index: 3 }),
        );
        assert!(!report.closed);
        assert_eq!(report.segment_index, Some(3));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["defect_kind"], "DisconnectedSegment");
        assert_eq!(
            json["defect"],
            "Line 4 is not connected to any other line at its endpoint"
        );
    }

    #[test]
    fn closed_report_omits_defect() {
        let report = ValidationReport::new(4, Tolerance::default(), Ok(()));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["closed"], true);
        assert!(json.get("defect").is_none());
    }
}
