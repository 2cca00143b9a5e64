// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Directed straight line segments.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A directed straight segment from `start` to `end`.
///
/// Zero-length segments are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SegmentRecord", into = "SegmentRecord")]
pub struct Segment {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl Segment {
    #[inline]
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// Shorthand for building a segment from raw coordinates.
    pub fn from_coords(start: [f64; 3], end: [f64; 3]) -> Self {
        Self {
            start: Point3::new(start[0], start[1], start[2]),
            end: Point3::new(end[0], end[1], end[2]),
        }
    }

    /// Same segment traversed the other way.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// Wire form: `{ "start": [x, y, z], "end": [x, y, z] }`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SegmentRecord {
    start: [f64; 3],
    end: [f64; 3],
}

impl From<SegmentRecord> for Segment {
    fn from(r: SegmentRecord) -> Self {
        Segment::from_coords(r.start, r.end)
    }
}

impl From<Segment> for SegmentRecord {
    fn from(s: Segment) -> Self {
        SegmentRecord {
            start: [s.start.x, s.start.y, s.start.z],
            end: [s.end.x, s.end.y, s.end.z],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reversed_swaps_endpoints() {
        let s = Segment::from_coords([0.0, 0.0, 0.0], [3.0, 4.0, 0.0]);
        let r = s.reversed();
        assert_eq!(r.start, s.end);
        assert_eq!(r.end, s.start);
        assert_relative_eq!(r.length(), 5.0);
    }

    #[test]
    fn reads_coordinate_arrays() {
        let s: Segment =
            serde_json::from_str(r#"{"start":[55,10,0],"end":[44,12,0]}"#).unwrap();
        assert_eq!(s, Segment::from_coords([55.0, 10.0, 0.0], [44.0, 12.0, 0.0]));

        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["end"][1], 12.0);
    }
}
