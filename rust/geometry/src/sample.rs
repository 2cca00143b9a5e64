// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Built-in demonstration outline.
//!
//! Twelve lines on the z = 0 plane: a notched, non-convex footprint with one
//! diagonal edge between (55, 10) and (44, 12).

use crate::segment::Segment;

/// Start and end (x, y) of each line, in the order they were drawn.
const LINES_AS_DRAWN: [[f64; 4]; 12] = [
    [0.0, 0.0, 79.0, 0.0],
    [44.0, 25.0, 13.0, 25.0],
    [13.0, 40.0, -8.0, 40.0],
    [55.0, 34.0, 55.0, 10.0],
    [79.0, 34.0, 55.0, 34.0],
    [0.0, 20.0, 0.0, 0.0],
    [55.0, 10.0, 44.0, 12.0],
    [-8.0, 40.0, -8.0, 20.0],
    [79.0, 0.0, 79.0, 34.0],
    [44.0, 12.0, 44.0, 25.0],
    [-8.0, 20.0, 0.0, 20.0],
    [13.0, 25.0, 13.0, 40.0],
];

/// Indices into [`LINES_AS_DRAWN`] in walking order, starting at the origin.
const WALK: [usize; 12] = [0, 8, 4, 3, 6, 9, 1, 11, 2, 7, 10, 5];

fn line(raw: &[f64; 4]) -> Segment {
    Segment::from_coords([raw[0], raw[1], 0.0], [raw[2], raw[3], 0.0])
}

/// The outline in walking order. Validates as closed.
pub fn sample_outline() -> Vec<Segment> {
    WALK.iter().map(|&i| line(&LINES_AS_DRAWN[i])).collect()
}

/// The outline in drawing order.
///
/// Every line connects to another, but the first start point (0, 0) and the
/// last end point (13, 40) differ, so the closure check rejects it.
pub fn sample_outline_as_listed() -> Vec<Segment> {
    LINES_AS_DRAWN.iter().map(line).collect()
}
