// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reordering loose segments into traversal order.
//!
//! Outlines are often listed in drawing order rather than walking order. The
//! closure check compares the first and last entries, so such a list fails
//! even when the segments form a cycle. [`chain_order`] walks the segments end
//! to start and returns them in walking order. The validator never calls it;
//! callers opt in.

use crate::point::{points_coincide, Tolerance};
use crate::segment::Segment;

/// Walks from the first segment, each time taking the first unused segment
/// whose start coincides with the current end point.
///
/// Returns `None` when the walk stalls before every segment is used. The
/// walk is greedy and never backtracks: at a vertex shared by two sub-loops
/// (more than one unused segment leaving it) it takes the first in input
/// order, which may dead-end and stall even when a walk covering every
/// segment exists. The result is not checked for closure; run it through
/// the validator.
pub fn chain_order(segments: &[Segment], tol: Tolerance) -> Option<Vec<Segment>> {
    let first = *segments.first()?;
    let mut used = vec![false; segments.len()];
    used[0] = true;

    let mut ordered = Vec::with_capacity(segments.len());
    ordered.push(first);
    let mut current = first;

    while ordered.len() < segments.len() {
        let next = segments
            .iter()
            .enumerate()
            .position(|(j, s)| !used[j] && points_coincide(&current.end, &s.start, tol))?;
        used[next] = true;
        current = segments[next];
        ordered.push(current);
    }

    Some(ordered)
}
