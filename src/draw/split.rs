//! Intersection splitting: keeps the wall set a planar arrangement.
//!
//! When a new wall crosses existing walls, both sides are cut at every
//! crossing point. The new wall is processed through a work list: each pass
//! splits it against the first unseen crossing only, and its fragments are
//! re-queued so remaining crossings are picked up in later passes.

use super::Wall;
use crate::util::{self, DEFAULT_KEY_PRECISION, IntersectionKey};
use log::{debug, trace};
use std::collections::HashSet;

/// Inserts `new_wall` into a copy of `existing`, splitting at crossings.
///
/// Uses [`DEFAULT_KEY_PRECISION`] for intersection deduplication.
pub fn split_intersecting_walls(existing: &[Wall], new_wall: Wall) -> Vec<Wall> {
    split_intersecting_walls_with(existing, new_wall, DEFAULT_KEY_PRECISION)
}

/// Inserts `new_wall` into a copy of `existing`, splitting at crossings.
///
/// Intersection points are deduplicated per call using [`IntersectionKey`]s
/// at the given decimal `precision`; a crossing that has already been used
/// for a split is skipped, which stops fragments from being re-split at the
/// point they were created from.
pub fn split_intersecting_walls_with(
    existing: &[Wall],
    new_wall: Wall,
    precision: u32,
) -> Vec<Wall> {
    let mut updated = existing.to_vec();
    let mut pending = vec![new_wall];
    let mut seen: HashSet<IntersectionKey> = HashSet::new();

    while let Some(current) = pending.pop() {
        let mut split = false;

        for index in 0..updated.len() {
            let Some(point) = util::segment_intersection(&updated[index], &current) else {
                continue;
            };

            if !seen.insert(IntersectionKey::new(point, precision)) {
                trace!("Skipping already processed intersection ({}, {})", point.x, point.y);
                continue;
            }

            let (first, second) = updated[index].split_at(point);
            updated[index] = first;
            updated.insert(index + 1, second);

            let (head, tail) = current.split_at(point);
            pending.push(head);
            pending.push(tail);

            debug!(
                "Split walls at ({}, {}); {} fragment(s) pending",
                point.x,
                point.y,
                pending.len()
            );
            split = true;
            break;
        }

        if !split {
            updated.push(current);
        }
    }

    updated
}
