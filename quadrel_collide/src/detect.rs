// Copyright 2026 the Quadrel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index construction and the per-round collision detection algorithm.

use alloc::vec::Vec;
use kurbo::{Circle, Rect};
use quadrel_tree::PointQuadtree;

use crate::types::{BuildError, Disc, IndexOptions, IndexedDisc};

/// Build a fresh spatial index for one detection round.
///
/// The first disc becomes the root anchor; the rest are inserted in order.
/// `bounds` is the simulation's fixed universe rectangle, not derived from
/// the data. Fails only on empty input.
pub fn build_index(
    discs: &[Disc],
    bounds: Rect,
) -> Result<PointQuadtree<IndexedDisc>, BuildError> {
    build_index_with(discs, bounds, IndexOptions::empty())
}

/// [`build_index`] with explicit options.
///
/// With [`IndexOptions::STRICT_BOUNDS`], the first disc centered outside
/// `bounds` aborts the build with [`BuildError::BoundsViolation`]. The
/// default mode routes such discs permissively instead.
pub fn build_index_with(
    discs: &[Disc],
    bounds: Rect,
    options: IndexOptions,
) -> Result<PointQuadtree<IndexedDisc>, BuildError> {
    let (first, rest) = discs.split_first().ok_or(BuildError::EmptyInput)?;
    if options.contains(IndexOptions::STRICT_BOUNDS) {
        for disc in discs {
            let c = disc.center;
            if c.x < bounds.x0 || c.x > bounds.x1 || c.y < bounds.y0 || c.y > bounds.y1 {
                return Err(BuildError::BoundsViolation { center: c });
            }
        }
    }
    let mut tree = PointQuadtree::new(IndexedDisc { slot: 0, disc: *first }, bounds);
    for (i, disc) in rest.iter().enumerate() {
        tree.insert(IndexedDisc {
            slot: i + 1,
            disc: *disc,
        });
    }
    Ok(tree)
}

/// Find every disc that overlaps at least one other disc this round.
///
/// Builds a fresh index, then queries it once per disc with a circle of
/// radius `2 * radius` around that disc's center and drops the self-match.
/// The search radius is twice the querying disc's own radius, not the sum of
/// the two radii; this is the deliberate approximation of the classic
/// exercise, kept as-is, so callers needing an exact surface-contact test
/// (`distance <= r1 + r2`) must filter further.
///
/// The result indexes into `discs` and is a multiset: a disc found by `k`
/// neighbors appears `k` times. That duplication is meaningful output; a
/// consumer that removes colliders must deduplicate first.
pub fn detect_collisions(discs: &[Disc], bounds: Rect) -> Result<Vec<usize>, BuildError> {
    let tree = build_index(discs, bounds)?;
    let mut colliders = Vec::new();
    for (slot, disc) in discs.iter().enumerate() {
        let probe = Circle::new(disc.center, 2.0 * disc.radius);
        for hit in tree.find_in_circle(probe) {
            if hit.slot != slot {
                colliders.push(hit.slot);
            }
        }
    }
    Ok(colliders)
}

/// [`detect_collisions`], materialized as disc values.
///
/// Same multiset semantics, but each entry is a copy of the collider itself
/// rather than its slot.
pub fn colliding_discs(discs: &[Disc], bounds: Rect) -> Result<Vec<Disc>, BuildError> {
    let slots = detect_collisions(discs, bounds)?;
    Ok(slots.into_iter().map(|slot| discs[slot]).collect())
}
