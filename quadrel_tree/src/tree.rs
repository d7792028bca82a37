// Copyright 2026 the Quadrel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: insertion, enumeration, circular range query.

use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::{Circle, Rect};

use crate::geometry::{circle_intersects_rect, point_in_circle};
use crate::types::{Anchored, Quadrant};

/// A point quadtree: each node owns one anchor element and a rectangular
/// region, with up to four children at the quadrants the anchor induces.
///
/// The tree is built fresh from a sequence of elements, grows only by
/// insertion, and is dropped in bulk; there is no deletion and anchors never
/// move once placed. Structural shape depends on insertion order, query
/// results do not.
#[derive(Clone, Debug)]
pub struct PointQuadtree<E> {
    anchor: E,
    bounds: Rect,
    children: [Option<Box<PointQuadtree<E>>>; 4],
    // Count of elements in this subtree, maintained on insert so `size` is
    // O(1) instead of an enumeration.
    size: usize,
}

impl<E: Anchored> PointQuadtree<E> {
    /// Create a leaf node holding `anchor` inside `bounds`.
    ///
    /// `bounds` is the fixed universe rectangle; it must contain every
    /// position ever inserted. The tree never resizes it. Inserting outside
    /// it is not checked: the element is still routed by the quadrant law
    /// and lands in a geometrically meaningless but harmless sub-rectangle.
    pub fn new(anchor: E, bounds: Rect) -> Self {
        Self {
            anchor,
            bounds,
            children: [None, None, None, None],
            size: 1,
        }
    }

    /// The element anchoring this node.
    pub fn anchor(&self) -> &E {
        &self.anchor
    }

    /// The rectangular region this node covers.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The child at `quadrant`, if present.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children[quadrant.idx()].as_deref()
    }

    /// Whether a child exists at `quadrant`.
    pub fn has_child(&self, quadrant: Quadrant) -> bool {
        self.children[quadrant.idx()].is_some()
    }

    /// Number of elements stored in this subtree, anchor included.
    ///
    /// Always at least 1 and always equal to `self.points().count()`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Insert `element` into the subtree.
    ///
    /// The element's quadrant relative to this node's anchor is found via the
    /// tie-break law on [`Quadrant`]; insertion recurses into an existing
    /// child or creates a new leaf with the quadrant's sub-rectangle. Never
    /// rebalances, never moves an existing anchor.
    ///
    /// Returns `true` iff the element was stored. The single unsupported
    /// input, a position exactly equal to the local anchor's, satisfies no
    /// quadrant condition and is dropped with `false`.
    pub fn insert(&mut self, element: E) -> bool {
        let split = self.anchor.position();
        let Some(quadrant) = Quadrant::select(split, element.position()) else {
            return false;
        };
        let inserted = match &mut self.children[quadrant.idx()] {
            Some(child) => child.insert(element),
            slot @ None => {
                let rect = quadrant.child_rect(self.bounds, split);
                *slot = Some(Box::new(Self::new(element, rect)));
                true
            }
        };
        if inserted {
            self.size += 1;
        }
        inserted
    }

    /// Iterate every stored element in pre-order: a node's anchor first,
    /// then each present child in quadrant order 1→4.
    pub fn points(&self) -> Points<'_, E> {
        let mut stack = Vec::new();
        stack.push(self);
        Points { stack }
    }

    /// Collect every stored element, in [`points`](Self::points) order.
    pub fn all_points(&self) -> Vec<&E> {
        self.points().collect()
    }

    /// All stored elements whose position lies within `circle` (closed
    /// membership), in no guaranteed order.
    ///
    /// Subtrees whose rectangle misses the circle are pruned wholesale;
    /// every element in a subtree lies inside its root's rectangle, so the
    /// pruned traversal returns exactly what a full scan would.
    pub fn find_in_circle(&self, circle: Circle) -> Vec<&E> {
        let mut found = Vec::new();
        self.find_into(circle, &mut found);
        found
    }

    fn find_into<'t>(&'t self, circle: Circle, found: &mut Vec<&'t E>) {
        if !circle_intersects_rect(circle, self.bounds) {
            return;
        }
        if point_in_circle(self.anchor.position(), circle) {
            found.push(&self.anchor);
        }
        // Recurse whether or not the local anchor matched.
        for quadrant in Quadrant::ALL {
            if let Some(child) = &self.children[quadrant.idx()] {
                child.find_into(circle, found);
            }
        }
    }
}

/// Pre-order iterator over a tree's elements. See
/// [`PointQuadtree::points`].
#[derive(Clone, Debug)]
pub struct Points<'t, E> {
    stack: Vec<&'t PointQuadtree<E>>,
}

impl<'t, E: Anchored> Iterator for Points<'t, E> {
    type Item = &'t E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children reversed so quadrant 1 pops first.
        for quadrant in Quadrant::ALL.iter().rev() {
            if let Some(child) = &node.children[quadrant.idx()] {
                self.stack.push(child);
            }
        }
        Some(&node.anchor)
    }
}
