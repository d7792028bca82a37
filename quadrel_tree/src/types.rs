// Copyright 2026 the Quadrel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the quadtree: the position capability and quadrants.

use kurbo::{Point, Rect};

/// Capability trait for anything the tree can store: a value with a 2D
/// position.
///
/// The tree never inspects an element beyond [`Anchored::position`]. Entities
/// may carry extra data (a radius, a payload id); the tree is indifferent to
/// it.
pub trait Anchored {
    /// World-space position of this element.
    fn position(&self) -> Point;
}

impl Anchored for Point {
    fn position(&self) -> Point {
        *self
    }
}

/// One of the four sub-regions of a node's rectangle, relative to its anchor.
///
/// Numbering follows the classic 1–4 convention with y growing downward:
/// `UpperRight` is quadrant 1, then counterclockwise through `UpperLeft`,
/// `LowerLeft`, `LowerRight`.
///
/// ## Boundary tie-breaks
///
/// The four membership conditions are deliberately asymmetric so that every
/// point other than the anchor itself maps to exactly one quadrant, with no
/// point on a boundary falling into two:
///
/// - quadrant 1: `x >= xc && y < yc`
/// - quadrant 2: `x < xc && y <= yc`
/// - quadrant 3: `x <= xc && y > yc`
/// - quadrant 4: `x > xc && y >= yc`
///
/// The anchor's own exact coordinates satisfy none of the four; see
/// [`Quadrant::select`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Quadrant 1: `x >= xc`, `y < yc`.
    UpperRight,
    /// Quadrant 2: `x < xc`, `y <= yc`.
    UpperLeft,
    /// Quadrant 3: `x <= xc`, `y > yc`.
    LowerLeft,
    /// Quadrant 4: `x > xc`, `y >= yc`.
    LowerRight,
}

impl Quadrant {
    /// All quadrants in 1→4 order. Traversals visit children in this order.
    pub const ALL: [Self; 4] = [
        Self::UpperRight,
        Self::UpperLeft,
        Self::LowerLeft,
        Self::LowerRight,
    ];

    /// The quadrant of `p` relative to `anchor`, or `None` iff `p` has
    /// exactly the anchor's coordinates (which belong to no quadrant).
    pub fn select(anchor: Point, p: Point) -> Option<Self> {
        let (xc, yc) = (anchor.x, anchor.y);
        if p.x >= xc && p.y < yc {
            Some(Self::UpperRight)
        } else if p.x < xc && p.y <= yc {
            Some(Self::UpperLeft)
        } else if p.x <= xc && p.y > yc {
            Some(Self::LowerLeft)
        } else if p.x > xc && p.y >= yc {
            Some(Self::LowerRight)
        } else {
            None
        }
    }

    /// The sub-rectangle this quadrant occupies within `bounds`, split at
    /// `anchor`. The four sub-rectangles tile `bounds` without overlap.
    pub fn child_rect(self, bounds: Rect, anchor: Point) -> Rect {
        let (xc, yc) = (anchor.x, anchor.y);
        match self {
            Self::UpperRight => Rect::new(xc, bounds.y0, bounds.x1, yc),
            Self::UpperLeft => Rect::new(bounds.x0, bounds.y0, xc, yc),
            Self::LowerLeft => Rect::new(bounds.x0, yc, xc, bounds.y1),
            Self::LowerRight => Rect::new(xc, yc, bounds.x1, bounds.y1),
        }
    }

    pub(crate) const fn idx(self) -> usize {
        match self {
            Self::UpperRight => 0,
            Self::UpperLeft => 1,
            Self::LowerLeft => 2,
            Self::LowerRight => 3,
        }
    }
}
