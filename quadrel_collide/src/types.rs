// Copyright 2026 the Quadrel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: the circular entity, index options, and build errors.

use kurbo::{Circle, Point};
use quadrel_tree::Anchored;

/// A circular entity: a center position and a radius.
///
/// This is the collision layer's view of an entity. The quadtree only ever
/// sees the center (via [`Anchored`]); the radius matters solely when a
/// detection round sizes its query circles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Disc {
    /// Center position.
    pub center: Point,
    /// Radius. Collision rounds assume it is non-negative.
    pub radius: f64,
}

impl Disc {
    /// Create a disc from center and radius.
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// The disc's outline as a Kurbo circle.
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }
}

impl Anchored for Disc {
    fn position(&self) -> Point {
        self.center
    }
}

/// A disc tagged with its slot in the round's input sequence.
///
/// The tree stores these rather than bare [`Disc`]s so a query's self-match
/// can be removed by slot identity. Two discs with identical center and
/// radius stay distinguishable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndexedDisc {
    /// Position of this disc in the input slice.
    pub slot: usize,
    /// The disc itself.
    pub disc: Disc,
}

impl Anchored for IndexedDisc {
    fn position(&self) -> Point {
        self.disc.center
    }
}

bitflags::bitflags! {
    /// Options controlling index construction.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct IndexOptions: u8 {
        /// Reject discs whose center lies outside the universe rectangle
        /// with [`BuildError::BoundsViolation`] instead of routing them
        /// permissively.
        const STRICT_BOUNDS = 0b0000_0001;
    }
}

/// Errors from index construction (and therefore from a detection round).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BuildError {
    /// No discs were given. A quadtree needs a root anchor, so an empty
    /// round cannot build one.
    EmptyInput,
    /// Strict-bounds mode found a disc centered outside the universe
    /// rectangle. Never raised in the default, permissive mode.
    BoundsViolation {
        /// Center of the offending disc.
        center: Point,
    },
}

impl core::fmt::Display for BuildError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "cannot build an index from zero discs"),
            Self::BoundsViolation { center } => {
                write!(f, "disc center ({}, {}) lies outside the universe rectangle", center.x, center.y)
            }
        }
    }
}

impl core::error::Error for BuildError {}
