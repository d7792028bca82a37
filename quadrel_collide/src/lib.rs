// Copyright 2026 the Quadrel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrel Collide: per-round overlap detection for circular entities.
//!
//! Given a snapshot of [`Disc`]s and the simulation's fixed universe
//! rectangle, each round:
//!
//! 1. builds a fresh [`quadrel_tree::PointQuadtree`] rooted at the first
//!    disc and inserts the rest in order,
//! 2. queries it once per disc with a circle of radius `2 * radius` around
//!    that disc's center,
//! 3. drops each query's self-match and unions the rest into the round's
//!    collider multiset.
//!
//! The multiset keeps duplicates: a disc with `k` overlapping neighbors is
//! reported `k` times. Consumers decide whether to deduplicate (and must,
//! before removing entities). The `2 * radius` probe is a deliberate
//! approximation of true circle overlap, preserved from the classic
//! formulation; see [`detect_collisions`].
//!
//! The caller owns the loop: this crate has no timers, rendering, input, or
//! motion rules. Pass in an immutable snapshot per tick and interpret the
//! result however the presentation layer likes.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use quadrel_collide::{Disc, detect_collisions};
//!
//! let universe = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let discs = [
//!     Disc::new(Point::new(300.0, 300.0), 5.0),
//!     Disc::new(Point::new(298.0, 302.0), 5.0),
//!     Disc::new(Point::new(600.0, 400.0), 5.0),
//! ];
//!
//! let colliders = detect_collisions(&discs, universe).unwrap();
//! assert_eq!(colliders.len(), 2); // the near pair found each other
//! assert!(!colliders.contains(&2)); // the loner collided with nobody
//! ```
//!
//! Empty rounds fail with [`BuildError::EmptyInput`], the one error a
//! caller must handle — a quadtree cannot exist without a root anchor:
//!
//! ```rust
//! use kurbo::Rect;
//! use quadrel_collide::{BuildError, detect_collisions};
//!
//! let err = detect_collisions(&[], Rect::new(0.0, 0.0, 800.0, 600.0));
//! assert_eq!(err.unwrap_err(), BuildError::EmptyInput);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod detect;
pub mod types;

pub use detect::{build_index, build_index_with, colliding_discs, detect_collisions};
pub use types::{BuildError, Disc, IndexOptions, IndexedDisc};
