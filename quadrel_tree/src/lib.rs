// Copyright 2026 the Quadrel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrel Tree: a Kurbo-native point quadtree.
//!
//! A point quadtree stores each element at its own 2D position; every node
//! anchors one element and splits its rectangle into four quadrants at that
//! anchor. This makes insertion cheap and lets circular range queries prune
//! whole subtrees whose rectangle the query circle misses.
//!
//! - Insert elements that expose a position via the [`Anchored`] trait.
//! - Enumerate all elements in pre-order with [`PointQuadtree::points`].
//! - Query a circular region with [`PointQuadtree::find_in_circle`].
//!
//! The tree is a plain ownership hierarchy (each node `Box`es its children)
//! meant to be rebuilt per round and dropped in bulk. There is no deletion,
//! no rebalancing, and no interior mutability.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Circle, Point, Rect};
//! use quadrel_tree::PointQuadtree;
//!
//! // Root anchor plus the universe rectangle all points will live in.
//! let mut tree = PointQuadtree::new(Point::new(400.0, 300.0), Rect::new(0.0, 0.0, 800.0, 600.0));
//! tree.insert(Point::new(100.0, 100.0));
//! tree.insert(Point::new(120.0, 110.0));
//! tree.insert(Point::new(700.0, 500.0));
//! assert_eq!(tree.size(), 4);
//!
//! // Everything within 50 units of (110, 105).
//! let near = tree.find_in_circle(Circle::new(Point::new(110.0, 105.0), 50.0));
//! assert_eq!(near.len(), 2);
//! ```
//!
//! ## Boundary semantics
//!
//! Quadrant membership uses an asymmetric tie-break law so every point other
//! than a node's own anchor lands in exactly one quadrant; see [`Quadrant`].
//! Circle membership is closed (distance `<=` radius), and a negative query
//! radius matches nothing.
//!
//! This crate is `no_std` and uses `alloc`. Enable the `libm` feature
//! instead of the default `std` for no_std builds (forwarded to Kurbo).

#![no_std]

extern crate alloc;

pub mod geometry;
pub mod tree;
pub mod types;

pub use geometry::{circle_intersects_rect, point_in_circle};
pub use tree::{PointQuadtree, Points};
pub use types::{Anchored, Quadrant};
