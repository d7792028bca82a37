// Copyright 2026 the Quadrel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Permissive vs. strict index construction.
//!
//! The default build routes out-of-bounds discs through the quadrant law
//! anyway; strict mode rejects them up front.
//!
//! Run:
//! - `cargo run -p quadrel_demos --example strict_bounds`

use kurbo::{Point, Rect};
use quadrel_collide::{BuildError, Disc, IndexOptions, build_index, build_index_with};

fn main() {
    let universe = Rect::new(0.0, 0.0, 800.0, 600.0);
    let discs = [
        Disc::new(Point::new(400.0, 300.0), 5.0),
        Disc::new(Point::new(900.0, 700.0), 5.0), // outside the universe
    ];

    // Default: the stray disc still lands in the tree and stays queryable.
    let tree = build_index(&discs, universe).expect("non-empty");
    println!("permissive build stored {} disc(s)", tree.size());
    assert_eq!(tree.size(), 2);

    // Strict: the same input is refused, naming the offender.
    match build_index_with(&discs, universe, IndexOptions::STRICT_BOUNDS) {
        Err(BuildError::BoundsViolation { center }) => {
            println!("strict build refused disc at ({}, {})", center.x, center.y);
        }
        other => panic!("expected a bounds violation, got {other:?}"),
    }
}
