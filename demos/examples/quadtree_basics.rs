// Copyright 2026 the Quadrel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Build a small point quadtree, enumerate it, and run circular range
//! queries against it.
//!
//! Run:
//! - `cargo run -p quadrel_demos --example quadtree_basics`

use kurbo::{Circle, Point, Rect};
use quadrel_tree::{PointQuadtree, Quadrant};

fn main() {
    let universe = Rect::new(0.0, 0.0, 800.0, 600.0);

    // The first point anchors the root; later points split its quadrants.
    let mut tree = PointQuadtree::new(Point::new(400.0, 300.0), universe);
    for p in [
        Point::new(100.0, 100.0),
        Point::new(120.0, 110.0),
        Point::new(700.0, 80.0),
        Point::new(650.0, 520.0),
        Point::new(90.0, 480.0),
    ] {
        tree.insert(p);
    }

    println!("stored {} points", tree.size());
    for q in Quadrant::ALL {
        if let Some(child) = tree.child(q) {
            println!("  {q:?}: {} point(s) in {:?}", child.size(), child.bounds());
        }
    }

    // Everything within 60 units of the upper-left cluster.
    let probe = Circle::new(Point::new(110.0, 105.0), 60.0);
    let near = tree.find_in_circle(probe);
    println!("{} point(s) within {} of {:?}", near.len(), probe.radius, probe.center);
    assert_eq!(near.len(), 2);

    // A miss prunes the whole tree without visiting anything.
    let miss = tree.find_in_circle(Circle::new(Point::new(-50.0, -50.0), 10.0));
    assert!(miss.is_empty());
    println!("query off the universe found nothing, as expected");
}
