// Copyright 2026 the Quadrel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One collision detection round, standing in for a simulation tick.
//!
//! Shows the multiset output of `detect_collisions` and the consumer-side
//! deduplication a "destroy colliders" handler needs before removing
//! entities.
//!
//! Run:
//! - `cargo run -p quadrel_demos --example collision_round`

use kurbo::{Point, Rect};
use quadrel_collide::{Disc, detect_collisions};

fn main() {
    let universe = Rect::new(0.0, 0.0, 800.0, 600.0);

    // The classic seven: a colliding pair, a distant pair, and a trio
    // piled into the same spot.
    let mut discs = vec![
        Disc::new(Point::new(300.0, 300.0), 5.0),
        Disc::new(Point::new(298.0, 302.0), 5.0),
        Disc::new(Point::new(600.0, 400.0), 5.0),
        Disc::new(Point::new(615.0, 400.0), 5.0),
        Disc::new(Point::new(300.0, 500.0), 5.0),
        Disc::new(Point::new(305.0, 503.0), 5.0),
        Disc::new(Point::new(303.0, 499.0), 5.0),
    ];

    let colliders = detect_collisions(&discs, universe).expect("non-empty round");
    println!("collider entries this round: {}", colliders.len());
    assert_eq!(colliders.len(), 8, "2 from the pair, 6 from the trio");

    // A renderer would recolor each reported disc; duplicates are harmless
    // there. Removal is different: deduplicate first, then drop from the
    // back so earlier slots stay valid.
    let mut doomed = colliders.clone();
    doomed.sort_unstable();
    doomed.dedup();
    println!("distinct colliders to remove: {doomed:?}");
    for slot in doomed.into_iter().rev() {
        discs.remove(slot);
    }

    println!("{} disc(s) survive", discs.len());
    assert_eq!(discs.len(), 2, "only the distant pair is left");

    let next_round = detect_collisions(&discs, universe).expect("non-empty round");
    assert!(next_round.is_empty());
    println!("survivors collide with nobody");
}
