// Copyright 2026 the Quadrel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless circle/point/rectangle predicates used by the quadtree.

use kurbo::{Circle, Point, Rect};

/// Whether `p` lies on or inside `circle`.
///
/// Membership is closed: a point exactly on the boundary is inside. A circle
/// with negative radius contains no points at all, since no distance is `<=`
/// a negative number. The comparison is done on squared distances, guarded so
/// a negative radius is never squared into a positive threshold.
#[inline]
pub fn point_in_circle(p: Point, circle: Circle) -> bool {
    circle.radius >= 0.0 && p.distance_squared(circle.center) <= circle.radius * circle.radius
}

/// Whether the closed disk of `circle` meets the closed rectangle `rect`.
///
/// Clamps the circle center to the rectangle (the nearest point on or in the
/// rectangle) and tests that point for circle membership. A degenerate
/// rectangle with zero width or height behaves as a segment or a single
/// point, which the clamp handles without special cases.
#[inline]
pub fn circle_intersects_rect(circle: Circle, rect: Rect) -> bool {
    // max/min chains instead of `f64::clamp`: an inverted rectangle (possible
    // after a permissive out-of-bounds insert) must not panic.
    let nearest = Point::new(
        circle.center.x.max(rect.x0).min(rect.x1),
        circle.center.y.max(rect.y0).min(rect.y1),
    );
    point_in_circle(nearest, circle)
}
