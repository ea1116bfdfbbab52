//! Geometric utility functions for intersection tests.

use geo::{Coord, Line};

/// A point where a segment crosses another, with its position along the first one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    /// Intersection point.
    pub point: Coord<f32>,
    /// Fraction of the first segment from its start to the intersection, in `[0, 1]`.
    pub offset: f32,
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Intersects segment `a`-`b` with segment `c`-`d`.
///
/// # Returns
///
/// The intersection point with its offset along `a`-`b`, or `None` when the
/// segments do not cross. Parallel and collinear segments never intersect.
pub fn get_intersection(
    a: Coord<f32>,
    b: Coord<f32>,
    c: Coord<f32>,
    d: Coord<f32>,
) -> Option<Touch> {
    let t_top = (d.x - c.x) * (a.y - c.y) - (d.y - c.y) * (a.x - c.x);
    let u_top = (c.y - a.y) * (a.x - b.x) - (c.x - a.x) * (a.y - b.y);
    let bottom = (d.y - c.y) * (b.x - a.x) - (d.x - c.x) * (b.y - a.y);

    // parallel when the sine of the angle between the segments is below epsilon
    let scale = (b.x - a.x).hypot(b.y - a.y) * (d.x - c.x).hypot(d.y - c.y);
    if bottom.abs() <= f32::EPSILON * scale {
        return None;
    }

    let t = t_top / bottom;
    let u = u_top / bottom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Touch {
            point: Coord {
                x: lerp(a.x, b.x, t),
                y: lerp(a.y, b.y, t),
            },
            offset: t,
        })
    } else {
        None
    }
}

/// Intersects two line segments, see [`get_intersection`].
#[inline]
pub fn line_intersection(first: &Line<f32>, second: &Line<f32>) -> Option<Touch> {
    get_intersection(first.start, first.end, second.start, second.end)
}

/// Iterates the closed edges of a polygon, wrapping from the last vertex to the first.
pub fn edges(poly: &[Coord<f32>]) -> impl Iterator<Item = (Coord<f32>, Coord<f32>)> + '_ {
    (0..poly.len()).map(move |i| (poly[i], poly[(i + 1) % poly.len()]))
}

/// Checks whether any edge of `poly1` crosses any edge of `poly2`.
///
/// A two-vertex slice works as a segment, so road borders can be tested directly.
/// One polygon lying entirely inside the other is not reported.
pub fn polys_intersect(poly1: &[Coord<f32>], poly2: &[Coord<f32>]) -> bool {
    edges(poly1).any(|(a, b)| edges(poly2).any(|(c, d)| get_intersection(a, b, c, d).is_some()))
}
