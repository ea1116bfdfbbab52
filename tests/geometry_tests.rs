#![allow(missing_docs)]

use approx::assert_abs_diff_eq;
use drivesim::simulation::geometry::{edges, get_intersection, lerp, line_intersection, polys_intersect};
use geo::{Coord, Line};

fn c(x: f32, y: f32) -> Coord<f32> {
    Coord { x, y }
}

fn square(cx: f32, cy: f32, half: f32) -> [Coord<f32>; 4] {
    [
        c(cx + half, cy - half),
        c(cx - half, cy - half),
        c(cx - half, cy + half),
        c(cx + half, cy + half),
    ]
}

#[test]
fn test_lerp() {
    assert_abs_diff_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_abs_diff_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_abs_diff_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    assert_abs_diff_eq!(lerp(1.0, -1.0, 0.5), 0.0);
}

#[test]
fn test_crossing_segments() {
    let touch = get_intersection(c(0.0, 0.0), c(0.0, -100.0), c(-50.0, -20.0), c(50.0, -20.0))
        .expect("segments cross");

    assert_abs_diff_eq!(touch.offset, 0.2, epsilon = 1e-6);
    assert_abs_diff_eq!(touch.point.x, 0.0, epsilon = 1e-4);
    assert_abs_diff_eq!(touch.point.y, -20.0, epsilon = 1e-4);
}

#[test]
fn test_intersection_symmetry() {
    let (a, b) = (c(0.0, 0.0), c(0.0, -100.0));
    let (p, q) = (c(-50.0, -20.0), c(50.0, -20.0));

    let forward = get_intersection(a, b, p, q).expect("segments cross");
    let backward = get_intersection(p, q, a, b).expect("segments cross");

    // Same point, offset measured along a different segment
    assert_abs_diff_eq!(forward.point.x, backward.point.x, epsilon = 1e-4);
    assert_abs_diff_eq!(forward.point.y, backward.point.y, epsilon = 1e-4);
    assert_abs_diff_eq!(backward.offset, 0.5, epsilon = 1e-6);
}

#[test]
fn test_parallel_segments_never_intersect() {
    assert!(get_intersection(c(0.0, 0.0), c(10.0, 0.0), c(0.0, 5.0), c(10.0, 5.0)).is_none());
    // collinear overlap is not reported either
    assert!(get_intersection(c(0.0, 0.0), c(10.0, 0.0), c(5.0, 0.0), c(15.0, 0.0)).is_none());
}

#[test]
fn test_tiny_crossing_segments() {
    let touch = get_intersection(c(0.0, 0.0), c(1e-4, 1e-4), c(0.0, 1e-4), c(1e-4, 0.0))
        .expect("short segments still cross");

    assert_abs_diff_eq!(touch.offset, 0.5, epsilon = 1e-4);
    assert_abs_diff_eq!(touch.point.x, 5e-5, epsilon = 1e-8);
    // parallel at the same scale is still rejected
    assert!(get_intersection(c(0.0, 0.0), c(1e-4, 0.0), c(0.0, 1e-5), c(1e-4, 1e-5)).is_none());
}

#[test]
fn test_out_of_range_segments() {
    // lines cross at (0, -20) but the first segment stops short of it
    assert!(get_intersection(c(0.0, 0.0), c(0.0, -10.0), c(-50.0, -20.0), c(50.0, -20.0)).is_none());
    // and here the second segment stops short
    assert!(get_intersection(c(0.0, 0.0), c(0.0, -100.0), c(10.0, -20.0), c(50.0, -20.0)).is_none());
}

#[test]
fn test_line_intersection_matches_points() {
    let ray = Line::new(c(0.0, 0.0), c(100.0, 0.0));
    let wall = Line::new(c(75.0, -10.0), c(75.0, 10.0));

    let touch = line_intersection(&ray, &wall).expect("ray hits wall");
    assert_abs_diff_eq!(touch.offset, 0.75, epsilon = 1e-6);
}

#[test]
fn test_edges_wrap_around() {
    let poly = square(0.0, 0.0, 1.0);
    let all: Vec<_> = edges(&poly).collect();

    assert_eq!(all.len(), 4);
    assert_eq!(all[3], (poly[3], poly[0]));
}

#[test]
fn test_overlapping_polygons_intersect() {
    assert!(polys_intersect(&square(0.0, 0.0, 10.0), &square(15.0, 5.0, 10.0)));
}

#[test]
fn test_separate_polygons_do_not_intersect() {
    assert!(!polys_intersect(&square(0.0, 0.0, 10.0), &square(50.0, 0.0, 10.0)));
}

#[test]
fn test_contained_polygon_is_not_reported() {
    assert!(!polys_intersect(&square(0.0, 0.0, 20.0), &square(0.0, 0.0, 5.0)));
}

#[test]
fn test_polygon_against_segment() {
    let poly = square(0.0, 0.0, 10.0);
    assert!(polys_intersect(&poly, &[c(5.0, -100.0), c(5.0, 100.0)]));
    assert!(!polys_intersect(&poly, &[c(50.0, -100.0), c(50.0, 100.0)]));
}

#[test]
fn test_empty_polygon_never_intersects() {
    assert!(!polys_intersect(&square(0.0, 0.0, 10.0), &[]));
}
