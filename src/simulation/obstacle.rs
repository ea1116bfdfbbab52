//! Trait for bodies that can be hit and seen.
//!
//! Sensors cast rays against obstacle edges and cars test their own silhouette
//! against obstacle polygons each tick.

use geo::Coord;

/// Trait for anything exposing a closed polygon outline.
///
/// Any type that implements this trait:
/// - Can block a sensor ray
/// - Can damage a car whose polygon crosses it
pub trait Obstacle {
    /// Returns the polygon vertices in winding order.
    fn polygon(&self) -> &[Coord<f32>];
}

impl Obstacle for [Coord<f32>; 4] {
    fn polygon(&self) -> &[Coord<f32>] {
        self
    }
}
