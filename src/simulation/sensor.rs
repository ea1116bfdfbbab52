//! Ray-fan sensor - lets a car see road borders and traffic.
//!
//! The sensor casts a fixed number of rays spread evenly across its field of
//! view and keeps, for every ray, the closest point where it touches anything.

use geo::{Coord, Line};
use ndarray::Array1;

use super::geometry::{Touch, edges, get_intersection, lerp, line_intersection};
use super::obstacle::Obstacle;

/// Default number of rays.
pub const DEFAULT_RAY_COUNT: usize = 5;
/// Default ray length.
pub const DEFAULT_RAY_LENGTH: f32 = 150.0;
/// Default field of view in radians.
pub const DEFAULT_RAY_SPREAD: f32 = std::f32::consts::FRAC_PI_2;

/// Sensor that measures distance to borders and obstacles using raycasting.
///
/// After each [`Sensor::update`] there is exactly one ray and one reading per
/// ray index, in the same order. Index 0 points furthest to the left.
#[derive(Debug, Clone)]
pub struct Sensor {
    ray_count: usize,
    ray_length: f32,
    ray_spread: f32,
    rays: Vec<Line<f32>>,
    readings: Vec<Option<Touch>>,
}

impl Sensor {
    /// Creates a sensor with no rays cast yet.
    pub fn new(ray_count: usize, ray_length: f32, ray_spread: f32) -> Self {
        Self {
            ray_count,
            ray_length,
            ray_spread,
            rays: Vec::with_capacity(ray_count),
            readings: Vec::with_capacity(ray_count),
        }
    }

    /// Number of rays in the fan.
    pub fn ray_count(&self) -> usize {
        self.ray_count
    }

    /// Length of each ray.
    pub fn ray_length(&self) -> f32 {
        self.ray_length
    }

    /// Angular width of the fan in radians.
    pub fn ray_spread(&self) -> f32 {
        self.ray_spread
    }

    /// Rays cast by the last update.
    pub fn rays(&self) -> &[Line<f32>] {
        &self.rays
    }

    /// Nearest touch per ray from the last update, `None` where nothing was hit.
    pub fn readings(&self) -> &[Option<Touch>] {
        &self.readings
    }

    /// Recasts the fan from `origin` facing `heading` and recomputes all readings.
    ///
    /// # Arguments
    ///
    /// * `origin` - Position of the owning car
    /// * `heading` - Heading of the owning car in radians (0 faces decreasing y)
    /// * `borders` - Road border segments
    /// * `obstacles` - Bodies whose polygon edges can block rays
    pub fn update<O: Obstacle>(
        &mut self,
        origin: Coord<f32>,
        heading: f32,
        borders: &[Line<f32>],
        obstacles: &[O],
    ) {
        self.cast_rays(origin, heading);
        self.readings = self
            .rays
            .iter()
            .map(|ray| Self::get_reading(ray, borders, obstacles))
            .collect();
    }

    /// Converts readings into network inputs: `1 - offset` for a touch, 0 otherwise.
    ///
    /// Close touches map near 1, far touches and misses near 0.
    pub fn inputs(&self) -> Array1<f32> {
        self.readings
            .iter()
            .map(|reading| reading.map_or(0.0, |touch| 1.0 - touch.offset))
            .collect()
    }

    fn cast_rays(&mut self, origin: Coord<f32>, heading: f32) {
        self.rays.clear();
        for i in 0..self.ray_count {
            let t = if self.ray_count == 1 {
                0.5
            } else {
                i as f32 / (self.ray_count - 1) as f32
            };
            let ray_angle = lerp(self.ray_spread / 2.0, -self.ray_spread / 2.0, t) + heading;

            let end = Coord {
                x: origin.x - ray_angle.sin() * self.ray_length,
                y: origin.y - ray_angle.cos() * self.ray_length,
            };
            self.rays.push(Line::new(origin, end));
        }
    }

    fn get_reading<O: Obstacle>(
        ray: &Line<f32>,
        borders: &[Line<f32>],
        obstacles: &[O],
    ) -> Option<Touch> {
        let border_touches = borders
            .iter()
            .filter_map(|border| line_intersection(ray, border));

        let obstacle_touches = obstacles.iter().flat_map(move |obstacle| {
            edges(obstacle.polygon())
                .filter_map(move |(c, d)| get_intersection(ray.start, ray.end, c, d))
        });

        // first of several equally near touches wins
        border_touches
            .chain(obstacle_touches)
            .min_by(|a, b| a.offset.total_cmp(&b.offset))
    }
}

impl Default for Sensor {
    fn default() -> Self {
        Self::new(DEFAULT_RAY_COUNT, DEFAULT_RAY_LENGTH, DEFAULT_RAY_SPREAD)
    }
}
