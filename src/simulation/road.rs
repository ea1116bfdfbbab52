//! Straight multi-lane road running along the y axis.

use geo::{Coord, Line};

/// Stand-in for an infinitely long road.
const INFINITY: f32 = 1_000_000.0;

/// A vertical road with evenly sized lanes and two impassable borders.
#[derive(Debug, Clone)]
pub struct Road {
    /// Horizontal center.
    pub x: f32,
    /// Total width across all lanes.
    pub width: f32,
    /// Number of lanes.
    pub lane_count: usize,
    /// x of the left border.
    pub left: f32,
    /// x of the right border.
    pub right: f32,
    /// Left and right border segments.
    pub borders: Vec<Line<f32>>,
}

impl Road {
    /// Creates a road centered on `x`.
    pub fn new(x: f32, width: f32, lane_count: usize) -> Self {
        let left = x - width / 2.0;
        let right = x + width / 2.0;
        let top = -INFINITY;
        let bottom = INFINITY;

        let top_left = Coord { x: left, y: top };
        let top_right = Coord { x: right, y: top };
        let bottom_left = Coord { x: left, y: bottom };
        let bottom_right = Coord { x: right, y: bottom };

        Self {
            x,
            width,
            lane_count,
            left,
            right,
            borders: vec![
                Line::new(top_left, bottom_left),
                Line::new(top_right, bottom_right),
            ],
        }
    }

    /// Width of a single lane.
    pub fn lane_width(&self) -> f32 {
        self.width / self.lane_count.max(1) as f32
    }

    /// x of a lane's center. Indices past the last lane resolve to the last lane.
    pub fn lane_center(&self, lane_index: usize) -> f32 {
        let lane = lane_index.min(self.lane_count.saturating_sub(1));
        self.left + self.lane_width() / 2.0 + lane as f32 * self.lane_width()
    }
}
