use serde::{Deserialize, Serialize};

use super::controls::ControlType;
use super::error::SimError;

/// Placement of one traffic car.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficPlacement {
    /// Lane index, counted from the left.
    pub lane: usize,
    /// Starting y coordinate.
    pub y: f32,
}

/// Simulation parameters that control car, sensor, road and population setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Car body width.
    pub car_width: f32,
    /// Car body length.
    pub car_height: f32,
    /// Speed gained per tick of throttle.
    pub acceleration: f32,
    /// Speed lost per tick towards rest.
    pub friction: f32,
    /// Heading change per tick of steering, in radians.
    pub steer_rate: f32,
    /// Top forward speed of controlled cars. Reverse is capped at half of it.
    pub max_speed: f32,
    /// Top forward speed of traffic cars.
    pub traffic_max_speed: f32,
    /// Number of sensor rays.
    pub ray_count: usize,
    /// Length of each sensor ray.
    pub ray_length: f32,
    /// Sensor field of view in radians.
    pub ray_spread: f32,
    /// Hidden layer sizes between the sensor inputs and the four outputs.
    pub hidden_layers: Vec<usize>,
    /// Horizontal center of the road.
    pub road_x: f32,
    /// Road width across all lanes.
    pub road_width: f32,
    /// Number of lanes.
    pub lane_count: usize,
    /// How the controlled cars are driven.
    pub control_type: ControlType,
    /// Number of network-driven cars (ignored for keyboard control).
    pub population: usize,
    /// Fixed traffic placements.
    pub traffic: Vec<TrafficPlacement>,
    /// Additional traffic cars placed at random ahead of the start.
    pub random_traffic: usize,
    /// Where the best network is saved and loaded.
    pub brain_path: String,
}

impl Default for Params {
    fn default() -> Self {
        let traffic = [
            (1, -100.0),
            (0, -300.0),
            (2, -300.0),
            (0, -500.0),
            (1, -500.0),
            (1, -700.0),
            (2, -700.0),
        ]
        .into_iter()
        .map(|(lane, y)| TrafficPlacement { lane, y })
        .collect();

        Self {
            car_width: 30.0,
            car_height: 50.0,
            acceleration: 0.2,
            friction: 0.05,
            steer_rate: 0.03,
            max_speed: 3.0,
            traffic_max_speed: 2.0,
            ray_count: 5,
            ray_length: 150.0,
            ray_spread: std::f32::consts::FRAC_PI_2,
            hidden_layers: vec![6],
            road_x: 100.0,
            road_width: 180.0,
            lane_count: 3,
            control_type: ControlType::Ai,
            population: 100,
            traffic,
            random_traffic: 0,
            brain_path: "best_brain.json".to_string(),
        }
    }
}

impl Params {
    /// Full network layout: ray count, hidden layers, then the four intents.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_layers.len() + 2);
        sizes.push(self.ray_count);
        sizes.extend(&self.hidden_layers);
        sizes.push(4);
        sizes
    }

    /// Rejects parameters that cannot describe a drivable setup.
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("car_width", self.car_width),
            ("car_height", self.car_height),
            ("ray_length", self.ray_length),
            ("road_width", self.road_width),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(SimError::InvalidParams(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("acceleration", self.acceleration),
            ("friction", self.friction),
            ("steer_rate", self.steer_rate),
            ("max_speed", self.max_speed),
            ("traffic_max_speed", self.traffic_max_speed),
            ("ray_spread", self.ray_spread),
        ];
        for (name, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(SimError::InvalidParams(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if self.lane_count == 0 {
            return Err(SimError::InvalidParams("lane_count must be at least 1".into()));
        }
        if self.hidden_layers.contains(&0) {
            return Err(SimError::InvalidParams(
                "hidden layers must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Loads and validates parameters from a JSON file. Missing fields take their defaults.
    pub fn load_from_file(path: &str) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }
}
