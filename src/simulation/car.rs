//! Car pose, kinematics and damage.
//!
//! A car moves according to its controls, rebuilds its rectangular silhouette
//! from the new pose and checks it against road borders and traffic. Once the
//! silhouette touches anything the car is damaged for good: it keeps sensing
//! and thinking but never moves again.

use std::f32::consts::PI;
use std::sync::Arc;

use geo::{Coord, Line};
use ndarray::Array1;

use super::controls::{ControlType, Controls};
use super::geometry::polys_intersect;
use super::network::Network;
use super::obstacle::Obstacle;
use super::params::Params;
use super::sensor::Sensor;

/// Four corners in the order front-right, front-left, rear-left, rear-right.
pub type Polygon = [Coord<f32>; 4];

/// A simulated car.
///
/// Heading 0 faces decreasing y; positive headings turn left. Sensor and
/// network are optional: traffic cars carry neither.
#[derive(Debug, Clone)]
pub struct Car {
    /// Position of the car's center, x.
    pub x: f32,
    /// Position of the car's center, y.
    pub y: f32,
    /// Heading in radians.
    pub angle: f32,
    /// Signed speed along the heading, negative when reversing.
    pub speed: f32,
    /// Body width.
    pub width: f32,
    /// Body length.
    pub height: f32,
    /// Speed gained per tick of throttle.
    pub acceleration: f32,
    /// Top forward speed.
    pub max_speed: f32,
    /// Speed lost per tick towards rest.
    pub friction: f32,
    /// Heading change per tick of steering.
    pub steer_rate: f32,
    /// Source of the intents used by the next motion step.
    pub controls: Controls,
    polygon: Polygon,
    damaged: bool,
    sensor: Option<Sensor>,
    brain: Option<Arc<Network>>,
    last_outputs: Option<Array1<f32>>,
}

impl Car {
    /// Creates a car at rest facing up the road.
    ///
    /// Keyboard and network driven cars get a sensor and a fresh random network
    /// laid out by [`Params::layer_sizes`]; dummy cars get neither.
    ///
    /// # Arguments
    ///
    /// * `x` - Center x
    /// * `y` - Center y
    /// * `control_type` - Source of the car's intents
    /// * `max_speed` - Top forward speed
    /// * `params` - Body, kinematic and sensor settings
    pub fn new(x: f32, y: f32, control_type: ControlType, max_speed: f32, params: &Params) -> Self {
        let mut car = Self::bare(x, y, control_type, max_speed, params);
        if control_type != ControlType::Dummy {
            car.sensor = Some(Sensor::new(
                params.ray_count,
                params.ray_length,
                params.ray_spread,
            ));
            car.brain = Some(Arc::new(Network::new(&params.layer_sizes())));
        }
        car
    }

    /// Creates a car with a sensor that evaluates a shared network.
    pub fn with_brain(
        x: f32,
        y: f32,
        control_type: ControlType,
        max_speed: f32,
        params: &Params,
        brain: Arc<Network>,
    ) -> Self {
        let mut car = Self::bare(x, y, control_type, max_speed, params);
        car.sensor = Some(Sensor::new(
            params.ray_count,
            params.ray_length,
            params.ray_spread,
        ));
        car.brain = Some(brain);
        car
    }

    /// Creates a car without sensor or network.
    pub fn bare(x: f32, y: f32, control_type: ControlType, max_speed: f32, params: &Params) -> Self {
        let mut car = Self {
            x,
            y,
            angle: 0.0,
            speed: 0.0,
            width: params.car_width,
            height: params.car_height,
            acceleration: params.acceleration,
            max_speed,
            friction: params.friction,
            steer_rate: params.steer_rate,
            controls: Controls::new(control_type),
            polygon: [Coord { x: 0.0, y: 0.0 }; 4],
            damaged: false,
            sensor: None,
            brain: None,
            last_outputs: None,
        };
        car.polygon = car.create_polygon();
        car
    }

    /// Attaches a sensor, replacing any existing one.
    pub fn set_sensor(&mut self, sensor: Sensor) {
        self.sensor = Some(sensor);
    }

    /// Attaches a shared network, replacing any existing one.
    pub fn set_brain(&mut self, brain: Arc<Network>) {
        self.brain = Some(brain);
    }

    /// Current position.
    pub fn position(&self) -> Coord<f32> {
        Coord {
            x: self.x,
            y: self.y,
        }
    }

    /// Silhouette from the last update.
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Whether the car has crashed.
    pub fn is_damaged(&self) -> bool {
        self.damaged
    }

    /// The attached sensor, if any.
    pub fn sensor(&self) -> Option<&Sensor> {
        self.sensor.as_ref()
    }

    /// The attached network, if any.
    pub fn brain(&self) -> Option<&Arc<Network>> {
        self.brain.as_ref()
    }

    /// Network outputs from the last update, if the network was evaluated.
    pub fn last_outputs(&self) -> Option<&Array1<f32>> {
        self.last_outputs.as_ref()
    }

    /// Advances the car by one tick.
    ///
    /// Moves and checks for damage unless already damaged, then refreshes the
    /// sensor and evaluates the network. Network-driven controls take the
    /// outputs as intents for the next tick.
    pub fn update<O: Obstacle>(&mut self, borders: &[Line<f32>], obstacles: &[O]) {
        if !self.damaged {
            self.step();
            self.polygon = self.create_polygon();
            self.damaged = self.assess_damage(borders, obstacles);
            if self.damaged {
                log::debug!("car damaged at ({:.1}, {:.1})", self.x, self.y);
            }
        }

        let origin = self.position();
        let Some(sensor) = self.sensor.as_mut() else {
            return;
        };
        sensor.update(origin, self.angle, borders, obstacles);

        // a network wired for another ray count is never evaluated
        if let Some(brain) = self
            .brain
            .as_ref()
            .filter(|brain| brain.input_size() == sensor.ray_count())
        {
            let outputs = brain.feed_forward(&sensor.inputs());
            if let Some(values) = outputs.as_slice() {
                self.controls.apply_network_outputs(values);
            }
            self.last_outputs = Some(outputs);
        }
    }

    fn assess_damage<O: Obstacle>(&self, borders: &[Line<f32>], obstacles: &[O]) -> bool {
        borders
            .iter()
            .any(|border| polys_intersect(&self.polygon, &[border.start, border.end]))
            || obstacles
                .iter()
                .any(|obstacle| polys_intersect(&self.polygon, obstacle.polygon()))
    }

    fn create_polygon(&self) -> Polygon {
        let rad = self.width.hypot(self.height) / 2.0;
        let alpha = self.width.atan2(self.height);
        let corner = |theta: f32| Coord {
            x: self.x - theta.sin() * rad,
            y: self.y - theta.cos() * rad,
        };
        [
            corner(self.angle - alpha),
            corner(self.angle + alpha),
            corner(PI + self.angle - alpha),
            corner(PI + self.angle + alpha),
        ]
    }

    fn step(&mut self) {
        let intents = self.controls.intents();

        if intents.forward {
            self.speed += self.acceleration;
        } else if intents.reverse {
            self.speed -= self.acceleration;
        }

        self.speed = self.speed.min(self.max_speed);
        self.speed = self.speed.max(-self.max_speed / 2.0);

        if self.speed > 0.0 {
            self.speed -= self.friction;
        }
        if self.speed < 0.0 {
            self.speed += self.friction;
        }
        if self.speed.abs() < self.friction {
            self.speed = 0.0;
        }

        if self.speed != 0.0 {
            let flip = if self.speed > 0.0 { 1.0 } else { -1.0 };
            if intents.left {
                self.angle += self.steer_rate * flip;
            } else if intents.right {
                self.angle -= self.steer_rate * flip;
            }
        }

        self.x -= self.angle.sin() * self.speed;
        self.y -= self.angle.cos() * self.speed;
    }
}

impl Obstacle for Car {
    fn polygon(&self) -> &[Coord<f32>] {
        &self.polygon
    }
}
