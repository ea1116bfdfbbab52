//! Tick driver for a road, its traffic and the controlled cars.
//!
//! Each step updates traffic first, then every controlled car in parallel
//! using rayon. Controlled cars only read traffic polygons, which by then
//! already reflect the current tick's motion.

use std::sync::Arc;

use rand::Rng;
use rayon::prelude::*;

use super::car::Car;
use super::controls::ControlType;
use super::error::SimError;
use super::network::Network;
use super::params::Params;
use super::road::Road;

/// Distance ahead of the start where random traffic begins.
const RANDOM_TRAFFIC_START: f32 = -100.0;
/// Vertical spacing between randomly placed traffic rows.
const RANDOM_TRAFFIC_SPACING: f32 = 200.0;

/// The complete simulation state.
#[derive(Debug, Clone)]
pub struct World {
    /// The road and its borders.
    pub road: Road,
    /// Dummy cars driving straight ahead.
    pub traffic: Vec<Car>,
    /// Keyboard or network driven cars.
    pub cars: Vec<Car>,
    /// Number of steps taken.
    pub tick: u64,
}

impl World {
    /// Builds a world from parameters.
    ///
    /// With a `brain`, every network-driven car shares it; without one each
    /// car gets its own random network. Keyboard control spawns a single car.
    pub fn new(params: &Params, brain: Option<Arc<Network>>) -> Result<Self, SimError> {
        params.validate()?;

        if let Some(brain) = &brain {
            brain.validate()?;
            let expected = (params.ray_count, 4);
            let found = (brain.input_size(), brain.output_size());
            if expected != found {
                return Err(SimError::NetworkShape { expected, found });
            }
        }

        let road = Road::new(params.road_x, params.road_width, params.lane_count);
        let traffic = Self::spawn_traffic(&road, params);

        let start_x = road.lane_center(1);
        let start_y = 100.0;
        let count = match params.control_type {
            ControlType::Ai => params.population,
            ControlType::Keys | ControlType::Dummy => 1,
        };
        let cars = (0..count)
            .map(|_| match &brain {
                Some(brain) => Car::with_brain(
                    start_x,
                    start_y,
                    params.control_type,
                    params.max_speed,
                    params,
                    Arc::clone(brain),
                ),
                None => Car::new(
                    start_x,
                    start_y,
                    params.control_type,
                    params.max_speed,
                    params,
                ),
            })
            .collect::<Vec<_>>();

        log::info!(
            "world ready: {} cars, {} traffic, shared brain: {}",
            cars.len(),
            traffic.len(),
            brain.is_some()
        );

        Ok(Self {
            road,
            traffic,
            cars,
            tick: 0,
        })
    }

    fn spawn_traffic(road: &Road, params: &Params) -> Vec<Car> {
        let dummy = |lane: usize, y: f32| {
            Car::new(
                road.lane_center(lane),
                y,
                ControlType::Dummy,
                params.traffic_max_speed,
                params,
            )
        };

        let mut traffic: Vec<Car> = params
            .traffic
            .iter()
            .map(|placement| dummy(placement.lane, placement.y))
            .collect();

        let furthest = params
            .traffic
            .iter()
            .map(|placement| placement.y)
            .fold(RANDOM_TRAFFIC_START, f32::min);
        let mut rng = rand::rng();
        for i in 0..params.random_traffic {
            let lane = rng.random_range(0..road.lane_count);
            let y = furthest - RANDOM_TRAFFIC_SPACING * (i + 1) as f32;
            traffic.push(dummy(lane, y));
        }
        traffic
    }

    /// Advances every car by one tick.
    pub fn step(&mut self) {
        let borders = &self.road.borders;

        let no_obstacles: &[Car] = &[];
        for car in &mut self.traffic {
            car.update(borders, no_obstacles);
        }

        let damaged_before = self.damaged_count();
        let traffic = &self.traffic;
        self.cars
            .par_iter_mut()
            .for_each(|car| car.update(borders, traffic));

        let newly_damaged = self.damaged_count() - damaged_before;
        if newly_damaged > 0 {
            log::debug!(
                "tick {}: {} cars damaged, {} still driving",
                self.tick,
                newly_damaged,
                self.cars.len() - self.damaged_count()
            );
        }
        self.tick += 1;
    }

    /// The controlled car furthest up the road.
    pub fn best_car(&self) -> Option<&Car> {
        self.cars.iter().min_by(|a, b| a.y.total_cmp(&b.y))
    }

    /// Number of controlled cars that have crashed.
    pub fn damaged_count(&self) -> usize {
        self.cars.iter().filter(|car| car.is_damaged()).count()
    }

    /// Saves the best car's network.
    pub fn save_best_brain(&self, path: &str) -> Result<(), SimError> {
        match self.best_car().and_then(Car::brain) {
            Some(brain) => brain.save_to_file(path),
            None => {
                log::warn!("no network to save");
                Ok(())
            }
        }
    }
}
