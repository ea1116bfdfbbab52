//! # Drivesim - Self-Driving Car Simulation
//!
//! A 2D car drives along a multi-lane road, perceives borders and traffic through a
//! fan of distance-sensing rays, and is steered either by keyboard input or by a small
//! feedforward neural network fed with those sensor readings.
//!
//! ## Features
//!
//! - Segment and polygon intersection tests
//! - Ray-fan sensor with nearest-touch readings
//! - Kinematic car model with friction, speed clamping and sticky damage
//! - Feedforward network brains shared across a population
//! - Road model with lanes and infinite borders
//! - Real-time visualization with macroquad
//! - Save/load of the best network as JSON
//!
//! ## Core Modules
//!
//! - [`simulation::geometry`] - Intersection utilities
//! - [`simulation::sensor`] - Ray casting against borders and traffic
//! - [`simulation::car`] - Car kinematics and damage
//! - [`simulation::network`] - Feedforward network evaluation
//! - [`simulation::world`] - Tick driver for traffic and a car population

/// Core simulation logic and data structures.
pub mod simulation {
    /// Car pose, kinematics, polygon silhouette and damage assessment.
    pub mod car;
    /// Steering/throttle intents and the sources that produce them.
    pub mod controls;
    /// Error type for configuration and persistence.
    pub mod error;
    /// Segment and polygon intersection utilities.
    pub mod geometry;
    /// Feedforward network mapping sensor readings to control intents.
    pub mod network;
    /// Trait for bodies other cars can collide with and sense.
    ///
    /// The [`obstacle::Obstacle`] trait is implemented by [`car::Car`] so traffic
    /// can be passed directly to sensor and damage tests.
    pub mod obstacle;
    /// Simulation parameters.
    pub mod params;
    /// Road with lanes and impassable borders.
    pub mod road;
    /// Ray-fan distance sensor.
    pub mod sensor;
    /// Per-tick driver for traffic and controlled cars.
    pub mod world;
}
