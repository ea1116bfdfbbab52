//! Steering and throttle intents.
//!
//! A car reads four intents every tick. Where they come from depends on the
//! control type: an external keyboard driver, a fixed forward throttle for
//! traffic, or the outputs of the car's own network.

use serde::{Deserialize, Serialize};

/// Output of a network counted as an active intent.
const OUTPUT_THRESHOLD: f32 = 0.5;

/// Source of a car's intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlType {
    /// Intents are set by an external input driver between ticks.
    Keys,
    /// Constant forward throttle, used for traffic.
    Dummy,
    /// Intents are taken from the car's network outputs.
    Ai,
}

/// The four intents consumed by the motion step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intents {
    /// Accelerate forward.
    pub forward: bool,
    /// Steer left.
    pub left: bool,
    /// Steer right.
    pub right: bool,
    /// Accelerate in reverse.
    pub reverse: bool,
}

/// Current intents of a car together with their source.
#[derive(Debug, Clone)]
pub struct Controls {
    kind: ControlType,
    intents: Intents,
}

impl Controls {
    /// Creates controls of the given type. Dummy controls hold forward throttle.
    pub fn new(kind: ControlType) -> Self {
        let intents = Intents {
            forward: kind == ControlType::Dummy,
            ..Intents::default()
        };
        Self { kind, intents }
    }

    /// Returns the source of these controls.
    pub fn kind(&self) -> ControlType {
        self.kind
    }

    /// Returns the intents for the coming motion step.
    pub fn intents(&self) -> Intents {
        self.intents
    }

    /// Overwrites the intents, as done by a keyboard driver.
    pub fn set_intents(&mut self, intents: Intents) {
        self.intents = intents;
    }

    /// Whether network outputs steer this car.
    pub fn is_network_driven(&self) -> bool {
        self.kind == ControlType::Ai
    }

    /// Assigns network outputs in the order forward, left, right, reverse.
    ///
    /// Ignored unless the controls are network driven. Missing outputs read as inactive.
    pub fn apply_network_outputs(&mut self, outputs: &[f32]) {
        if !self.is_network_driven() {
            return;
        }
        let active = |i: usize| outputs.get(i).is_some_and(|&v| v > OUTPUT_THRESHOLD);
        self.intents = Intents {
            forward: active(0),
            left: active(1),
            right: active(2),
            reverse: active(3),
        };
    }
}
