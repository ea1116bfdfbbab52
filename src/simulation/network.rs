//! Feedforward network that turns sensor readings into control intents.
//!
//! Each level is fully connected with a binary step activation. Networks are
//! only evaluated here; many cars can share one through an `Arc`.

use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use serde::{Deserialize, Serialize};

use super::error::SimError;

/// A single fully connected level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Weight matrix (`output_size` × `input_size`).
    pub weights: Array2<f32>,
    /// Activation threshold per output (`output_size`).
    pub biases: Array1<f32>,
}

impl Level {
    /// Creates a level with weights and biases uniform in `[-1, 1]`.
    pub fn new_random(input_size: usize, output_size: usize) -> Self {
        Self {
            weights: Array2::random((output_size, input_size), Uniform::new(-1.0, 1.0)),
            biases: Array1::random(output_size, Uniform::new(-1.0, 1.0)),
        }
    }

    /// Fires output `j` (1.0) when the weighted input sum exceeds its bias, else 0.0.
    #[inline]
    pub fn feed_forward(&self, inputs: &Array1<f32>) -> Array1<f32> {
        let sums = self.weights.dot(inputs);
        ndarray::Zip::from(&sums)
            .and(&self.biases)
            .map_collect(|&sum, &bias| if sum > bias { 1.0 } else { 0.0 })
    }
}

/// Network made of consecutive levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Ordered levels from input to output.
    pub levels: Vec<Level>,
}

impl Network {
    /// Creates a network with random weights for the given layer sizes.
    ///
    /// `[5, 6, 4]` gives 5 inputs, one hidden level of 6 neurons and 4 outputs.
    pub fn new(layer_sizes: &[usize]) -> Self {
        let levels = layer_sizes
            .windows(2)
            .map(|pair| Level::new_random(pair[0], pair[1]))
            .collect();
        Self { levels }
    }

    /// Runs the inputs through every level.
    pub fn feed_forward(&self, inputs: &Array1<f32>) -> Array1<f32> {
        let mut outputs = inputs.clone();
        for level in &self.levels {
            outputs = level.feed_forward(&outputs);
        }
        outputs
    }

    /// Number of inputs the first level expects.
    pub fn input_size(&self) -> usize {
        self.levels.first().map_or(0, |level| level.weights.ncols())
    }

    /// Number of outputs the last level produces.
    pub fn output_size(&self) -> usize {
        self.levels.last().map_or(0, |level| level.weights.nrows())
    }

    /// Checks that every level's biases match its outputs and that each
    /// level takes as many inputs as the previous one produces.
    ///
    /// A network that fails this would panic on its first evaluation.
    pub fn validate(&self) -> Result<(), SimError> {
        let mut previous_outputs = self.input_size();
        for level in &self.levels {
            let expected = (previous_outputs, level.weights.nrows());
            let found = (level.weights.ncols(), level.biases.len());
            if expected != found {
                return Err(SimError::NetworkShape { expected, found });
            }
            previous_outputs = level.weights.nrows();
        }
        Ok(())
    }

    /// Saves the network as JSON.
    pub fn save_to_file(&self, path: &str) -> Result<(), SimError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("saved network to {}", path);
        Ok(())
    }

    /// Loads a network from JSON, rejecting levels that do not chain.
    pub fn load_from_file(path: &str) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path)?;
        let network: Self = serde_json::from_str(&json)?;
        network.validate()?;
        log::info!("loaded network from {}", path);
        Ok(network)
    }
}
