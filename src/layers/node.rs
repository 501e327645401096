use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::{dot_product, sigmoid, DEFAULT_SHAPE};

/// A single computational unit in a non-input layer.
///
/// `last_output` is a cache written by the forward pass and read by
/// backpropagation. It is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// One weight per output of the preceding layer.
    pub weights: Vec<f64>,
    /// Used as the sigmoid threshold.
    pub bias: f64,
    #[serde(skip)]
    pub last_output: Option<f64>,
}

impl Node {
    pub fn new(weights: Vec<f64>, bias: f64) -> Node {
        Node { weights, bias, last_output: None }
    }

    /// Weights and bias sampled uniformly from `[-1, 1]`.
    pub fn random<R: Rng + ?Sized>(input_size: usize, rng: &mut R) -> Node {
        let weights = (0..input_size).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        let bias = rng.gen_range(-1.0..=1.0);
        Node::new(weights, bias)
    }

    /// Computes the node's output for `inputs` and caches it.
    pub fn activate(&mut self, inputs: &[f64]) -> f64 {
        let activation = dot_product(inputs.iter().copied().zip(self.weights.iter().copied()));
        let output = sigmoid(activation, self.bias, DEFAULT_SHAPE);
        self.last_output = Some(output);
        output
    }

    /// Copy of the weights and bias with no cached output.
    pub fn detached(&self) -> Node {
        Node::new(self.weights.clone(), self.bias)
    }
}
