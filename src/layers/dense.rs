use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::layers::node::Node;

/// A fully connected layer: every node sees every output of the previous layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layer {
    pub nodes: Vec<Node>,
}

impl Layer {
    pub fn new(nodes: Vec<Node>) -> Layer {
        Layer { nodes }
    }

    pub fn random<R: Rng + ?Sized>(size: usize, input_size: usize, rng: &mut R) -> Layer {
        let nodes = (0..size).map(|_| Node::random(input_size, rng)).collect();
        Layer { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Feeds `input` through every node, caching each node's output.
    pub fn feed_from(&mut self, input: &[f64]) -> Vec<f64> {
        self.nodes.iter_mut().map(|node| node.activate(input)).collect()
    }

    /// Outputs cached by the most recent forward pass.
    ///
    /// Only meaningful after [`Layer::feed_from`]; debug builds panic if a
    /// node has no cached output.
    pub fn outputs(&self) -> Vec<f64> {
        self.nodes.iter().map(cached_output).collect()
    }

    /// Per-node gradient `o * (1 - o) * error` from the cached outputs.
    ///
    /// Same precondition as [`Layer::outputs`].
    pub fn compute_gradients(&self, errors: &[f64]) -> Vec<f64> {
        self.nodes.iter().zip(errors)
            .map(|(node, error)| {
                let output = cached_output(node);
                output * (1.0 - output) * error
            })
            .collect()
    }

    /// Error for each input of this layer: `sum_j gradient_j * weight[j][p]`.
    ///
    /// Must be called before the weights are updated.
    pub fn propagate_errors(&self, gradients: &[f64], input_size: usize) -> Vec<f64> {
        (0..input_size)
            .map(|p| {
                self.nodes.iter().zip(gradients)
                    .map(|(node, gradient)| gradient * node.weights[p])
                    .sum::<f64>()
            })
            .collect()
    }

    /// Applies pre-computed gradients scaled by `lr`.
    pub fn apply_gradients(&mut self, gradients: &[f64], inputs: &[f64], lr: f64) {
        for (node, gradient) in self.nodes.iter_mut().zip(gradients) {
            for (weight, input) in node.weights.iter_mut().zip(inputs) {
                *weight += lr * gradient * input;
            }
            node.bias += lr * gradient;
        }
    }
}

fn cached_output(node: &Node) -> f64 {
    debug_assert!(node.last_output.is_some(), "node output read before a forward pass");
    node.last_output.unwrap_or(0.0)
}
