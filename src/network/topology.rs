use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Node count per layer, input layer first.
///
/// The input layer is implicit: it has no nodes of its own and only fixes the
/// width of the vectors fed to the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Topology(Vec<usize>);

impl Topology {
    /// Fails with `InvalidTopology` for fewer than two layers or any empty layer.
    pub fn new(sizes: Vec<usize>) -> Result<Topology> {
        if sizes.len() < 2 {
            return Err(Error::InvalidTopology(format!(
                "need at least an input and an output layer, got {} layer(s)",
                sizes.len()
            )));
        }
        if let Some(i) = sizes.iter().position(|&size| size == 0) {
            return Err(Error::InvalidTopology(format!("layer {i} has no nodes")));
        }
        Ok(Topology(sizes))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn input_size(&self) -> usize {
        self.0[0]
    }

    pub fn output_size(&self) -> usize {
        self.0[self.0.len() - 1]
    }

    /// Sizes of the node-bearing layers, i.e. everything after the input.
    pub fn layer_sizes(&self) -> &[usize] {
        &self.0[1..]
    }

    /// Number of node-bearing layers.
    pub fn layer_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Total number of nodes across all node-bearing layers.
    pub fn node_count(&self) -> usize {
        self.layer_sizes().iter().sum()
    }
}

impl TryFrom<Vec<usize>> for Topology {
    type Error = Error;

    fn try_from(sizes: Vec<usize>) -> Result<Topology> {
        Topology::new(sizes)
    }
}

impl From<Topology> for Vec<usize> {
    fn from(topology: Topology) -> Vec<usize> {
        topology.0
    }
}

impl TryFrom<&[usize]> for Topology {
    type Error = Error;

    fn try_from(sizes: &[usize]) -> Result<Topology> {
        Topology::new(sizes.to_vec())
    }
}
