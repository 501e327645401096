use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    layers::{Layer, Node},
    network::topology::Topology,
};

/// A fully connected feed-forward network.
///
/// Serializes to `{"topology": [...], "fitness": ..., "layers": [[{"weights", "bias"}]]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub topology: Topology,
    /// Score assigned by an evaluator; `None` until first evaluated.
    pub fitness: Option<f64>,
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network with weights and biases drawn from `[-1, 1]`.
    pub fn new(topology: &[usize]) -> Result<Network> {
        Network::random(topology, &mut rand::thread_rng())
    }

    /// Like [`Network::new`] but draws from the given generator.
    pub fn random<R: Rng + ?Sized>(topology: &[usize], rng: &mut R) -> Result<Network> {
        let topology = Topology::try_from(topology)?;
        let layers = topology.as_slice().windows(2)
            .map(|pair| Layer::random(pair[1], pair[0], rng))
            .collect();
        Ok(Network { topology, fitness: None, layers })
    }

    /// Builds a network from explicit layers, checking them against `topology`.
    pub fn from_layers(topology: &[usize], layers: Vec<Layer>) -> Result<Network> {
        let network = Network {
            topology: Topology::try_from(topology)?,
            fitness: None,
            layers,
        };
        network.validate()?;
        Ok(network)
    }

    /// Regroups a flat node sequence into layers shaped by `topology`.
    ///
    /// Callers guarantee `nodes.len() == topology.node_count()`.
    pub(crate) fn from_nodes(topology: Topology, nodes: Vec<Node>) -> Network {
        let mut nodes = nodes.into_iter();
        let layers = topology.layer_sizes().iter()
            .map(|&size| Layer::new(nodes.by_ref().take(size).collect()))
            .collect();
        Network { topology, fitness: None, layers }
    }

    /// Checks that layer, node and weight counts agree with the topology.
    pub fn validate(&self) -> Result<()> {
        let sizes = self.topology.as_slice();
        if self.layers.len() != self.topology.layer_count() {
            return Err(Error::InvalidTopology(format!(
                "topology declares {} layer(s) but network has {}",
                self.topology.layer_count(),
                self.layers.len()
            )));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.len() != sizes[i + 1] {
                return Err(Error::InvalidTopology(format!(
                    "layer {i} should have {} node(s), has {}",
                    sizes[i + 1],
                    layer.len()
                )));
            }
            if let Some(node) = layer.nodes.iter().find(|node| node.weights.len() != sizes[i]) {
                return Err(Error::InvalidTopology(format!(
                    "node in layer {i} should have {} weight(s), has {}",
                    sizes[i],
                    node.weights.len()
                )));
            }
        }
        Ok(())
    }

    /// Forward pass; caches every node's output for backpropagation.
    ///
    /// The input width is checked before any node is touched.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        let expected = self.topology.input_size();
        if inputs.len() != expected {
            return Err(Error::ShapeMismatch {
                what: "inputs",
                expected,
                actual: inputs.len(),
            });
        }
        let mut current = inputs.to_vec();
        for layer in &mut self.layers {
            current = layer.feed_from(&current);
        }
        Ok(current)
    }

    /// Drops every cached output, leaving only weights and biases.
    pub fn clean(&mut self) -> &mut Network {
        for node in self.layers.iter_mut().flat_map(|layer| layer.nodes.iter_mut()) {
            node.last_output = None;
        }
        self
    }

    /// All nodes, layer by layer.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.layers.iter().flat_map(|layer| layer.nodes.iter())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Network> {
        let network: Network = serde_json::from_str(json)?;
        network.validate()?;
        Ok(network)
    }

    /// Serializes the network to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Network> {
        let reader = BufReader::new(File::open(path)?);
        let network: Network = serde_json::from_reader(reader)?;
        network.validate()?;
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded(topology: &[usize]) -> Network {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        Network::random(topology, &mut rng).unwrap()
    }

    #[test]
    fn create_matches_topology() {
        for topology in [vec![1, 1], vec![3, 2], vec![3, 5, 2], vec![4, 8, 8, 1]] {
            let network = seeded(&topology);
            assert_eq!(network.layers.len(), topology.len() - 1);
            for (i, layer) in network.layers.iter().enumerate() {
                assert_eq!(layer.len(), topology[i + 1]);
                assert!(layer.nodes.iter().all(|node| node.weights.len() == topology[i]));
            }
            assert_eq!(network.fitness, None);
            assert!(network.nodes().all(|node| node.last_output.is_none()));
        }
    }

    #[test]
    fn create_rejects_short_topology() {
        assert!(matches!(Network::new(&[]), Err(Error::InvalidTopology(_))));
        assert!(matches!(Network::new(&[4]), Err(Error::InvalidTopology(_))));
    }

    #[test]
    fn seeded_networks_are_reproducible() {
        assert_eq!(seeded(&[3, 5, 2]), seeded(&[3, 5, 2]));
    }

    #[test]
    fn forward_outputs_are_probabilities() {
        let mut network = seeded(&[3, 5, 2]);
        for inputs in [[0.5, 0.2, 0.8], [0.0, 0.0, 0.0], [-1.0, 1.0, -1.0]] {
            let out = network.forward(&inputs).unwrap();
            assert_eq!(out.len(), 2);
            assert!(out.iter().all(|&v| v > 0.0 && v < 1.0));
        }
    }

    #[test]
    fn forward_stays_below_one_for_large_inputs() {
        let layers = vec![Layer::new(vec![Node::new(vec![1.0, 1.0], 0.0)])];
        let mut network = Network::from_layers(&[2, 1], layers).unwrap();
        for inputs in [[20.0, 20.0], [1.0e3, 1.0e3], [-1.0e3, -1.0e3]] {
            let out = network.forward(&inputs).unwrap()[0];
            assert!(out > 0.0 && out < 1.0, "forward({inputs:?}) = {out}");
        }
    }

    #[test]
    fn forward_cache_tracks_latest_call() {
        let mut network = seeded(&[2, 3, 1]);
        network.forward(&[1.0, 0.0]).unwrap();
        let first: Vec<_> = network.nodes().map(|node| node.last_output).collect();
        let out = network.forward(&[0.0, 1.0]).unwrap();
        let second: Vec<_> = network.nodes().map(|node| node.last_output).collect();
        assert!(second.iter().all(Option::is_some));
        assert_ne!(first, second);
        assert_eq!(second.last().copied().flatten(), Some(out[0]));
    }

    #[test]
    fn forward_rejects_wrong_width_without_touching_cache() {
        let mut network = seeded(&[3, 2]);
        let err = network.forward(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { expected: 3, actual: 2, .. }));
        assert!(network.nodes().all(|node| node.last_output.is_none()));
    }

    #[test]
    fn zero_network_outputs_half() {
        let layers = vec![Layer::new(vec![Node::new(vec![0.0, 0.0], 0.0)])];
        let mut network = Network::from_layers(&[2, 1], layers).unwrap();
        assert_eq!(network.forward(&[3.0, -7.0]).unwrap(), vec![0.5]);
    }

    #[test]
    fn clean_is_idempotent() {
        let mut network = seeded(&[3, 5, 2]);
        network.forward(&[0.1, 0.2, 0.3]).unwrap();
        let once = network.clean().clone();
        assert!(once.nodes().all(|node| node.last_output.is_none()));
        let twice = network.clean().clone();
        assert_eq!(once, twice);
    }

    #[test]
    fn json_has_expected_shape() {
        let layers = vec![Layer::new(vec![Node::new(vec![0.5, -0.25], 0.125)])];
        let mut network = Network::from_layers(&[2, 1], layers).unwrap();
        network.forward(&[1.0, 1.0]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&network.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "topology": [2, 1],
                "fitness": null,
                "layers": [[{"weights": [0.5, -0.25], "bias": 0.125}]]
            })
        );
    }

    #[test]
    fn json_round_trip_keeps_weights() {
        let mut network = seeded(&[3, 4, 2]);
        network.fitness = Some(12.5);
        let restored = Network::from_json(&network.to_json().unwrap()).unwrap();
        assert_eq!(restored, network);
    }

    #[test]
    fn from_json_rejects_inconsistent_shapes() {
        let json = r#"{"topology": [2, 1], "fitness": null, "layers": [[{"weights": [1.0], "bias": 0.0}]]}"#;
        assert!(matches!(Network::from_json(json), Err(Error::InvalidTopology(_))));
        let json = r#"{"topology": [2], "fitness": null, "layers": []}"#;
        assert!(matches!(Network::from_json(json), Err(Error::Json(_))));
        let json = r#"{"topology": [], "fitness": null, "layers": []}"#;
        assert!(serde_json::from_str::<Network>(json).is_err());
    }

    #[test]
    fn save_and_load() {
        let network = seeded(&[2, 2, 1]);
        let path = std::env::temp_dir().join(format!("sann-{}.json", std::process::id()));
        network.save_json(&path).unwrap();
        let loaded = Network::load_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, network);
    }
}
