use rand::Rng;

use crate::{
    error::{Error, Result},
    layers::Node,
    network::Network,
};

/// Two-point crossover over the parents' nodes, flattened layer by layer.
///
/// Draws `split1` from `[0, n - 2]` and `split2` from `[split1 + 1, n - 1]`.
/// Child A takes `[0, split1)` and `[split2, n)` from `parent_a` and the middle
/// segment from `parent_b`; child B is the mirror image. Children own fresh
/// copies of every node and start without a fitness.
///
/// The parents must share the whole topology, input width included. Equal
/// node counts are not enough: a first-layer node's weight count is the input
/// width, so swapping nodes between parents with different input widths would
/// build children whose layers do not fit their topology.
pub fn crossover<R>(parent_a: &Network, parent_b: &Network, rng: &mut R) -> Result<(Network, Network)>
where
    R: Rng + ?Sized,
{
    if parent_a.topology != parent_b.topology {
        return Err(Error::InvalidCrossover(format!(
            "parents have different topologies: {:?} and {:?}",
            parent_a.topology.as_slice(),
            parent_b.topology.as_slice()
        )));
    }

    let flat_a: Vec<&Node> = parent_a.nodes().collect();
    let flat_b: Vec<&Node> = parent_b.nodes().collect();
    let n = flat_a.len();
    if n < 2 || flat_b.len() != n {
        return Err(Error::InvalidCrossover(format!(
            "need at least two nodes per parent, got {} and {}",
            n,
            flat_b.len()
        )));
    }

    let split1 = rng.gen_range(0..=n - 2);
    let split2 = rng.gen_range(split1 + 1..=n - 1);

    let splice = |outer: &[&Node], inner: &[&Node]| -> Vec<Node> {
        outer[..split1].iter()
            .chain(&inner[split1..split2])
            .chain(&outer[split2..])
            .map(|node| node.detached())
            .collect()
    };

    let child_a = Network::from_nodes(parent_a.topology.clone(), splice(&flat_a, &flat_b));
    let child_b = Network::from_nodes(parent_b.topology.clone(), splice(&flat_b, &flat_a));
    Ok((child_a, child_b))
}
