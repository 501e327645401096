use std::time::Instant;

use log::{debug, info};

use crate::{
    error::{Error, Result},
    loss::MseLoss,
    network::Network,
    optim::Sgd,
    train::{epoch_stats::EpochStats, train_config::TrainConfig},
};

/// One supervised update of every weight and bias in `network`.
///
/// Runs a forward pass over `inputs`, then walks the layers from output to
/// input. Each layer's gradients are `o * (1 - o) * error`; the error handed
/// to the previous layer is computed from those gradients and the weights as
/// they were before this layer's update.
///
/// Fails with `ShapeMismatch` before touching the network if either vector
/// has the wrong width.
pub fn backpropagate<'a>(
    network: &'a mut Network,
    inputs: &[f64],
    expected_outputs: &[f64],
    learning_rate: f64,
) -> Result<&'a mut Network> {
    check_pair(network, inputs, expected_outputs)?;
    backward(network, inputs, expected_outputs, &Sgd::new(learning_rate))?;
    Ok(network)
}

/// Trains `network` on `training_pairs` for `config.epochs` epochs, in order.
///
/// `on_progress` receives one [`EpochStats`] per completed epoch; it only
/// observes. All pairs are shape-checked before the first update.
pub fn train<'a, F>(
    network: &'a mut Network,
    training_pairs: &[(Vec<f64>, Vec<f64>)],
    config: &TrainConfig,
    mut on_progress: F,
) -> Result<&'a mut Network>
where
    F: FnMut(&EpochStats),
{
    for (inputs, expected) in training_pairs {
        check_pair(network, inputs, expected)?;
    }

    info!(
        "training on {} pair(s) for {} epoch(s), learning rate {}",
        training_pairs.len(),
        config.epochs,
        config.learning_rate
    );

    let optimizer = Sgd::new(config.learning_rate);
    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let mut total_error = 0.0;
        for (inputs, expected) in training_pairs {
            total_error += backward(network, inputs, expected, &optimizer)?;
        }
        let mean_error = if training_pairs.is_empty() {
            0.0
        } else {
            total_error / training_pairs.len() as f64
        };

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            mean_error,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        debug!("epoch {}/{}: mean error {:.6}", stats.epoch, stats.total_epochs, stats.mean_error);
        on_progress(&stats);
    }

    info!("training complete");
    Ok(network)
}

fn check_pair(network: &Network, inputs: &[f64], expected: &[f64]) -> Result<()> {
    let input_size = network.topology.input_size();
    if inputs.len() != input_size {
        return Err(Error::ShapeMismatch {
            what: "inputs",
            expected: input_size,
            actual: inputs.len(),
        });
    }
    let output_size = network.topology.output_size();
    if expected.len() != output_size {
        return Err(Error::ShapeMismatch {
            what: "expected outputs",
            expected: output_size,
            actual: expected.len(),
        });
    }
    Ok(())
}

/// Forward pass plus backward pass. Returns the pre-update squared error.
fn backward(
    network: &mut Network,
    inputs: &[f64],
    expected: &[f64],
    optimizer: &Sgd,
) -> Result<f64> {
    let output = network.forward(inputs)?;
    let loss = MseLoss::loss(&output, expected);
    let mut errors = MseLoss::error(&output, expected);

    for i in (0..network.layers.len()).rev() {
        let layer_inputs = if i == 0 {
            inputs.to_vec()
        } else {
            network.layers[i - 1].outputs()
        };

        // Ordering: compute gradients → propagate errors → apply step
        let gradients = network.layers[i].compute_gradients(&errors);
        if i > 0 {
            errors = network.layers[i].propagate_errors(&gradients, layer_inputs.len());
        }
        optimizer.step(&mut network.layers[i], &gradients, &layer_inputs);
    }

    Ok(loss)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{Layer, Node};
    use approx::assert_abs_diff_eq;

    fn chain() -> Network {
        Network::from_layers(
            &[1, 1, 1],
            vec![
                Layer::new(vec![Node::new(vec![0.5], 0.1)]),
                Layer::new(vec![Node::new(vec![-0.4], 0.2)]),
            ],
        )
        .unwrap()
    }

    fn small() -> Network {
        Network::from_layers(
            &[3, 5, 2],
            vec![
                Layer::new(vec![
                    Node::new(vec![0.1, -0.2, 0.3], -0.1),
                    Node::new(vec![-0.2, -0.15, 0.2], -0.05),
                    Node::new(vec![0.3, -0.1, 0.1], 0.0),
                    Node::new(vec![-0.4, -0.05, 0.0], 0.05),
                    Node::new(vec![0.5, 0.0, -0.1], 0.1),
                ]),
                Layer::new(vec![
                    Node::new(vec![0.2, -0.1, 0.15, -0.25, 0.05], 0.1),
                    Node::new(vec![-0.3, 0.2, 0.1, 0.05, -0.15], -0.05),
                ]),
            ],
        )
        .unwrap()
    }

    fn distance(a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt()
    }

    #[test]
    fn propagates_error_through_pre_update_weights() {
        let mut network = chain();
        backpropagate(&mut network, &[1.0], &[1.0], 0.1).unwrap();

        let hidden = &network.layers[0].nodes[0];
        let output = &network.layers[1].nodes[0];
        assert_abs_diff_eq!(output.weights[0], -0.38999709289406825, epsilon = 1e-12);
        assert_abs_diff_eq!(output.bias, 0.2144975029940009, epsilon = 1e-12);
        assert_abs_diff_eq!(hidden.weights[0], 0.4987595374137005, epsilon = 1e-12);
        assert_abs_diff_eq!(hidden.bias, 0.09875953741370048, epsilon = 1e-12);
    }

    #[test]
    fn one_step_moves_output_towards_target() {
        let mut network = small();
        let before_weights = network.clone();
        let inputs = [0.5, 0.2, 0.8];
        let expected = [1.0, 0.0];

        let before = distance(&network.forward(&inputs).unwrap(), &expected);
        backpropagate(&mut network, &inputs, &expected, 0.1).unwrap();
        let after = distance(&network.forward(&inputs).unwrap(), &expected);

        assert!(after < before, "{after} !< {before}");
        assert_ne!(network.clean().clone(), before_weights);
    }

    #[test]
    fn rejects_wrong_target_width_without_updating() {
        let mut network = small();
        let original = network.clone();
        let err = backpropagate(&mut network, &[0.5, 0.2, 0.8], &[1.0], 0.1).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { expected: 2, actual: 1, .. }));
        assert_eq!(network, original);
    }

    #[test]
    fn rejects_wrong_input_width_without_updating() {
        let mut network = small();
        let original = network.clone();
        let err = backpropagate(&mut network, &[0.5], &[1.0, 0.0], 0.1).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { expected: 3, actual: 1, .. }));
        assert_eq!(network, original);
    }

    #[test]
    fn train_reports_every_epoch_in_order() {
        let mut network = small();
        let pairs = vec![(vec![0.5, 0.2, 0.8], vec![1.0, 0.0])];
        let mut seen = Vec::new();
        train(&mut network, &pairs, &TrainConfig::new(5, 0.1), |stats| {
            seen.push((stats.epoch, stats.total_epochs))
        })
        .unwrap();
        assert_eq!(seen, vec![(1, 5), (2, 5), (3, 5), (4, 5), (5, 5)]);
    }

    #[test]
    fn train_error_decreases() {
        let mut network = small();
        let pairs = vec![(vec![0.5, 0.2, 0.8], vec![1.0, 0.0])];
        let mut errors = Vec::new();
        train(&mut network, &pairs, &TrainConfig::new(200, 0.1), |stats| {
            errors.push(stats.mean_error)
        })
        .unwrap();
        assert!(errors[errors.len() - 1] < errors[0]);
    }

    #[test]
    fn train_checks_every_pair_up_front() {
        let mut network = small();
        let original = network.clone();
        let pairs = vec![
            (vec![0.5, 0.2, 0.8], vec![1.0, 0.0]),
            (vec![0.5, 0.2], vec![1.0, 0.0]),
        ];
        let result = train(&mut network, &pairs, &TrainConfig::default(), |_| {});
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
        assert_eq!(network, original);
    }

    #[test]
    fn default_config() {
        let config = TrainConfig::default();
        assert_eq!(config.epochs, 1000);
        assert_eq!(config.learning_rate, 0.1);
    }
}
