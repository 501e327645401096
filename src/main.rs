// The binary is a thin demo; all network logic lives in the library.
// Run the other demos with:
//   cargo run --example xor
//   cargo run --example evolve
use sann::{train, Network, TrainConfig};

fn main() -> sann::Result<()> {
    let mut network = Network::new(&[2, 2, 1])?;
    let pairs = vec![
        (vec![0.0, 0.0], vec![0.0]),
        (vec![1.0, 1.0], vec![1.0]),
    ];

    let before = network.forward(&[1.0, 1.0])?[0];
    train(&mut network, &pairs, &TrainConfig::new(500, 0.1), |stats| {
        if stats.epoch % 100 == 0 {
            println!("Epoch {}: mean error = {:.6}", stats.epoch, stats.mean_error);
        }
    })?;
    let after = network.forward(&[1.0, 1.0])?[0];

    println!("Output for [1, 1]: {before:.4} -> {after:.4}");
    println!("{}", network.clean().to_json()?);
    Ok(())
}
