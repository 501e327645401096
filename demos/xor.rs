use sann::{train, Network, TrainConfig};

fn main() -> sann::Result<()> {
    let mut network = Network::new(&[2, 3, 1])?;

    let pairs = vec![
        (vec![1.0, 0.0], vec![1.0]),
        (vec![1.0, 1.0], vec![0.0]),
        (vec![0.0, 1.0], vec![1.0]),
        (vec![0.0, 0.0], vec![0.0]),
    ];

    let config = TrainConfig::new(10000, 0.5);
    train(&mut network, &pairs, &config, |stats| {
        if stats.epoch % 1000 == 0 {
            println!("Epoch {}: loss = {:.6}", stats.epoch, stats.mean_error);
        }
    })?;

    for (input, _) in &pairs {
        println!("Input: {:?} -> Output: {:.4}", input, network.forward(input)?[0]);
    }
    Ok(())
}
