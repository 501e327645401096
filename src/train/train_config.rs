/// Configuration for a `train` run.
///
/// # Fields
/// - `epochs`        — total number of full passes over the training pairs
/// - `learning_rate` — step size applied to every weight and bias update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
}

impl TrainConfig {
    pub const DEFAULT_EPOCHS: usize = 1000;
    pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig { epochs, learning_rate }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(Self::DEFAULT_EPOCHS, Self::DEFAULT_LEARNING_RATE)
    }
}
