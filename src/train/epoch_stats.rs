use serde::{Deserialize, Serialize};

/// Per-epoch statistics handed to the `train` progress hook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean squared error over the epoch's training pairs, measured on the
    /// forward pass that preceded each update.
    pub mean_error: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
