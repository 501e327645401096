pub mod activation;
pub mod error;
pub mod evolve;
pub mod layers;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::{dot_product, sigmoid, threshold_logic_unit};
pub use error::{Error, Result};
pub use evolve::{crossover, evolve, roulette_wheel_select, EvolveConfig, EvolveOutcome, PlateauHalt, RankOrder, Scenario};
pub use layers::{Layer, Node};
pub use network::{Network, Topology};
pub use optim::Sgd;
pub use train::{backpropagate, train, EpochStats, TrainConfig};
