pub mod crossover;
pub mod engine;
pub mod evolve_config;
pub mod halt;
pub mod selection;

pub use crossover::crossover;
pub use engine::{evolve, rank, EvolveOutcome, Scenario};
pub use evolve_config::{EvolveConfig, RankOrder};
pub use halt::PlateauHalt;
pub use selection::roulette_wheel_select;
