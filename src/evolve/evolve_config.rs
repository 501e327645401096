use std::cmp::Ordering;

/// Which end of the fitness scale is "fittest".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankOrder {
    /// Highest fitness first.
    #[default]
    Descending,
    /// Lowest fitness first.
    Ascending,
}

impl RankOrder {
    /// Orders two scores so that the fitter one sorts first.
    ///
    /// NaN is the least fit score in either direction and always sorts last.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => match self {
                RankOrder::Descending => b.total_cmp(&a),
                RankOrder::Ascending => a.total_cmp(&b),
            },
        }
    }

    /// Whether `candidate` is strictly fitter than `incumbent`. A NaN
    /// candidate never is.
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        self.compare(candidate, incumbent) == Ordering::Less
    }
}

/// Configuration for an `evolve` run.
///
/// # Fields
/// - `topology`        — layer sizes of every network in the population
/// - `population_size` — networks per generation; `generate` must return
///                       exactly this many
/// - `order`           — ranking direction, applied to every generation
#[derive(Debug, Clone, PartialEq)]
pub struct EvolveConfig {
    pub topology: Vec<usize>,
    pub population_size: usize,
    pub order: RankOrder,
}

impl EvolveConfig {
    /// Creates a config that ranks the highest fitness first.
    pub fn new(topology: Vec<usize>, population_size: usize) -> Self {
        EvolveConfig {
            topology,
            population_size,
            order: RankOrder::Descending,
        }
    }

    pub fn with_order(mut self, order: RankOrder) -> Self {
        self.order = order;
        self
    }
}
