use log::debug;

use crate::{evolve::evolve_config::RankOrder, network::Network};

/// Halt policy that stops on a generation cap, a target fitness, or a plateau.
///
/// Keeps its own record of the best fitness seen, so one value should be used
/// per evolution run. Call [`PlateauHalt::check`] from `Scenario::halt`.
#[derive(Debug, Clone)]
pub struct PlateauHalt {
    /// Halt once the generation count exceeds this.
    pub max_generations: usize,
    /// Halt once the best fitness has not improved for more than this many
    /// consecutive generations.
    pub plateau: usize,
    /// Halt as soon as the best fitness reaches this value.
    pub target: Option<f64>,
    pub order: RankOrder,
    best: Option<f64>,
    stale: usize,
}

impl PlateauHalt {
    pub fn new(max_generations: usize, plateau: usize) -> Self {
        PlateauHalt {
            max_generations,
            plateau,
            target: None,
            order: RankOrder::Descending,
            best: None,
            stale: 0,
        }
    }

    pub fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_order(mut self, order: RankOrder) -> Self {
        self.order = order;
        self
    }

    /// Best fitness seen so far.
    pub fn best(&self) -> Option<f64> {
        self.best
    }

    /// Generations since the best fitness last improved.
    pub fn stale_generations(&self) -> usize {
        self.stale
    }

    pub fn check(&mut self, ranked: &[Network], generation: usize) -> bool {
        if generation > self.max_generations {
            debug!("halting: generation {generation} exceeds {}", self.max_generations);
            return true;
        }

        let leader = ranked.first()
            .and_then(|network| network.fitness)
            .filter(|fitness| !fitness.is_nan());
        let improved = match (leader, self.best) {
            (Some(candidate), Some(best)) => self.order.is_better(candidate, best),
            (Some(_), None) => true,
            (None, _) => false,
        };

        if improved {
            self.best = leader;
            self.stale = 0;
            if let (Some(best), Some(target)) = (self.best, self.target) {
                if !self.order.is_better(target, best) {
                    debug!("halting: best fitness {best} reached target {target}");
                    return true;
                }
            }
            return false;
        }

        self.stale += 1;
        if self.stale > self.plateau {
            debug!("halting: no improvement for {} generation(s)", self.stale);
            return true;
        }
        false
    }
}
