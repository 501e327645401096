use log::{debug, info};
use rand::Rng;

use crate::{
    error::{Error, Result},
    evolve::evolve_config::{EvolveConfig, RankOrder},
    network::Network,
};

/// The caller's side of an evolution run.
///
/// The engine owns the loop; the scenario scores networks, breeds the next
/// generation and decides when to stop. All calls are synchronous and a
/// scenario is responsible for bounding its own runtime.
pub trait Scenario {
    /// Scores `network`. The whole population being ranked is visible, so
    /// networks can be scored against their siblings.
    fn fitness(&mut self, network: &Network, population: &[Network]) -> f64;

    /// Breeds the next generation from a ranked population. Must return
    /// exactly `population_size` networks.
    fn generate(&mut self, ranked: &[Network]) -> Result<Vec<Network>>;

    /// Called after every ranking. `generation` is 0 for the seed population.
    fn halt(&mut self, ranked: &[Network], generation: usize) -> bool;

    /// Observes every ranked generation, including the seed population.
    fn on_generation(&mut self, _ranked: &[Network], _generation: usize) {}
}

/// Result of an `evolve` run.
#[derive(Debug, Clone)]
pub struct EvolveOutcome {
    /// Final population, fittest first.
    pub population: Vec<Network>,
    /// Number of generations bred after the seed population.
    pub generations: usize,
}

impl EvolveOutcome {
    pub fn fittest(&self) -> Option<&Network> {
        self.population.first()
    }
}

/// Scores every network, stores the score in `fitness`, then sorts fittest
/// first. The sort is stable, so equal scores keep their input order. NaN
/// scores sort last whatever the order.
pub fn rank<S>(mut population: Vec<Network>, scenario: &mut S, order: RankOrder) -> Vec<Network>
where
    S: Scenario + ?Sized,
{
    let scores: Vec<f64> = population.iter()
        .map(|network| scenario.fitness(network, &population))
        .collect();
    for (network, score) in population.iter_mut().zip(scores) {
        network.fitness = Some(score);
    }
    population.sort_by(|a, b| {
        order.compare(a.fitness.unwrap_or(f64::NAN), b.fitness.unwrap_or(f64::NAN))
    });
    population
}

/// Runs the genetic algorithm until `scenario.halt` returns `true`.
///
/// Seeds `config.population_size` random networks, ranks them, then loops:
/// halt check → generate → rank. Returns the last ranked population.
pub fn evolve<S, R>(config: &EvolveConfig, scenario: &mut S, rng: &mut R) -> Result<EvolveOutcome>
where
    S: Scenario + ?Sized,
    R: Rng + ?Sized,
{
    if config.population_size == 0 {
        return Err(Error::EmptyPopulation);
    }

    info!(
        "evolving {} network(s) with topology {:?}",
        config.population_size, config.topology
    );

    let seed = (0..config.population_size)
        .map(|_| Network::random(&config.topology, rng))
        .collect::<Result<Vec<_>>>()?;

    let mut population = rank(seed, scenario, config.order);
    let mut generation = 0;
    log_generation(&population, generation);
    scenario.on_generation(&population, generation);

    while !scenario.halt(&population, generation) {
        generation += 1;
        let next = scenario.generate(&population)?;
        if next.len() != config.population_size {
            return Err(Error::PopulationSize {
                expected: config.population_size,
                actual: next.len(),
            });
        }
        population = rank(next, scenario, config.order);
        log_generation(&population, generation);
        scenario.on_generation(&population, generation);
    }

    info!("evolution halted after {generation} generation(s)");
    Ok(EvolveOutcome { population, generations: generation })
}

fn log_generation(ranked: &[Network], generation: usize) {
    if let Some(best) = ranked.first().and_then(|network| network.fitness) {
        debug!("generation {generation}: best fitness {best}");
    }
}
