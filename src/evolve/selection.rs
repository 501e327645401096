use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    error::{Error, Result},
    network::Network,
};

/// Fitness-proportionate ("roulette wheel") selection.
///
/// Only networks with a fitness contribute to the wheel. When the total
/// fitness is not a positive finite number every network is equally likely,
/// scored or not.
pub fn roulette_wheel_select<'a, R>(population: &'a [Network], rng: &mut R) -> Result<&'a Network>
where
    R: Rng + ?Sized,
{
    let total_fitness: f64 = population.iter().filter_map(|network| network.fitness).sum();

    if !total_fitness.is_finite() || total_fitness <= 0.0 {
        debug!("total fitness is {total_fitness}, selecting uniformly");
        return population.choose(rng).ok_or(Error::EmptyPopulation);
    }

    let point = rng.gen_range(0.0..=total_fitness);
    let mut tally = 0.0;
    let mut last_scored = None;
    for network in population {
        if let Some(fitness) = network.fitness {
            tally += fitness;
            if fitness > 0.0 {
                last_scored = Some(network);
            }
        }
        if tally > point {
            return Ok(network);
        }
    }

    // The draw landed exactly on the total.
    last_scored.ok_or(Error::EmptyPopulation)
}
