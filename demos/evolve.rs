//! Evolves XOR networks with roulette-wheel selection and two-point crossover.
use rand::rngs::ThreadRng;
use rand::Rng;
use sann::{crossover, evolve, roulette_wheel_select, EvolveConfig, Network, PlateauHalt, Scenario};

const TOPOLOGY: [usize; 3] = [2, 3, 1];
const POPULATION: usize = 60;
const ELITES: usize = 2;

const CASES: [([f64; 2], f64); 4] = [
    ([0.0, 0.0], 0.0),
    ([0.0, 1.0], 1.0),
    ([1.0, 0.0], 1.0),
    ([1.0, 1.0], 0.0),
];

struct Xor {
    rng: ThreadRng,
    halt: PlateauHalt,
}

impl Scenario for Xor {
    fn fitness(&mut self, network: &Network, _population: &[Network]) -> f64 {
        let mut network = network.clone();
        let error: f64 = CASES.iter()
            .map(|(inputs, expected)| match network.forward(inputs) {
                Ok(out) => (out[0] - expected).powi(2),
                Err(_) => 1.0,
            })
            .sum();
        1.0 - error / CASES.len() as f64
    }

    fn generate(&mut self, ranked: &[Network]) -> sann::Result<Vec<Network>> {
        let mut next: Vec<Network> = ranked[..ELITES].to_vec();
        while next.len() < ranked.len() {
            if self.rng.gen_bool(0.1) {
                next.push(Network::random(&TOPOLOGY, &mut self.rng)?);
                continue;
            }
            let a = roulette_wheel_select(ranked, &mut self.rng)?;
            let b = roulette_wheel_select(ranked, &mut self.rng)?;
            let (child_a, child_b) = crossover(a, b, &mut self.rng)?;
            next.push(child_a);
            if next.len() < ranked.len() {
                next.push(child_b);
            }
        }
        Ok(next)
    }

    fn halt(&mut self, ranked: &[Network], generation: usize) -> bool {
        self.halt.check(ranked, generation)
    }

    fn on_generation(&mut self, ranked: &[Network], generation: usize) {
        if generation % 25 == 0 {
            if let Some(best) = ranked[0].fitness {
                println!("Generation {generation}: best fitness = {best:.4}");
            }
        }
    }
}

fn main() -> sann::Result<()> {
    let mut scenario = Xor {
        rng: rand::thread_rng(),
        halt: PlateauHalt::new(500, 100).with_target(0.99),
    };
    let config = EvolveConfig::new(TOPOLOGY.to_vec(), POPULATION);
    let outcome = evolve(&config, &mut scenario, &mut rand::thread_rng())?;

    println!("Halted after {} generation(s)", outcome.generations);
    if let Some(best) = outcome.fittest() {
        let mut best = best.clone();
        for (inputs, _) in &CASES {
            println!("Input: {:?} -> Output: {:.4}", inputs, best.forward(inputs)?[0]);
        }
        println!("{}", best.clean().to_json()?);
    }
    Ok(())
}
