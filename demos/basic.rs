//! Basic example: random-restart 2-opt on a random Euclidean instance.

use clap::Parser;
use indirect_tsp::utils::{random_nodes, seeded_rng};
use indirect_tsp::{Candidate, Config, Convergence, IndirectProblem, Problem, Solution};
use log::info;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "2-opt local search over random-key encoded tours")]
struct Args {
    /// Number of nodes to scatter
    #[arg(short, long, default_value_t = 51)]
    nodes: usize,

    /// Side of the square the nodes are scattered in (must be positive)
    #[arg(long, default_value_t = 100.0)]
    side: f64,

    /// Number of random starting vectors
    #[arg(short, long, default_value_t = 8)]
    restarts: usize,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after the first improving move
    #[arg(long)]
    single_step: bool,

    /// Evaluate each sweep in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Optional JSON configuration; command-line flags are ignored when given
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(json) => Config::from_json(json)?,
        None => {
            let convergence = if args.single_step {
                Convergence::SingleStep
            } else {
                Convergence::LocalOptimum
            };
            let mut config = Config::new()
                .with_convergence(convergence)
                .with_parallel(args.parallel);
            if let Some(seed) = args.seed {
                config = config.with_seed(seed);
            }
            config
        }
    };

    let nodes = random_nodes(args.nodes, args.side, &mut seeded_rng(config.seed))?;
    let problem = Problem::with_config(format!("random{}", args.nodes), nodes, config)?;
    let mut rng = problem.rng();

    let start_time = Instant::now();
    let mut best: Option<Solution> = None;

    for restart in 0..args.restarts {
        let vector = problem.random_decision_vector(&mut rng);
        let mut solution = problem.construct(vector)?;
        let initial = solution.fitness();

        problem.improve(&mut solution);
        info!(
            "restart {}: {} -> {}",
            restart,
            initial,
            solution.fitness()
        );

        let better = best
            .as_ref()
            .map_or(true, |b| solution.fitness < b.fitness);
        if better {
            best = Some(solution);
        }
    }

    println!("Search completed in {:.2?}", start_time.elapsed());
    println!("Solutions constructed: {}", problem.solutions_constructed());
    if let Some(best) = best {
        println!("Best fitness: {}", best.fitness);
        best.print();
    }

    Ok(())
}
