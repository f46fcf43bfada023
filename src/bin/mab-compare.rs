//! Compare epsilon-greedy, UCB1 and random arm selection on one bandit.
//!
//! Options: --means, --steps, --runs, --epsilon, --seed

use banditlab::prelude::*;
use banditlab::report;
use banditlab::{DEFAULT_EPSILON, DEFAULT_NUM_RUNS, DEFAULT_NUM_STEPS, DEFAULT_TRUE_MEANS};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// True mean reward of each arm, comma separated
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_TRUE_MEANS.to_vec()
    )]
    means: Vec<f64>,

    /// Steps per run
    #[arg(long, default_value_t = DEFAULT_NUM_STEPS)]
    steps: usize,

    /// Independent runs averaged per policy
    #[arg(long, default_value_t = DEFAULT_NUM_RUNS)]
    runs: usize,

    /// Exploration rate for epsilon-greedy
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Master seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut builder = SimConfig::builder()
        .true_means(args.means)
        .num_steps(args.steps)
        .num_runs(args.runs)
        .epsilon(args.epsilon);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    let comparison = Experiment::new(config.clone())?.run()?;
    print!("{}", report::full_report(&comparison, &config));
    Ok(())
}
