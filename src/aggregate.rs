//! Multi-run averaging.
//!
//! A single run of a thousand coin flips is noisy enough that one unlucky
//! sequence can make any policy look good or bad. The [`Aggregator`] repeats
//! the run many times with independent random streams and averages the
//! results element-wise: curves by step, estimates by arm.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::arm::BernoulliArms;
use crate::config::{Seeding, SimConfig};
use crate::error::{Result, SimError};
use crate::policies::Policy;
use crate::simulator::{RunResult, Simulator};

/// Averaged outcome of many independent runs of one policy.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateResult {
    /// Element `t` is the mean over runs of each run's trajectory at step `t`.
    pub curve: Vec<f64>,
    /// Per-arm estimates averaged over runs; None if the policy forms none.
    pub estimates: Option<Vec<f64>>,
    /// Number of runs averaged.
    pub num_runs: usize,
}

impl AggregateResult {
    /// Averaged running reward at the last step.
    pub fn final_reward(&self) -> f64 {
        self.curve.last().copied().unwrap_or(0.0)
    }

    /// Arm with the highest averaged estimate (first on ties).
    pub fn best_estimated_arm(&self) -> Option<usize> {
        self.estimates.as_deref().and_then(crate::policy::argmax)
    }
}

/// Runs a policy repeatedly and averages the runs.
#[derive(Clone, Debug)]
pub struct Aggregator {
    arms: BernoulliArms,
    num_steps: usize,
    num_runs: usize,
    seeding: Seeding,
}

impl Aggregator {
    /// Creates an aggregator for a validated configuration
    pub fn new(config: &SimConfig) -> Result<Self> {
        Ok(Self {
            arms: config.arms()?,
            num_steps: config.num_steps,
            num_runs: config.num_runs,
            seeding: config.seeding(),
        })
    }

    /// Override where the per-run random streams come from
    pub fn with_seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    pub fn arms(&self) -> &BernoulliArms {
        &self.arms
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn num_runs(&self) -> usize {
        self.num_runs
    }

    /// Run `num_runs` independent simulations and average them
    ///
    /// `factory` builds the policy for each run, so no two runs share a
    /// policy instance. Each run also gets its own generator seeded from the
    /// master stream, drawn in run order before any run starts.
    pub fn average<P, F>(&self, factory: F) -> Result<AggregateResult>
    where
        P: Policy,
        F: Fn() -> P + Sync,
    {
        let mut master = self.seeding.master();
        let seeds: Vec<u64> = (0..self.num_runs).map(|_| master.random()).collect();

        let runs = self.execute(&factory, &seeds)?;
        let result = average_results(&runs, self.num_steps, self.arms.num_arms())?;

        log::info!(
            "{:<24}{:>6} runs {:>8} steps  final reward {:.4}",
            factory().name(),
            self.num_runs,
            self.num_steps,
            result.final_reward()
        );
        Ok(result)
    }

    fn run_one<P: Policy>(&self, policy: P, run: usize, seed: u64) -> Result<RunResult> {
        log::trace!("run {run} seeded with {seed:#018x}");
        let mut rng = StdRng::seed_from_u64(seed);
        let result = Simulator::new(self.arms.clone(), policy)?.run(self.num_steps, &mut rng)?;
        log::debug!(
            "run {run} finished with total reward {}",
            result.total_reward
        );
        Ok(result)
    }

    #[cfg(not(feature = "parallel"))]
    fn execute<P, F>(&self, factory: &F, seeds: &[u64]) -> Result<Vec<RunResult>>
    where
        P: Policy,
        F: Fn() -> P + Sync,
    {
        seeds
            .iter()
            .enumerate()
            .map(|(run, &seed)| self.run_one(factory(), run, seed))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn execute<P, F>(&self, factory: &F, seeds: &[u64]) -> Result<Vec<RunResult>>
    where
        P: Policy,
        F: Fn() -> P + Sync,
    {
        use rayon::prelude::*;
        // Indexed collect keeps run order, so sums match the sequential path
        seeds
            .par_iter()
            .enumerate()
            .map(|(run, &seed)| self.run_one(factory(), run, seed))
            .collect()
    }
}

/// Average finished runs element-wise.
///
/// Curves are averaged by step and estimates by arm. Runs without estimates
/// contribute to the curve only; if none of them carry estimates the result
/// has none either.
pub fn average_results(
    runs: &[RunResult],
    num_steps: usize,
    num_arms: usize,
) -> Result<AggregateResult> {
    if runs.is_empty() {
        return Err(SimError::invalid("num_runs must be positive"));
    }

    let mut curve = vec![0.0; num_steps];
    for run in runs {
        if run.trajectory.len() != num_steps {
            return Err(SimError::DimensionMismatch {
                message: format!(
                    "Mismatched dimensions: num_steps={}, trajectory={}",
                    num_steps,
                    run.trajectory.len()
                ),
            });
        }
        curve
            .iter_mut()
            .zip(&run.trajectory)
            .for_each(|(acc, v)| *acc += v);
    }
    let n = runs.len() as f64;
    curve.iter_mut().for_each(|v| *v /= n);

    let with_estimates: Vec<&[f64]> = runs
        .iter()
        .filter_map(|r| r.estimates.as_ref().map(|e| e.means()))
        .collect();
    let estimates = if with_estimates.is_empty() {
        None
    } else {
        let mut sums = vec![0.0; num_arms];
        for means in &with_estimates {
            sums.iter_mut().zip(*means).for_each(|(acc, v)| *acc += v);
        }
        let k = with_estimates.len() as f64;
        sums.iter_mut().for_each(|v| *v /= k);
        Some(sums)
    };

    Ok(AggregateResult {
        curve,
        estimates,
        num_runs: runs.len(),
    })
}
