//! Simulation configuration.
//!
//! A [`SimConfig`] is fixed before any run starts and passed explicitly into
//! every entry point. Validation rejects bad values outright; nothing is clamped.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::arm::BernoulliArms;
use crate::error::{Result, SimError};

/// Arm means of the classic five-armed experiment. Arm 2 is the best.
pub const DEFAULT_TRUE_MEANS: [f64; 5] = [0.2, 0.4, 0.8, 0.3, 0.6];
pub const DEFAULT_NUM_STEPS: usize = 1000;
pub const DEFAULT_NUM_RUNS: usize = 50;
pub const DEFAULT_EPSILON: f64 = 0.1;

/// All parameters of one experiment.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Number of arms; must match `true_means.len()`.
    pub num_arms: usize,
    /// Steps per run.
    pub num_steps: usize,
    /// Independent runs averaged per policy.
    pub num_runs: usize,
    /// Hidden success probability of each arm.
    pub true_means: Vec<f64>,
    /// Exploration rate for epsilon-greedy.
    pub epsilon: f64,
    /// Master seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_arms: DEFAULT_TRUE_MEANS.len(),
            num_steps: DEFAULT_NUM_STEPS,
            num_runs: DEFAULT_NUM_RUNS,
            true_means: DEFAULT_TRUE_MEANS.to_vec(),
            epsilon: DEFAULT_EPSILON,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Create a new builder for constructing a configuration
    pub fn builder() -> SimConfigBuilder {
        SimConfigBuilder::default()
    }

    /// Check every parameter, reporting the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.num_arms == 0 {
            return Err(SimError::NoArmsAvailable);
        }
        if self.true_means.len() != self.num_arms {
            return Err(SimError::DimensionMismatch {
                message: format!(
                    "Mismatched dimensions: num_arms={}, true_means={}",
                    self.num_arms,
                    self.true_means.len()
                ),
            });
        }
        if self.num_steps == 0 {
            return Err(SimError::invalid("num_steps must be positive"));
        }
        if self.num_runs == 0 {
            return Err(SimError::invalid("num_runs must be positive"));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(SimError::invalid(format!(
                "epsilon must be between 0 and 1, got {}",
                self.epsilon
            )));
        }
        BernoulliArms::new(self.true_means.clone()).map(|_| ())
    }

    /// The reward source described by this configuration.
    pub fn arms(&self) -> Result<BernoulliArms> {
        self.validate()?;
        BernoulliArms::new(self.true_means.clone())
    }

    pub fn seeding(&self) -> Seeding {
        self.seed.map_or(Seeding::Entropy, Seeding::Fixed)
    }
}

/// Where the random streams of an experiment come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Seeding {
    /// Fresh OS entropy, different on every invocation.
    #[default]
    Entropy,
    /// Reproducible streams derived from a master seed.
    Fixed(u64),
}

impl Seeding {
    /// The master generator that hands out per-run seeds.
    pub fn master(self) -> StdRng {
        match self {
            Seeding::Entropy => StdRng::from_os_rng(),
            Seeding::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// Builder for [`SimConfig`] with a fluent API
#[derive(Clone, Debug, Default)]
pub struct SimConfigBuilder {
    num_arms: Option<usize>,
    num_steps: Option<usize>,
    num_runs: Option<usize>,
    true_means: Option<Vec<f64>>,
    epsilon: Option<f64>,
    seed: Option<u64>,
}

impl SimConfigBuilder {
    /// Set the number of arms explicitly
    ///
    /// When omitted it is taken from the length of the true means.
    pub fn num_arms(mut self, num_arms: usize) -> Self {
        self.num_arms = Some(num_arms);
        self
    }

    /// Set the true mean of each arm
    pub fn true_means<I>(mut self, true_means: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        self.true_means = Some(true_means.into_iter().collect());
        self
    }

    pub fn num_steps(mut self, num_steps: usize) -> Self {
        self.num_steps = Some(num_steps);
        self
    }

    pub fn num_runs(mut self, num_runs: usize) -> Self {
        self.num_runs = Some(num_runs);
        self
    }

    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build and validate the configuration
    ///
    /// Unset step count, run count and epsilon fall back to the defaults;
    /// the true means are required.
    pub fn build(self) -> Result<SimConfig> {
        let true_means = self.true_means.ok_or(SimError::BuilderError {
            message: "True means not specified".into(),
        })?;

        let config = SimConfig {
            num_arms: self.num_arms.unwrap_or(true_means.len()),
            num_steps: self.num_steps.unwrap_or(DEFAULT_NUM_STEPS),
            num_runs: self.num_runs.unwrap_or(DEFAULT_NUM_RUNS),
            true_means,
            epsilon: self.epsilon.unwrap_or(DEFAULT_EPSILON),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
