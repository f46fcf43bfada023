//! banditlab: a simulation bench for stationary Bernoulli multi-armed bandits.
//!
//! A bandit has a fixed set of arms, each paying `1` with a hidden probability.
//! This crate pits three arm-selection policies against such a bandit and
//! measures the reward they collect:
//!
//! - [`EpsilonGreedy`](policies::EpsilonGreedy): explore at random with
//!   probability ε, otherwise pull the best-looking arm
//! - [`Ucb`](policies::Ucb): UCB1, an optimism bonus that shrinks as an arm
//!   gets pulled
//! - [`Random`](policies::Random): the no-learning baseline
//!
//! Single runs are noisy, so the [`Aggregator`] repeats each run many times with
//! independent random streams and averages the learning curves.
//!
//! # Quick Start
//!
//! ```
//! use banditlab::prelude::*;
//!
//! let config = SimConfig::builder()
//!     .true_means(vec![0.2, 0.4, 0.8, 0.3, 0.6])
//!     .num_steps(500)
//!     .num_runs(10)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let aggregator = Aggregator::new(&config).unwrap();
//! let ucb = aggregator.average(Ucb::new).unwrap();
//! let random = aggregator.average(|| Random).unwrap();
//!
//! assert_eq!(ucb.curve.len(), 500);
//! assert!(random.estimates.is_none());
//! ```

mod aggregate;
mod arm;
mod config;
mod error;
mod estimator;
mod experiment;
pub mod policies;
mod policy;
pub mod report;
mod simulator;

// Re-export main types
pub use aggregate::{AggregateResult, Aggregator, average_results};
pub use arm::{BernoulliArms, bernoulli_pull};
pub use config::{
    DEFAULT_EPSILON, DEFAULT_NUM_RUNS, DEFAULT_NUM_STEPS, DEFAULT_TRUE_MEANS, Seeding, SimConfig,
    SimConfigBuilder,
};
pub use error::{Result, SimError};
pub use estimator::ValueEstimator;
pub use experiment::{Comparison, Experiment, PolicyKind, PolicyOutcome};
pub use simulator::{RunResult, Simulator};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use banditlab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::policies::{EpsilonGreedy, Policy, Random, Ucb};
    pub use crate::{
        AggregateResult, Aggregator, BernoulliArms, Experiment, PolicyKind, Result, RunResult,
        Seeding, SimConfig, SimError, Simulator, ValueEstimator,
    };
}
