use crate::arm::BernoulliArms;
use crate::error::{Result, SimError};
use crate::estimator::ValueEstimator;
use crate::policies::{EpsilonGreedy, Policy, Random, Ucb};

/// The outcome of a single run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    /// Element `t` is the total reward of steps `0..=t` divided by `t + 1`.
    pub trajectory: Vec<f64>,
    /// Final per-arm estimates, or None for policies that form no estimates.
    pub estimates: Option<ValueEstimator>,
    /// Total reward collected over the run.
    pub total_reward: f64,
}

impl RunResult {
    /// Running average at the last step, or 0 for an empty run.
    pub fn final_reward(&self) -> f64 {
        self.trajectory.last().copied().unwrap_or(0.0)
    }
}

/// A bandit driven by one policy
///
/// The `Simulator` pairs the hidden reward source with a selection policy and
/// plays them against each other for a fixed number of steps. Every call to
/// [`Simulator::run`] starts from fresh estimates, so runs never leak state
/// into each other; only the random generator is threaded through.
#[derive(Clone, Debug)]
pub struct Simulator<P> {
    arms: BernoulliArms,
    policy: P,
}

impl<P: Policy> Simulator<P> {
    /// Creates a new simulator with the given arms and policy
    pub fn new(arms: BernoulliArms, policy: P) -> Result<Self> {
        if arms.num_arms() == 0 {
            return Err(SimError::NoArmsAvailable);
        }
        Ok(Self { arms, policy })
    }

    /// Play `num_steps` steps and record the running average reward
    pub fn run(&self, num_steps: usize, rng: &mut dyn rand::RngCore) -> Result<RunResult> {
        let mut estimates = ValueEstimator::new(self.arms.num_arms());
        let mut trajectory = Vec::with_capacity(num_steps);
        let mut total_reward = 0.0;

        for step in 0..num_steps {
            let arm = self
                .policy
                .select(step, &estimates, rng)
                .ok_or(SimError::NoArmsAvailable)?;
            let reward = self.arms.pull(arm, rng);
            estimates.update(arm, reward);
            total_reward += reward;
            trajectory.push(total_reward / (step + 1) as f64);
        }

        Ok(RunResult {
            trajectory,
            estimates: self.policy.forms_estimates().then_some(estimates),
            total_reward,
        })
    }

    /// Gets the arms
    pub fn arms(&self) -> &BernoulliArms {
        &self.arms
    }

    /// Gets a reference to the policy
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

// Convenience constructors for the built-in policies
impl Simulator<EpsilonGreedy> {
    /// Create an epsilon-greedy simulator
    pub fn epsilon_greedy(true_means: Vec<f64>, epsilon: f64) -> Result<Self> {
        Self::new(BernoulliArms::new(true_means)?, EpsilonGreedy::try_new(epsilon)?)
    }
}

impl Simulator<Ucb> {
    /// Create a UCB1 simulator
    pub fn ucb(true_means: Vec<f64>) -> Result<Self> {
        Self::new(BernoulliArms::new(true_means)?, Ucb::new())
    }
}

impl Simulator<Random> {
    /// Create a random-baseline simulator
    pub fn random(true_means: Vec<f64>) -> Result<Self> {
        Self::new(BernoulliArms::new(true_means)?, Random)
    }
}
