//! Arms of a stationary Bernoulli bandit.
//!
//! Each arm is identified by its index and pays out `1.0` with a fixed hidden
//! probability (its true mean) and `0.0` otherwise. Policies never see the true
//! means; they only observe the rewards returned by [`BernoulliArms::pull`].

use rand::Rng;

use crate::error::{Result, SimError};

/// Perform one Bernoulli trial with success probability `true_mean`.
///
/// Draws `u` uniformly from `[0, 1)` and pays `1.0` iff `u < true_mean`, so a
/// mean of `0.0` never pays and a mean of `1.0` always does.
pub fn bernoulli_pull<R: Rng + ?Sized>(true_mean: f64, rng: &mut R) -> f64 {
    if rng.random::<f64>() < true_mean {
        1.0
    } else {
        0.0
    }
}

/// The reward source: a fixed set of arms with hidden success probabilities.
#[derive(Clone, Debug, PartialEq)]
pub struct BernoulliArms {
    true_means: Vec<f64>,
}

impl BernoulliArms {
    /// Creates a bandit whose arm `i` pays with probability `true_means[i]`.
    pub fn new(true_means: Vec<f64>) -> Result<Self> {
        if true_means.is_empty() {
            return Err(SimError::NoArmsAvailable);
        }
        if let Some((arm, mean)) = true_means
            .iter()
            .enumerate()
            .find(|(_, m)| !(0.0..=1.0).contains(*m))
        {
            return Err(SimError::invalid(format!(
                "true mean of arm {arm} must be between 0 and 1, got {mean}"
            )));
        }
        Ok(Self { true_means })
    }

    /// Pull `arm` once and observe its reward.
    ///
    /// # Panics
    /// If `arm` is out of range. Policies only ever return valid indices.
    pub fn pull(&self, arm: usize, rng: &mut dyn rand::RngCore) -> f64 {
        bernoulli_pull(self.true_means[arm], rng)
    }

    pub fn num_arms(&self) -> usize {
        self.true_means.len()
    }

    pub fn true_means(&self) -> &[f64] {
        &self.true_means
    }

    /// Index of the arm with the highest true mean (first on ties).
    pub fn best_arm(&self) -> usize {
        crate::policy::argmax(&self.true_means).unwrap_or(0)
    }

    /// The expected reward of always pulling the best arm.
    pub fn best_mean(&self) -> f64 {
        self.true_means[self.best_arm()]
    }

    /// The expected reward of pulling arms uniformly at random.
    pub fn mean_of_means(&self) -> f64 {
        self.true_means.iter().sum::<f64>() / self.true_means.len() as f64
    }
}
