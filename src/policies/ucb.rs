use crate::estimator::ValueEstimator;
use crate::policy::{Policy, argmax};

/// Upper Confidence Bound (UCB1) policy
///
/// The first `num_arms` steps pull every arm once, in index order. After that
/// each arm is scored as
///
/// ```text
/// mean[a] + sqrt(2 * ln(step + 1) / count[a])
/// ```
///
/// and the highest score wins, first arm on ties. The bonus term grows with the
/// elapsed steps and shrinks with the arm's own pull count, so neglected arms
/// keep coming back into play while the best arm is favored in the long run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ucb;

impl Ucb {
    /// Creates a new UCB1 policy
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// UCB1 score of `arm` at `step`
    ///
    /// Arms that were never pulled score positive infinity.
    pub fn score(estimates: &ValueEstimator, arm: usize, step: usize) -> f64 {
        let pulls = estimates.count(arm);
        if pulls == 0 {
            return f64::INFINITY;
        }
        let exploitation = estimates.mean(arm);
        let exploration = (2.0 * ((step + 1) as f64).ln() / pulls as f64).sqrt();
        exploitation + exploration
    }

    /// UCB1 scores for every arm at `step`
    pub fn scores(estimates: &ValueEstimator, step: usize) -> Vec<f64> {
        (0..estimates.num_arms())
            .map(|arm| Self::score(estimates, arm, step))
            .collect()
    }
}

impl Policy for Ucb {
    fn select(
        &self,
        step: usize,
        estimates: &ValueEstimator,
        _rng: &mut dyn rand::RngCore,
    ) -> Option<usize> {
        let n = estimates.num_arms();
        if n == 0 {
            return None;
        }

        // Warm-up: one pull per arm in index order
        if step < n {
            return Some(step);
        }

        argmax(&Self::scores(estimates, step))
    }

    fn name(&self) -> &'static str {
        "UCB"
    }
}
