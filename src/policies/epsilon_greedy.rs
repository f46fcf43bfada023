use rand::Rng;

use crate::error::{Result, SimError};
use crate::estimator::ValueEstimator;
use crate::policy::{Policy, argmax};

/// Epsilon-greedy policy - explores with probability epsilon, exploits otherwise
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Creates a new EpsilonGreedy policy with the given epsilon
    ///
    /// # Panics
    /// If epsilon is outside `[0, 1]`. Use [`EpsilonGreedy::try_new`] for
    /// user-supplied values.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&epsilon),
            "epsilon must be between 0 and 1"
        );
        Self { epsilon }
    }

    /// Creates a new EpsilonGreedy policy, rejecting epsilon outside `[0, 1]`
    pub fn try_new(epsilon: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(SimError::invalid(format!(
                "epsilon must be between 0 and 1, got {epsilon}"
            )));
        }
        Ok(Self { epsilon })
    }

    /// Gets the epsilon value
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Policy for EpsilonGreedy {
    fn select(
        &self,
        _step: usize,
        estimates: &ValueEstimator,
        rng: &mut dyn rand::RngCore,
    ) -> Option<usize> {
        let n = estimates.num_arms();
        if n == 0 {
            return None;
        }

        // Explore with probability epsilon
        let r: f64 = rng.random_range(0.0..1.0);
        if r < self.epsilon {
            Some(rng.random_range(0..n))
        } else {
            // Highest estimated mean, first arm on ties
            argmax(estimates.means())
        }
    }

    fn name(&self) -> &'static str {
        "Epsilon-Greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn trained(updates: &[(usize, f64)], num_arms: usize) -> ValueEstimator {
        let mut est = ValueEstimator::new(num_arms);
        for &(arm, reward) in updates {
            est.update(arm, reward);
        }
        est
    }

    #[test]
    fn test_epsilon_greedy_pure_exploitation() {
        let policy = EpsilonGreedy::new(0.0);
        // Arm 1 has the highest average (0.9)
        let est = trained(&[(0, 0.5), (1, 1.0), (2, 0.3), (1, 0.8)], 3);
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        for step in 0..10 {
            assert_eq!(policy.select(step, &est, &mut rng), Some(1));
        }
    }

    #[test]
    fn test_epsilon_greedy_untrained_picks_first_arm() {
        let policy = EpsilonGreedy::new(0.0);
        let est = ValueEstimator::new(4);
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        assert_eq!(policy.select(0, &est, &mut rng), Some(0));
    }

    #[test]
    fn test_epsilon_greedy_pure_exploration() {
        let policy = EpsilonGreedy::new(1.0);
        let est = trained(&[(2, 1.0)], 3);
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        let mut counts = [0usize; 3];
        for step in 0..3000 {
            counts[policy.select(step, &est, &mut rng).unwrap()] += 1;
        }
        // Exploration ignores the estimates entirely
        for c in counts {
            assert!((c as f64 / 3000.0 - 1.0 / 3.0).abs() < 0.05);
        }
    }

    #[test]
    fn test_epsilon_greedy_mixed() {
        let policy = EpsilonGreedy::new(0.3);
        let est = trained(&[(0, 0.2), (1, 0.9), (2, 0.1)], 3);
        let mut rng = rand::rngs::StdRng::seed_from_u64(123);

        let n = 10_000;
        let best = (0..n)
            .filter(|&s| policy.select(s, &est, &mut rng) == Some(1))
            .count();
        // 70% exploitation plus a third of the 30% exploration
        assert!((best as f64 / n as f64 - 0.8).abs() < 0.02);
    }

    #[test]
    fn test_epsilon_greedy_no_arms() {
        let policy = EpsilonGreedy::new(0.5);
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        assert_eq!(policy.select(0, &ValueEstimator::new(0), &mut rng), None);
    }

    #[test]
    fn test_try_new_validates() {
        assert!(EpsilonGreedy::try_new(0.0).is_ok());
        assert!(EpsilonGreedy::try_new(1.0).is_ok());
        assert!(matches!(
            EpsilonGreedy::try_new(1.5),
            Err(SimError::InvalidParameter { .. })
        ));
        assert!(EpsilonGreedy::try_new(-0.1).is_err());
        assert!(EpsilonGreedy::try_new(f64::NAN).is_err());
    }

    #[test]
    #[should_panic(expected = "epsilon must be between 0 and 1")]
    fn test_new_panics_on_bad_epsilon() {
        let _ = EpsilonGreedy::new(2.0);
    }

    #[test]
    fn test_epsilon_getter() {
        assert_eq!(EpsilonGreedy::new(0.25).epsilon(), 0.25);
        assert_eq!(EpsilonGreedy::new(0.25).name(), "Epsilon-Greedy");
    }
}
