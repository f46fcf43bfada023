use rand::Rng;

use crate::estimator::ValueEstimator;
use crate::policy::Policy;

/// Random selection policy - selects arms uniformly at random
///
/// The no-learning baseline. It never looks at the estimates and reports none.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Random;

impl Policy for Random {
    fn select(
        &self,
        _step: usize,
        estimates: &ValueEstimator,
        rng: &mut dyn rand::RngCore,
    ) -> Option<usize> {
        match estimates.num_arms() {
            0 => None,
            n => Some(rng.random_range(0..n)),
        }
    }

    fn name(&self) -> &'static str {
        "Random"
    }

    fn forms_estimates(&self) -> bool {
        false
    }
}
