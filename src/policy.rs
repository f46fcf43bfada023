//! Policy trait definition for arm-selection strategies

use crate::estimator::ValueEstimator;

/// Unified trait for arm-selection policies
///
/// A policy only decides which arm to pull. The value estimates it reads are
/// owned and updated by the simulator, so a policy holds nothing but its
/// configuration and the same instance can be shared across runs.
///
/// The trait uses `dyn rand::RngCore` instead of a generic parameter to stay
/// object-safe, so `Box<dyn Policy>` works wherever a concrete policy does.
pub trait Policy: Send + Sync {
    /// Select the arm to pull at `step`, before that step's reward is seen
    ///
    /// # Arguments
    /// - `step`: Zero-based index of the current step within the run
    /// - `estimates`: Current per-arm value estimates
    /// - `rng`: Random number generator for stochastic policies
    ///
    /// # Returns
    /// The selected arm index, or None if there are no arms
    fn select(
        &self,
        step: usize,
        estimates: &ValueEstimator,
        rng: &mut dyn rand::RngCore,
    ) -> Option<usize>;

    /// Short human-readable name used in logs and reports
    fn name(&self) -> &'static str;

    /// Whether the policy learns value estimates worth reporting
    ///
    /// Policies that ignore feedback return false; their runs then report no
    /// estimate vector at all rather than a meaningless one.
    fn forms_estimates(&self) -> bool {
        true
    }
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn select(
        &self,
        step: usize,
        estimates: &ValueEstimator,
        rng: &mut dyn rand::RngCore,
    ) -> Option<usize> {
        (**self).select(step, estimates, rng)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn forms_estimates(&self) -> bool {
        (**self).forms_estimates()
    }
}

/// Index of the largest value, keeping the first one on ties.
///
/// NaN never wins. Returns None for an empty slice or one holding only NaNs.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_basic() {
        assert_eq!(argmax(&[0.1, 0.9, 0.3]), Some(1));
        assert_eq!(argmax(&[5.0]), Some(0));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_argmax_first_on_tie() {
        assert_eq!(argmax(&[0.0, 0.0, 0.0]), Some(0));
        assert_eq!(argmax(&[0.2, 0.7, 0.4, 0.7]), Some(1));
    }

    #[test]
    fn test_argmax_infinity() {
        assert_eq!(argmax(&[1.0, f64::INFINITY, f64::INFINITY]), Some(1));
        assert_eq!(argmax(&[f64::NEG_INFINITY, -1.0]), Some(1));
    }

    #[test]
    fn test_argmax_ignores_nan() {
        assert_eq!(argmax(&[f64::NAN, 0.1, 0.05]), Some(1));
        assert_eq!(argmax(&[0.3, f64::NAN, 0.9]), Some(2));
        assert_eq!(argmax(&[f64::NAN, f64::NAN]), None);
    }
}
