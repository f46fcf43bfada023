//! Per-arm value estimates maintained with the incremental-mean update.

/// Pull counts and running mean rewards for every arm.
///
/// Each mean is kept with `mean += (reward - mean) / count`, which equals the
/// arithmetic mean of all rewards seen for that arm without ever storing the
/// running sum. Arms that were never pulled report a count and mean of zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueEstimator {
    counts: Vec<usize>,
    means: Vec<f64>,
}

impl ValueEstimator {
    /// Creates a fresh estimator with all counts and means at zero.
    #[must_use]
    pub fn new(num_arms: usize) -> Self {
        Self {
            counts: vec![0; num_arms],
            means: vec![0.0; num_arms],
        }
    }

    /// Record one observed `reward` for `arm`.
    ///
    /// # Panics
    /// If `arm` is out of range.
    pub fn update(&mut self, arm: usize, reward: f64) {
        self.counts[arm] += 1;
        self.means[arm] += (reward - self.means[arm]) / self.counts[arm] as f64;
    }

    pub fn num_arms(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, arm: usize) -> usize {
        self.counts[arm]
    }

    pub fn mean(&self, arm: usize) -> f64 {
        self.means[arm]
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Total number of pulls across all arms.
    pub fn total_pulls(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
        self.means.iter_mut().for_each(|m| *m = 0.0);
    }

    /// Consume the estimator, keeping only the mean estimates.
    pub fn into_means(self) -> Vec<f64> {
        self.means
    }
}
