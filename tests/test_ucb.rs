use banditlab::policies::{Policy, Ucb};
use banditlab::{BernoulliArms, ValueEstimator};
use rand::SeedableRng;

/// Play UCB against the arms and return the arm chosen at each step.
fn choices(true_means: &[f64], steps: usize, seed: u64) -> Vec<usize> {
    let arms = BernoulliArms::new(true_means.to_vec()).unwrap();
    let mut est = ValueEstimator::new(arms.num_arms());
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let policy = Ucb::new();

    (0..steps)
        .map(|step| {
            let arm = policy.select(step, &est, &mut rng).unwrap();
            let reward = arms.pull(arm, &mut rng);
            est.update(arm, reward);
            arm
        })
        .collect()
}

#[test]
fn test_ucb_warm_up_order_for_any_seed() {
    let means = [0.2, 0.4, 0.8, 0.3, 0.6];
    for seed in [0, 1, 42, 999, u64::MAX] {
        let picks = choices(&means, 50, seed);
        assert_eq!(&picks[..5], &[0, 1, 2, 3, 4]);
    }
}

#[test]
fn test_ucb_keeps_revisiting_every_arm() {
    let picks = choices(&[0.2, 0.4, 0.8, 0.3, 0.6], 2000, 42);
    // The confidence bonus brings every arm back after the warm-up
    for arm in 0..5 {
        assert!(picks[5..].contains(&arm), "arm {arm} never revisited");
    }
}

#[test]
fn test_ucb_favors_best_arm() {
    let picks = choices(&[0.2, 0.4, 0.8, 0.3, 0.6], 2000, 7);
    let best = picks.iter().filter(|&&a| a == 2).count();
    let runner_up = picks.iter().filter(|&&a| a == 4).count();
    assert!(best > runner_up);
    assert!(best > 2000 / 5);
}

#[test]
fn test_ucb_single_arm() {
    let picks = choices(&[0.5], 20, 3);
    assert!(picks.iter().all(|&a| a == 0));
}

#[test]
fn test_ucb_scores_match_formula() {
    let mut est = ValueEstimator::new(3);
    for (arm, reward) in [(0, 1.0), (1, 0.0), (2, 1.0), (2, 0.0), (2, 1.0)] {
        est.update(arm, reward);
    }
    let step = 5;
    let ln = ((step + 1) as f64).ln();
    let scores = Ucb::scores(&est, step);
    approx::assert_abs_diff_eq!(scores[0], 1.0 + (2.0 * ln).sqrt(), epsilon = 1e-12);
    approx::assert_abs_diff_eq!(scores[1], (2.0 * ln).sqrt(), epsilon = 1e-12);
    approx::assert_abs_diff_eq!(
        scores[2],
        2.0 / 3.0 + (2.0 * ln / 3.0).sqrt(),
        epsilon = 1e-12
    );
}
