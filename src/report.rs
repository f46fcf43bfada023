//! Plain-text rendering of experiment results.
//!
//! Every function returns a `String`; printing is left to the caller.

use crate::config::SimConfig;
use crate::experiment::{Comparison, PolicyKind};
use crate::policy::argmax;

const BAR_WIDTH: f64 = 20.0;
const RULE: usize = 60;

/// Default 0-based steps shown in the performance table.
///
/// `[50, 200, 500, num_steps - 1]`, dropping steps past the end and duplicates.
pub fn default_checkpoints(num_steps: usize) -> Vec<usize> {
    let mut checkpoints: Vec<usize> = [50, 200, 500, num_steps.saturating_sub(1)]
        .into_iter()
        .filter(|&s| s < num_steps)
        .collect();
    checkpoints.sort_unstable();
    checkpoints.dedup();
    checkpoints
}

/// Header describing the experiment setup.
pub fn setup_summary(config: &SimConfig) -> String {
    let best = argmax(&config.true_means).unwrap_or(0);
    let means: Vec<String> = config.true_means.iter().map(|m| format!("{m}")).collect();
    let mut out = String::new();
    out.push_str(&format!("{}\n", "=".repeat(RULE)));
    out.push_str("Multi-Armed Bandit — Strategy Comparison\n");
    out.push_str(&format!("{}\n", "=".repeat(RULE)));
    out.push_str(&format!(
        "\nSetup: {} arms, {} steps per run, averaged over {} runs\n",
        config.num_arms, config.num_steps, config.num_runs
    ));
    out.push_str(&format!(
        "True arm means (hidden from agent): [{}]\n",
        means.join(", ")
    ));
    out.push_str(&format!(
        "Best arm: Arm {} (mean = {})\n",
        best, config.true_means[best]
    ));
    out
}

/// Average reward of every policy at the given 0-based steps.
///
/// Steps are printed 1-based. Steps past the end of a curve are skipped.
pub fn performance_table(comparison: &Comparison, checkpoints: &[usize]) -> String {
    let outcomes = comparison.outcomes();
    let widths: Vec<usize> = outcomes
        .iter()
        .map(|o| o.kind.label().len().max(10))
        .collect();
    let len = outcomes
        .iter()
        .map(|o| o.result.curve.len())
        .min()
        .unwrap_or(0);

    let mut out = String::from("\nAverage reward over time (higher = better):\n");
    out.push_str(&format!("  {:>6}", "Step"));
    for (o, w) in outcomes.iter().zip(&widths) {
        out.push_str(&format!(" | {:>w$}", o.kind.label(), w = w));
    }
    out.push('\n');
    out.push_str(&format!("  {}", "-".repeat(6)));
    for w in &widths {
        out.push_str(&format!("-+-{}", "-".repeat(*w)));
    }
    out.push('\n');

    for &step in checkpoints.iter().filter(|&&s| s < len) {
        out.push_str(&format!("  {:>6}", step + 1));
        for (o, w) in outcomes.iter().zip(&widths) {
            out.push_str(&format!(" | {:>w$.4}", o.result.curve[step], w = w));
        }
        out.push('\n');
    }
    out
}

/// Learned estimates next to the true means, with an ASCII bar per arm.
pub fn estimate_chart(label: &str, estimates: &[f64], true_means: &[f64]) -> String {
    let best = true_means.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut out = format!("\n{label} — Learned arm estimates vs true means:\n");
    out.push_str(&format!(
        "  {:>4} | {:>10} | {:>10} | Bar\n",
        "Arm", "Estimated", "True Mean"
    ));
    out.push_str(&format!(
        "  {}-+-{}-+-{}-+----------\n",
        "-".repeat(4),
        "-".repeat(10),
        "-".repeat(10)
    ));
    for (arm, (est, truth)) in estimates.iter().zip(true_means).enumerate() {
        let bar = "█".repeat((est * BAR_WIDTH).max(0.0) as usize);
        let marker = if *truth == best { " ← BEST" } else { "" };
        out.push_str(&format!(
            "  {arm:>4} | {est:>10.3} | {truth:>10.3} | {bar}{marker}\n"
        ));
    }
    out
}

/// Closing summary: winner among the learning policies and final rewards.
pub fn verdict(comparison: &Comparison, config: &SimConfig) -> String {
    let best = argmax(&config.true_means).unwrap_or(0);
    let eg = comparison.final_reward(PolicyKind::EpsilonGreedy);
    let ucb = comparison.final_reward(PolicyKind::Ucb);
    let random = comparison.final_reward(PolicyKind::Random);

    let mut out = format!("\n{}\n", "=".repeat(RULE));
    out.push_str(&format!(
        "Winner at step {}: {}\n",
        config.num_steps,
        comparison.winner()
    ));
    out.push_str(&format!("  Epsilon-Greedy final avg reward: {eg:.4}\n"));
    out.push_str(&format!("  UCB final avg reward:            {ucb:.4}\n"));
    out.push_str(&format!("  Random baseline:                 {random:.4}\n"));
    out.push_str(&format!(
        "  Theoretical best (always pick arm {}): {:.4}\n",
        best, config.true_means[best]
    ));
    out.push_str(&"=".repeat(RULE));
    out.push('\n');
    out
}

/// The complete report: setup, table, estimate charts, verdict.
pub fn full_report(comparison: &Comparison, config: &SimConfig) -> String {
    let mut out = setup_summary(config);
    out.push_str(&performance_table(
        comparison,
        &default_checkpoints(config.num_steps),
    ));
    for outcome in comparison.outcomes() {
        if let Some(estimates) = &outcome.result.estimates {
            out.push_str(&estimate_chart(
                outcome.kind.label(),
                estimates,
                &config.true_means,
            ));
        }
    }
    out.push_str(&verdict(comparison, config));
    out
}
