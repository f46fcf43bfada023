//! Side-by-side comparison of the built-in policies on one configuration.

use std::fmt;

use rand::Rng;

use crate::aggregate::{AggregateResult, Aggregator};
use crate::config::{Seeding, SimConfig};
use crate::error::Result;
use crate::policies::{EpsilonGreedy, Policy, Random, Ucb};

/// The built-in policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PolicyKind {
    EpsilonGreedy,
    Ucb,
    Random,
}

impl PolicyKind {
    /// All policies, in report order.
    pub const ALL: [PolicyKind; 3] = [
        PolicyKind::EpsilonGreedy,
        PolicyKind::Ucb,
        PolicyKind::Random,
    ];

    /// Build a policy of this kind from the configuration.
    pub fn build(self, config: &SimConfig) -> Result<Box<dyn Policy>> {
        if self == PolicyKind::EpsilonGreedy {
            EpsilonGreedy::try_new(config.epsilon)?;
        }
        Ok(self.instantiate(config.epsilon))
    }

    // Callers must have validated epsilon.
    fn instantiate(self, epsilon: f64) -> Box<dyn Policy> {
        match self {
            PolicyKind::EpsilonGreedy => Box::new(EpsilonGreedy::new(epsilon)),
            PolicyKind::Ucb => Box::new(Ucb::new()),
            PolicyKind::Random => Box::new(Random),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PolicyKind::EpsilonGreedy => "Epsilon-Greedy",
            PolicyKind::Ucb => "UCB",
            PolicyKind::Random => "Random",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The averaged result of one policy.
#[derive(Clone, Debug, PartialEq)]
pub struct PolicyOutcome {
    pub kind: PolicyKind,
    pub result: AggregateResult,
}

/// Results of every built-in policy on the same configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    outcomes: Vec<PolicyOutcome>,
}

impl Comparison {
    pub fn outcomes(&self) -> &[PolicyOutcome] {
        &self.outcomes
    }

    pub fn outcome(&self, kind: PolicyKind) -> Option<&AggregateResult> {
        self.outcomes
            .iter()
            .find(|o| o.kind == kind)
            .map(|o| &o.result)
    }

    /// Final averaged reward of `kind`, or 0 if it was not run.
    pub fn final_reward(&self, kind: PolicyKind) -> f64 {
        self.outcome(kind).map_or(0.0, AggregateResult::final_reward)
    }

    /// The better of the two learning policies at the last step
    ///
    /// Epsilon-greedy wins only when strictly ahead; UCB takes ties.
    pub fn winner(&self) -> PolicyKind {
        if self.final_reward(PolicyKind::EpsilonGreedy) > self.final_reward(PolicyKind::Ucb) {
            PolicyKind::EpsilonGreedy
        } else {
            PolicyKind::Ucb
        }
    }
}

/// Runs each built-in policy through the aggregator.
#[derive(Clone, Debug)]
pub struct Experiment {
    config: SimConfig,
}

impl Experiment {
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run every policy in [`PolicyKind::ALL`]
    ///
    /// With a fixed seed each policy gets its own seed derived from it, so
    /// the policies never replay each other's random streams.
    pub fn run(&self) -> Result<Comparison> {
        self.run_kinds(&PolicyKind::ALL)
    }

    /// Run the given policies only
    pub fn run_kinds(&self, kinds: &[PolicyKind]) -> Result<Comparison> {
        let mut master = self.config.seeding().master();
        let aggregator = Aggregator::new(&self.config)?;

        let mut outcomes = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            let seeding = match self.config.seeding() {
                Seeding::Entropy => Seeding::Entropy,
                Seeding::Fixed(_) => Seeding::Fixed(master.random()),
            };
            log::info!("{:<24}{:<24}", "running policy", kind);

            let epsilon = self.config.epsilon;
            let result = aggregator
                .clone()
                .with_seeding(seeding)
                .average(|| kind.instantiate(epsilon))?;
            outcomes.push(PolicyOutcome { kind, result });
        }
        Ok(Comparison { outcomes })
    }
}
