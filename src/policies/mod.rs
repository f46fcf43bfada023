//! Arm-selection policies
//!
//! Every policy implements [`Policy`], so the simulator and aggregator can drive
//! any of them, boxed or not, through the same code path.

mod epsilon_greedy;
mod random;
mod ucb;

pub use crate::policy::{Policy, argmax};
pub use epsilon_greedy::EpsilonGreedy;
pub use random::Random;
pub use ucb::Ucb;
