// src/rank/mod.rs
//! PageRank estimation: the random-surfer model and its two estimators.
//!
//! [`sample_rank`] walks the surfer chain and counts visits;
//! [`iterate_rank`] solves for the fixed point by power iteration. Both end
//! with [`normalize`] and return a [`Distribution`] covering every page.

pub mod iterate;
pub mod normalize;
pub mod sample;
pub mod transition;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};
use crate::graph::LinkGraph;

pub use iterate::{iterate_rank, IterationRun, PowerIteration};
pub use normalize::normalize;
pub use sample::{sample_rank, weighted_choice, Sampler};
pub use transition::transition;

/// Page -> probability mass.
pub type Distribution = BTreeMap<String, f64>;

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_SAMPLES: usize = 10_000;
pub const DEFAULT_EPSILON: f64 = 0.001;
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000;

/// What happens to the follow-a-link mass of a page with no out-links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SinkPolicy {
    /// Treat a sink as linking to every page.
    #[default]
    Redistribute,
    /// Drop the mass; only the final normalization compensates.
    Leak,
}

pub(crate) fn check_graph(graph: &LinkGraph) -> Result<()> {
    if graph.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    Ok(())
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(RankError::invalid(format!(
            "damping must be within [0, 1], got {damping}"
        )));
    }
    Ok(())
}

pub(crate) fn check_samples(samples: usize) -> Result<()> {
    if samples == 0 {
        return Err(RankError::invalid("sample count must be at least 1"));
    }
    Ok(())
}

pub(crate) fn check_epsilon(epsilon: f64) -> Result<()> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(RankError::invalid(format!(
            "epsilon must be finite and positive, got {epsilon}"
        )));
    }
    Ok(())
}

pub(crate) fn check_max_iterations(max_iterations: usize) -> Result<()> {
    if max_iterations == 0 {
        return Err(RankError::invalid("max_iterations must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damping_bounds_are_inclusive() {
        assert!(check_damping(0.0).is_ok());
        assert!(check_damping(1.0).is_ok());
        assert!(check_damping(-0.01).is_err());
        assert!(check_damping(1.01).is_err());
        assert!(check_damping(f64::NAN).is_err());
    }

    #[test]
    fn epsilon_must_be_positive_and_finite() {
        assert!(check_epsilon(0.001).is_ok());
        assert!(check_epsilon(0.0).is_err());
        assert!(check_epsilon(-1.0).is_err());
        assert!(check_epsilon(f64::INFINITY).is_err());
    }

    #[test]
    fn counts_must_be_positive() {
        assert!(check_samples(1).is_ok());
        assert!(matches!(check_samples(0), Err(RankError::InvalidArgument(_))));
        assert!(check_max_iterations(1).is_ok());
        assert!(matches!(check_max_iterations(0), Err(RankError::InvalidArgument(_))));
    }

    #[test]
    fn sink_policy_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrap {
            sinks: SinkPolicy,
        }
        let w: Wrap = toml::from_str("sinks = \"leak\"").unwrap();
        assert_eq!(w.sinks, SinkPolicy::Leak);
    }
}
