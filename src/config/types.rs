// src/config/types.rs
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rank::{
    check_damping, check_epsilon, check_max_iterations, check_samples, PowerIteration, Sampler,
    SinkPolicy, DEFAULT_DAMPING, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES,
};

/// Estimator settings, the `[rank]` table of `linkrank.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default)]
    pub sinks: SinkPolicy,
    /// Absent means the sampler is seeded from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            epsilon: default_epsilon(),
            max_iterations: default_max_iterations(),
            sinks: SinkPolicy::default(),
            seed: None,
        }
    }
}

const fn default_damping() -> f64 { DEFAULT_DAMPING }
const fn default_samples() -> usize { DEFAULT_SAMPLES }
const fn default_epsilon() -> f64 { DEFAULT_EPSILON }
const fn default_max_iterations() -> usize { DEFAULT_MAX_ITERATIONS }

impl RankConfig {
    /// Checks ranges before any ranking work starts.
    ///
    /// # Errors
    /// Returns `InvalidArgument` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        check_samples(self.samples)?;
        check_epsilon(self.epsilon)?;
        check_max_iterations(self.max_iterations)
    }

    #[must_use]
    pub fn sampler(&self) -> Sampler {
        Sampler::new()
            .with_damping(self.damping)
            .with_samples(self.samples)
            .with_sinks(self.sinks)
    }

    #[must_use]
    pub fn power_iteration(&self) -> PowerIteration {
        PowerIteration::new()
            .with_damping(self.damping)
            .with_epsilon(self.epsilon)
            .with_max_iterations(self.max_iterations)
            .with_sinks(self.sinks)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkRankToml {
    #[serde(default)]
    pub rank: RankConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rank: RankConfig,
    pub verbose: bool,
    pub json: bool,
}
