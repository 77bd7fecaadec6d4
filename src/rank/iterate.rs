// src/rank/iterate.rs
//! Power iteration towards the surfer chain's stationary distribution.

use super::{
    check_damping, check_epsilon, check_graph, check_max_iterations, normalize, Distribution,
    SinkPolicy, DEFAULT_DAMPING, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS,
};
use crate::error::{RankError, Result};
use crate::graph::LinkGraph;

/// Solver settings.
#[derive(Debug, Clone, Copy)]
pub struct PowerIteration {
    pub damping: f64,
    /// A page is settled once a pass moves it by less than this.
    pub epsilon: f64,
    pub max_iterations: usize,
    pub sinks: SinkPolicy,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            sinks: SinkPolicy::default(),
        }
    }
}

/// Normalized ranks plus the number of passes it took.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationRun {
    pub ranks: Distribution,
    pub iterations: usize,
}

impl PowerIteration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_sinks(mut self, sinks: SinkPolicy) -> Self {
        self.sinks = sinks;
        self
    }

    fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        check_epsilon(self.epsilon)?;
        check_max_iterations(self.max_iterations)
    }

    /// Iterates until every page settles in the same pass, then normalizes.
    ///
    /// Each pass reads only the previous pass's ranks:
    ///
    /// `new(p) = (1 - d) / N + d * sum(rank(i) / out_degree(i) for i -> p)`
    ///
    /// plus `d * sum(rank(s)) / N` from the sinks under
    /// [`SinkPolicy::Redistribute`].
    ///
    /// # Errors
    /// `EmptyGraph`, `InvalidArgument` for bad settings, `NotConverged` if
    /// `max_iterations` passes go by without settling.
    #[allow(clippy::cast_precision_loss)]
    pub fn run(&self, graph: &LinkGraph) -> Result<IterationRun> {
        check_graph(graph)?;
        self.validate()?;

        let n = graph.len() as f64;
        let jump = (1.0 - self.damping) / n;
        let mut ranks: Distribution = graph.pages().map(|p| (p.to_string(), 1.0 / n)).collect();
        let mut iterations = 0;

        loop {
            iterations += 1;
            let next = self.pass(graph, &ranks, jump, n);
            let (settled, delta) = settle(&ranks, &next, self.epsilon);
            ranks = next;

            log::debug!("pass {iterations}: max delta {delta:.6}");

            if settled {
                log::info!("power iteration settled after {iterations} passes");
                break;
            }
            if iterations >= self.max_iterations {
                log::warn!(
                    "power iteration still moving after {iterations} passes (delta {delta:.6})"
                );
                return Err(RankError::NotConverged { iterations });
            }
        }

        Ok(IterationRun {
            ranks: normalize(&ranks)?,
            iterations,
        })
    }

    fn pass(&self, graph: &LinkGraph, ranks: &Distribution, jump: f64, n: f64) -> Distribution {
        let base = match self.sinks {
            SinkPolicy::Redistribute => {
                let sink_mass: f64 = graph.sinks().map(|s| rank_of(ranks, s)).sum();
                jump + self.damping * sink_mass / n
            }
            SinkPolicy::Leak => jump,
        };

        graph
            .pages()
            .map(|page| {
                let incoming = incoming_rank(graph, ranks, page);
                (page.to_string(), base + self.damping * incoming)
            })
            .collect()
    }
}

/// Convenience wrapper returning only the ranks.
///
/// # Errors
/// See [`PowerIteration::run`].
pub fn iterate_rank(
    graph: &LinkGraph,
    damping: f64,
    epsilon: f64,
    sinks: SinkPolicy,
) -> Result<Distribution> {
    PowerIteration::new()
        .with_damping(damping)
        .with_epsilon(epsilon)
        .with_sinks(sinks)
        .run(graph)
        .map(|run| run.ranks)
}

#[allow(clippy::cast_precision_loss)]
fn incoming_rank(graph: &LinkGraph, ranks: &Distribution, target: &str) -> f64 {
    graph
        .inbound(target)
        .map(|source| {
            let degree = graph.out_degree(source);
            if degree == 0 {
                return 0.0;
            }
            rank_of(ranks, source) / degree as f64
        })
        .sum()
}

fn rank_of(ranks: &Distribution, page: &str) -> f64 {
    ranks.get(page).copied().unwrap_or(0.0)
}

/// Whether every page moved by less than `epsilon`, and the largest move.
fn settle(old: &Distribution, new: &Distribution, epsilon: f64) -> (bool, f64) {
    let delta = new
        .iter()
        .map(|(page, r)| (r - rank_of(old, page)).abs())
        .fold(0.0_f64, f64::max);
    (delta < epsilon, delta)
}
