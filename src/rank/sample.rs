// src/rank/sample.rs
//! Monte-Carlo estimate: walk the surfer chain and count visits.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use super::{
    check_damping, check_graph, check_samples, normalize, transition, Distribution, SinkPolicy,
    DEFAULT_DAMPING, DEFAULT_SAMPLES,
};
use crate::error::{RankError, Result};
use crate::graph::LinkGraph;

/// Sampler settings.
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    pub damping: f64,
    pub samples: usize,
    pub sinks: SinkPolicy,
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            sinks: SinkPolicy::default(),
        }
    }
}

impl Sampler {
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
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    #[must_use]
    pub fn with_sinks(mut self, sinks: SinkPolicy) -> Self {
        self.sinks = sinks;
        self
    }

    /// Runs the walk with the caller's random source.
    ///
    /// # Errors
    /// See [`sample_rank`].
    pub fn run<R: Rng + ?Sized>(&self, graph: &LinkGraph, rng: &mut R) -> Result<Distribution> {
        sample_rank(graph, self.damping, self.samples, self.sinks, rng)
    }

    /// Runs the walk with a `ChaCha8Rng` seeded from `seed`.
    ///
    /// # Errors
    /// See [`sample_rank`].
    pub fn run_seeded(&self, graph: &LinkGraph, seed: u64) -> Result<Distribution> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.run(graph, &mut rng)
    }
}

/// Estimates PageRank from `n` steps of the random surfer.
///
/// The walk starts on a uniformly chosen page; each step draws the next page
/// from [`transition`] and counts the visit. Visit frequencies are then
/// normalized. Output varies with the random source; seed it for
/// reproducible results.
///
/// # Errors
/// `EmptyGraph`, or `InvalidArgument` for a bad damping or `n == 0`.
pub fn sample_rank<R: Rng + ?Sized>(
    graph: &LinkGraph,
    damping: f64,
    n: usize,
    sinks: SinkPolicy,
    rng: &mut R,
) -> Result<Distribution> {
    check_graph(graph)?;
    check_damping(damping)?;
    check_samples(n)?;

    log::debug!(
        "sampling {n} steps over {} pages (damping={damping}, sinks={sinks:?})",
        graph.len()
    );

    let mut visits: Distribution = graph.pages().map(|p| (p.to_string(), 0.0)).collect();

    let start = rng.random_range(0..graph.len());
    let mut current = graph
        .pages()
        .nth(start)
        .map(str::to_string)
        .ok_or(RankError::EmptyGraph)?;

    for _ in 0..n {
        let step = transition(graph, &current, damping, sinks)?;
        // only reachable with damping = 1 on a leaking sink
        let next = weighted_choice(&step, rng).ok_or(RankError::DegenerateInput)?;
        if let Some(count) = visits.get_mut(next) {
            *count += 1.0;
        }
        current = next.to_string();
    }

    normalize(&visits)
}

/// Draws a key with probability proportional to its weight.
///
/// Cumulative inverse sampling: weights need not sum to 1. Returns `None`
/// when no weight is positive.
pub fn weighted_choice<'a, R: Rng + ?Sized>(
    distribution: &'a Distribution,
    rng: &mut R,
) -> Option<&'a str> {
    let total: f64 = distribution.values().filter(|w| **w > 0.0).sum();
    if total.is_nan() || total <= 0.0 {
        return None;
    }

    let target = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last = None;
    for (page, &w) in distribution {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        if cumulative > target {
            return Some(page.as_str());
        }
        last = Some(page.as_str());
    }
    // rounding can leave the target just past the final bucket
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> LinkGraph {
        LinkGraph::new([
            ("1.html", vec!["2.html", "3.html"]),
            ("2.html", vec!["3.html"]),
            ("3.html", vec!["2.html"]),
        ])
    }

    #[test]
    fn weighted_choice_never_picks_zero_weight() {
        let dist: Distribution = [("a".to_string(), 0.0), ("b".to_string(), 2.0)]
            .into_iter()
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert_eq!(weighted_choice(&dist, &mut rng), Some("b"));
        }
    }

    #[test]
    fn weighted_choice_follows_weights() {
        let dist: Distribution = [("a".to_string(), 1.0), ("b".to_string(), 3.0)]
            .into_iter()
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let hits = (0..20_000)
            .filter(|_| weighted_choice(&dist, &mut rng) == Some("b"))
            .count();
        let share = hits as f64 / 20_000.0;
        assert!((share - 0.75).abs() < 0.02, "share={share}");
    }

    #[test]
    fn weighted_choice_none_when_all_zero() {
        let dist: Distribution = [("a".to_string(), 0.0)].into_iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(weighted_choice(&dist, &mut rng), None);
    }

    #[test]
    fn same_seed_same_estimate() {
        let s = Sampler::new().with_samples(2_000);
        let a = s.run_seeded(&corpus(), 42).unwrap();
        let b = s.run_seeded(&corpus(), 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_samples_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = sample_rank(&corpus(), 0.85, 0, SinkPolicy::Leak, &mut rng).unwrap_err();
        assert!(matches!(err, RankError::InvalidArgument(_)));
    }

    #[test]
    fn single_page_gets_all_mass() {
        let g = LinkGraph::from_edges(["only.html"], Vec::<(&str, &str)>::new());
        for sinks in [SinkPolicy::Redistribute, SinkPolicy::Leak] {
            let ranks = Sampler::new()
                .with_samples(100)
                .with_sinks(sinks)
                .run_seeded(&g, 3)
                .unwrap();
            assert_eq!(ranks["only.html"], 1.0);
        }
    }

    #[test]
    fn undamped_leaking_sink_has_nowhere_to_go() {
        let g = LinkGraph::from_edges(["only.html"], Vec::<(&str, &str)>::new());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = sample_rank(&g, 1.0, 10, SinkPolicy::Leak, &mut rng).unwrap_err();
        assert_eq!(err, RankError::DegenerateInput);
    }
}
