// src/rank/transition.rs
//! One step of the damped random surfer.

use super::{check_damping, check_graph, Distribution, SinkPolicy};
use crate::error::{RankError, Result};
use crate::graph::LinkGraph;

/// Distribution over the next page, given the surfer is on `page`.
///
/// Every page gets the random-jump share `(1 - damping) / N`; each out-link
/// of `page` additionally gets `damping / out_degree`. A sink spreads its
/// `damping` uniformly under [`SinkPolicy::Redistribute`] and drops it under
/// [`SinkPolicy::Leak`], in which case the result sums to `1 - damping`.
///
/// # Errors
/// `EmptyGraph`, or `InvalidArgument` for a bad damping or unknown page.
#[allow(clippy::cast_precision_loss)]
pub fn transition(
    graph: &LinkGraph,
    page: &str,
    damping: f64,
    sinks: SinkPolicy,
) -> Result<Distribution> {
    check_graph(graph)?;
    check_damping(damping)?;
    let links = graph
        .links(page)
        .ok_or_else(|| RankError::invalid(format!("page {page} is not in the graph")))?;

    let n = graph.len() as f64;
    let jump = (1.0 - damping) / n;

    if links.is_empty() {
        let base = match sinks {
            SinkPolicy::Redistribute => jump + damping / n,
            SinkPolicy::Leak => jump,
        };
        return Ok(graph.pages().map(|p| (p.to_string(), base)).collect());
    }

    let follow = damping / links.len() as f64;
    Ok(graph
        .pages()
        .map(|p| {
            let w = if links.contains(p) { jump + follow } else { jump };
            (p.to_string(), w)
        })
        .collect())
}
