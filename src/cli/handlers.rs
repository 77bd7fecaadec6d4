// src/cli/handlers.rs
use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::args::Cli;
use crate::config::{Config, RankConfig};
use crate::crawl;
use crate::error;
use crate::exit::LinkRankExit;
use crate::graph::LinkGraph;
use crate::report::{self, Rankings};

/// Crawls the corpus, ranks it both ways and prints the report.
///
/// # Errors
/// Returns error if the corpus cannot be read or ranking rejects it.
pub fn handle_rank(cli: &Cli) -> Result<LinkRankExit> {
    let mut config = Config::load();
    apply_overrides(&mut config, cli);
    config.validate()?;

    let graph = crawl::crawl(&cli.corpus)?;
    log::info!(
        "corpus {}: {} pages, {} links",
        cli.corpus.display(),
        graph.len(),
        graph.edge_count()
    );

    let rankings = rank_graph(&graph, &config.rank)?;
    let out = if config.json {
        report::render_json(&rankings)?
    } else {
        report::render_text(&rankings)
    };
    print!("{out}");
    Ok(LinkRankExit::Success)
}

/// Command-line flags win over `linkrank.toml`.
pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    let rank = &mut config.rank;
    if let Some(d) = cli.damping {
        rank.damping = d;
    }
    if let Some(n) = cli.samples {
        rank.samples = n;
    }
    if let Some(e) = cli.epsilon {
        rank.epsilon = e;
    }
    if let Some(m) = cli.max_iterations {
        rank.max_iterations = m;
    }
    if let Some(s) = cli.seed {
        rank.seed = Some(s);
    }
    if let Some(s) = cli.sinks {
        rank.sinks = s;
    }
    config.verbose = cli.verbose;
    config.json = cli.json;
}

/// Runs both estimators on `graph`, side by side.
///
/// # Errors
/// Returns the first estimator failure.
pub fn rank_graph(graph: &LinkGraph, config: &RankConfig) -> error::Result<Rankings> {
    let sampler = config.sampler();
    let solver = config.power_iteration();
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let (sampled, iterated) = rayon::join(
        || sampler.run(graph, &mut rng),
        || solver.run(graph),
    );
    let iterated = iterated?;

    Ok(Rankings {
        samples: config.samples,
        sampled: sampled?,
        iterations: iterated.iterations,
        iterated: iterated.ranks,
    })
}
