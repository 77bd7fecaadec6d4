// tests/cli_report.rs
use clap::Parser;
use linkrank_core::cli::{handlers::apply_overrides, rank_graph, Cli};
use linkrank_core::config::{Config, RankConfig};
use linkrank_core::crawl::crawl;
use linkrank_core::report::render_text;
use linkrank_core::{RankError, SinkPolicy};
use std::fs;

#[test]
fn test_cli_requires_one_corpus() {
    assert!(Cli::try_parse_from(["linkrank"]).is_err());
    assert!(Cli::try_parse_from(["linkrank", "a", "b"]).is_err());
    assert!(Cli::try_parse_from(["linkrank", "corpus0"]).is_ok());
}

#[test]
fn test_flags_override_config() {
    let cli = Cli::try_parse_from([
        "linkrank", "corpus0", "--damping", "0.5", "-n", "300", "--sinks", "leak", "--seed", "3",
        "--json",
    ])
    .unwrap();
    let mut c = Config::new();
    c.rank.epsilon = 0.01;
    apply_overrides(&mut c, &cli);
    assert_eq!(c.rank.damping, 0.5);
    assert_eq!(c.rank.samples, 300);
    assert_eq!(c.rank.sinks, SinkPolicy::Leak);
    assert_eq!(c.rank.seed, Some(3));
    assert_eq!(c.rank.epsilon, 0.01);
    assert!(c.json);
}

#[test]
fn test_report_from_corpus() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("1.html"), r#"<a href="2.html">2</a>"#).unwrap();
    fs::write(d.path().join("2.html"), r#"<a href="1.html">1</a>"#).unwrap();
    let graph = crawl(d.path()).unwrap();

    let config = RankConfig { samples: 1_000, seed: Some(99), ..RankConfig::default() };
    let rankings = rank_graph(&graph, &config).unwrap();
    let text = render_text(&rankings);

    assert!(text.contains("PageRank Results from Sampling (n = 1000)"));
    assert!(text.contains("PageRank Results from Iteration"));
    assert!(text.contains("  1.html: 0.5000"));
    assert!(text.contains("  2.html: 0.5000"));
}

#[test]
fn test_seeded_runs_match() {
    let graph =
        linkrank_core::LinkGraph::new([("a", vec!["b"]), ("b", vec!["a", "c"]), ("c", vec![])]);
    let config = RankConfig { samples: 2_000, seed: Some(1), ..RankConfig::default() };
    let a = rank_graph(&graph, &config).unwrap();
    let b = rank_graph(&graph, &config).unwrap();
    assert_eq!(a.sampled, b.sampled);
    assert_eq!(a.iterated, b.iterated);
}

#[test]
fn test_empty_corpus_is_rank_error() {
    let d = tempfile::tempdir().unwrap();
    let graph = crawl(d.path()).unwrap();
    let err = rank_graph(&graph, &RankConfig::default()).unwrap_err();
    assert_eq!(err, RankError::EmptyGraph);
}
