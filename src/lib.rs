pub mod cli;
pub mod config;
pub mod crawl;
pub mod error;
pub mod exit;
pub mod graph;
pub mod logging;
pub mod rank;
pub mod report;

pub use error::{RankError, Result};
pub use graph::LinkGraph;
pub use rank::{
    iterate_rank, normalize, sample_rank, transition, Distribution, IterationRun, PowerIteration,
    Sampler, SinkPolicy,
};
