use clap::Parser;
use std::path::PathBuf;

use crate::rank::SinkPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "linkrank",
    version,
    about = "Rank the pages of an HTML corpus by sampling and by iteration"
)]
pub struct Cli {
    /// Directory holding the corpus' `.html` pages
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,
    /// Probability of following a link instead of jumping
    #[arg(long)]
    pub damping: Option<f64>,
    /// Number of random-surfer steps
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,
    /// Settling threshold for the iterative estimator
    #[arg(long)]
    pub epsilon: Option<f64>,
    /// Pass cap for the iterative estimator
    #[arg(long)]
    pub max_iterations: Option<usize>,
    /// Seed for the sampler (reproducible output)
    #[arg(long)]
    pub seed: Option<u64>,
    /// What pages without links do with their mass
    #[arg(long, value_enum)]
    pub sinks: Option<SinkPolicy>,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
    #[arg(long, short)]
    pub verbose: bool,
}
