// src/report.rs
//! Rendering of the two rankings.

use std::fmt::Write;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::rank::Distribution;

/// Output of one `linkrank` run.
#[derive(Debug, Clone, Serialize)]
pub struct Rankings {
    pub samples: usize,
    pub sampled: Distribution,
    pub iterations: usize,
    pub iterated: Distribution,
}

/// Text report: one section per estimator, pages in key order, 4 decimals.
#[must_use]
pub fn render_text(rankings: &Rankings) -> String {
    let mut out = String::new();
    let sampled_header = format!("PageRank Results from Sampling (n = {})", rankings.samples);
    write_section(&mut out, &sampled_header, &rankings.sampled);
    write_section(&mut out, "PageRank Results from Iteration", &rankings.iterated);
    out
}

/// JSON report with both distributions.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_json(rankings: &Rankings) -> Result<String> {
    Ok(serde_json::to_string_pretty(rankings)?)
}

fn write_section(out: &mut String, header: &str, ranks: &Distribution) {
    let _ = writeln!(out, "{}", header.bold());
    for (page, rank) in ranks {
        let _ = writeln!(out, "  {page}: {rank:.4}");
    }
}
