// src/error.rs
//! Failure modes of the ranking core.
//!
//! The core never retries and never returns partial results: a call either
//! yields a complete [`Distribution`](crate::rank::Distribution) or one of
//! these.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// Damping outside [0, 1], zero samples, bad epsilon, unknown page.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Normalization of weights that sum to zero.
    #[error("Degenerate input: weights sum to zero")]
    DegenerateInput,

    #[error("Empty graph: ranking needs at least one page")]
    EmptyGraph,

    #[error("Power iteration did not settle after {iterations} passes")]
    NotConverged { iterations: usize },
}

impl RankError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
