// src/rank/normalize.rs
use super::Distribution;
use crate::error::{RankError, Result};

/// Rescales non-negative weights so they sum to 1.
///
/// The key set is unchanged.
///
/// # Errors
/// `InvalidArgument` on a negative or non-finite weight, `DegenerateInput`
/// when the weights sum to zero.
pub fn normalize(weights: &Distribution) -> Result<Distribution> {
    if let Some((page, w)) = weights.iter().find(|(_, w)| !w.is_finite() || **w < 0.0) {
        return Err(RankError::invalid(format!(
            "weight for {page} must be finite and non-negative, got {w}"
        )));
    }

    // scale by the largest weight first so the sum cannot overflow
    let max = weights.values().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return Err(RankError::DegenerateInput);
    }
    let total: f64 = weights.values().map(|w| w / max).sum();

    Ok(weights
        .iter()
        .map(|(page, w)| (page.clone(), w / max / total))
        .collect())
}
