//! Role-weighted composite score

use crate::config::RoleWeights;
use crate::model::{AuxWeights, AuxiliarySignals, PlatformScores};
use log::debug;

/// Weighted sum of the three sub-scores, rounded to the nearest integer.
/// Inputs are already <= 100 and the weights sum to 1.0, so no cap is needed.
pub fn overall_score(scores: &PlatformScores, weights: &RoleWeights) -> u32 {
    weighted(scores, weights).round() as u32
}

/// Composite with optional pre-computed external signals blended in.
///
/// Each present signal takes its caller-supplied share of the final score;
/// the legacy platform composite keeps the remaining mass. A missing signal
/// is simply absent input; the blend falls back toward legacy weighting and
/// never errors. With no signals at all this equals `overall_score`.
pub fn overall_score_with_aux(
    scores: &PlatformScores,
    weights: &RoleWeights,
    signals: &AuxiliarySignals,
    aux_weights: &AuxWeights,
) -> u32 {
    let base = weighted(scores, weights);

    let mut aux_total = 0.0;
    let mut aux_mass = 0.0;
    for (value, weight) in [
        (signals.trust, aux_weights.trust),
        (signals.dna, aux_weights.dna),
        (signals.trajectory, aux_weights.trajectory),
    ] {
        if let Some(v) = value {
            if weight > 0.0 {
                aux_total += v.clamp(0.0, 100.0) * weight;
                aux_mass += weight;
            }
        }
    }

    if aux_mass <= 0.0 {
        return base.round() as u32;
    }
    // Caller weights beyond a full share are scaled back down.
    if aux_mass > 1.0 {
        aux_total /= aux_mass;
        aux_mass = 1.0;
    }

    let blended = base * (1.0 - aux_mass) + aux_total;
    debug!(
        "composite blend: base={:.1}, aux_mass={:.2}, blended={:.1}",
        base, aux_mass, blended
    );
    blended.clamp(0.0, 100.0).round() as u32
}

fn weighted(scores: &PlatformScores, weights: &RoleWeights) -> f64 {
    weights.leetcode * scores.leetcode as f64
        + weights.github * scores.github as f64
        + weights.linkedin * scores.linkedin as f64
}
