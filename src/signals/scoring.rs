// =============================================================================
// Sub-score heuristics — fundamental and technical
// =============================================================================
//
// Each heuristic starts from a neutral 50 and applies fixed step adjustments,
// then clamps into [0, 100].
//
// Fundamental (valuation):
//   PER  < 15 => +20 | < 25 => +10 | else -10    (lower is better)
//   PBR  < 1.5 => +15 | < 3 => +5  | else -10    (lower is better)
//   ROE  > 15 => +15 | > 10 => +5  | else -10    (higher is better)
//
// Technical (momentum):
//   change% > 0          => +20 | else -20
//   volume  > 10,000,000 => +15 | else -15
// =============================================================================

/// Neutral starting point for every heuristic.
pub const BASE_SCORE: i32 = 50;

/// Daily volume above which trading activity counts as strong.
pub const HIGH_VOLUME_THRESHOLD: u64 = 10_000_000;

/// Score valuation ratios into [0, 100].
///
/// Non-finite ratios fail every comparison and therefore take the penalty
/// branch; the result is still clamped.
pub fn fundamental_score(per: f64, pbr: f64, roe: f64) -> u8 {
    let mut score = BASE_SCORE;

    score += if per < 15.0 {
        20
    } else if per < 25.0 {
        10
    } else {
        -10
    };

    score += if pbr < 1.5 {
        15
    } else if pbr < 3.0 {
        5
    } else {
        -10
    };

    score += if roe > 15.0 {
        15
    } else if roe > 10.0 {
        5
    } else {
        -10
    };

    clamp_score(score)
}

/// Score daily momentum (percent change and traded volume) into [0, 100].
pub fn technical_score(change_percent: f64, volume: u64) -> u8 {
    let mut score = BASE_SCORE;
    score += if change_percent > 0.0 { 20 } else { -20 };
    score += if volume > HIGH_VOLUME_THRESHOLD { 15 } else { -15 };
    clamp_score(score)
}

/// Clamp an intermediate score into [0, 100].
pub fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}
