//! Tier classification. Every surface that displays a score derives its tier here.

use crate::feedback::models::{ScoreValue, Tier};

/// Scores strictly above this are `Strong`.
pub const STRONG_ABOVE: u8 = 70;
/// Scores at or above this (and not strong) are `Fair`.
pub const FAIR_FROM: u8 = 50;

/// Maps a score to its tier.
///
/// | Range    | Tier   |
/// |----------|--------|
/// | 71 – 100 | strong |
/// | 50 – 70  | fair   |
/// | 0 – 49   | poor   |
pub fn classify(score: ScoreValue) -> Tier {
    match score.get() {
        s if s > STRONG_ABOVE => Tier::Strong,
        s if s >= FAIR_FROM => Tier::Fair,
        _ => Tier::Poor,
    }
}
