//! Scoring constants for a game.

use serde::Serialize;

/// The knobs of the scoring pass. Ten-pin rules are [`ScoringRules::STANDARD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringRules {
    /// Pins in a full rack.
    pub pins: u32,
    /// Throws a frame may use before it closes on its own.
    pub max_throws_per_frame: u8,
    /// Following throws credited to a strike's frame.
    pub strike_bonus_throws: usize,
    /// Following throws credited to a spare's frame.
    pub spare_bonus_throws: usize,
    /// Frames that count toward the total; later frames are bookkeeping only.
    pub scored_frames: usize,
}

impl ScoringRules {
    pub const STANDARD: ScoringRules = ScoringRules {
        pins: 10,
        max_throws_per_frame: 2,
        strike_bonus_throws: 2,
        spare_bonus_throws: 1,
        scored_frames: 10,
    };
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::STANDARD
    }
}
