//! Score accumulation for a single game.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::rules::ScoringRules;
use crate::throw::Throw;

/// Accumulates frame totals one throw at a time.
///
/// A strike or spare cannot be valued when it is rolled, so its frame is
/// registered against the positions of the throws that will pay its bonus.
/// When one of those throws arrives its points are credited to every frame
/// waiting on it, and nothing is ever revisited.
#[derive(Debug, Clone, Default)]
pub struct ScoreCard {
    rules: ScoringRules,
    frames: Vec<u32>,
    /// Frames waiting on the throw at a given position.
    waiting: HashMap<usize, Vec<usize>>,
    /// Zero means the next throw opens a new frame.
    remaining_in_frame: u8,
    /// Points of the previous throw, for pricing a spare. Carried across
    /// frame boundaries.
    last_points: u32,
    position: usize,
}

impl ScoreCard {
    /// Create a card scored with standard ten-pin rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a card scored with custom rules.
    pub fn with_rules(rules: ScoringRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Score the next throw of the line.
    pub fn record(&mut self, throw: Throw) {
        let position = self.position;
        self.position += 1;

        if self.remaining_in_frame == 0 {
            self.frames.push(0);
            self.remaining_in_frame = self.rules.max_throws_per_frame;
            trace!(frame = self.frames.len() - 1, position, "opened frame");
        }
        let frame = self.frames.len() - 1;

        let points = match throw {
            Throw::Strike => {
                self.register(frame, position, self.rules.strike_bonus_throws);
                self.remaining_in_frame = 0;
                self.rules.pins
            }
            Throw::Spare => {
                self.register(frame, position, self.rules.spare_bonus_throws);
                self.remaining_in_frame = 0;
                self.rules.pins.saturating_sub(self.last_points)
            }
            Throw::Miss => {
                self.remaining_in_frame = self.remaining_in_frame.saturating_sub(1);
                0
            }
            Throw::Pins(pins) => {
                self.remaining_in_frame = self.remaining_in_frame.saturating_sub(1);
                u32::from(pins)
            }
        };
        self.last_points = points;

        self.frames[frame] += points;
        if let Some(earlier) = self.waiting.remove(&position) {
            for waiting_frame in earlier {
                trace!(frame = waiting_frame, position, points, "paid bonus");
                self.frames[waiting_frame] += points;
            }
        }
    }

    fn register(&mut self, frame: usize, position: usize, bonus_throws: usize) {
        for offset in 1..=bonus_throws {
            self.waiting.entry(position + offset).or_default().push(frame);
        }
    }

    /// Totals of every frame opened so far, including any past the last
    /// scored frame.
    pub fn frames(&self) -> &[u32] {
        &self.frames
    }

    /// Sum of the scored frames as they stand now.
    pub fn total(&self) -> u32 {
        self.frames.iter().take(self.rules.scored_frames).sum()
    }

    /// Bonuses owed to scored frames by throws that have not been rolled.
    pub fn unresolved_bonuses(&self) -> usize {
        self.waiting
            .values()
            .flatten()
            .filter(|&&frame| frame < self.rules.scored_frames)
            .count()
    }

    /// Close the pass. Bonuses still owed are left unpaid.
    pub fn finish(self) -> ScoreSheet {
        let unresolved_bonuses = self.unresolved_bonuses();
        if unresolved_bonuses > 0 {
            debug!(
                unresolved_bonuses,
                throws = self.position,
                "line ended before every bonus was rolled"
            );
        }

        ScoreSheet {
            total: self.total(),
            frames: self.frames,
            scored_frames: self.rules.scored_frames,
            unresolved_bonuses,
        }
    }
}

/// The result of one scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSheet {
    /// Sum of the scored frames.
    pub total: u32,
    /// Every frame opened, bookkeeping frames included.
    pub frames: Vec<u32>,
    /// Number of leading frames that count toward the total.
    pub scored_frames: usize,
    /// Bonus throws owed to scored frames that the line never supplied.
    pub unresolved_bonuses: usize,
}

impl ScoreSheet {
    /// The frames that make up the total.
    pub fn counted_frames(&self) -> &[u32] {
        &self.frames[..self.frames.len().min(self.scored_frames)]
    }

    /// Frames opened by throws after the last scored frame, such as the
    /// bonus balls of a tenth-frame strike.
    pub fn extra_frames(&self) -> &[u32] {
        &self.frames[self.frames.len().min(self.scored_frames)..]
    }

    /// Cumulative score after each counted frame, as on a paper scoresheet.
    pub fn running_totals(&self) -> Vec<u32> {
        self.counted_frames()
            .iter()
            .scan(0, |running, points| {
                *running += points;
                Some(*running)
            })
            .collect()
    }

    /// The highest scoring counted frame as `(index, points)`.
    pub fn best_frame(&self) -> Option<(usize, u32)> {
        self.counted_frames()
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|&(_, points)| points)
    }

    /// The lowest scoring counted frame as `(index, points)`.
    pub fn worst_frame(&self) -> Option<(usize, u32)> {
        self.counted_frames()
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|&(_, points)| points)
    }

    /// Every scored frame was opened and no bonus is still owed.
    pub fn is_complete(&self) -> bool {
        self.counted_frames().len() == self.scored_frames && self.unresolved_bonuses == 0
    }
}

/// Total score of a game under standard rules.
pub fn score(throws: &[Throw]) -> u32 {
    score_sheet(throws).total
}

/// Full score sheet of a game under standard rules.
pub fn score_sheet(throws: &[Throw]) -> ScoreSheet {
    score_sheet_with_rules(throws, ScoringRules::STANDARD)
}

/// Full score sheet of a game under the given rules.
pub fn score_sheet_with_rules(throws: &[Throw], rules: ScoringRules) -> ScoreSheet {
    let mut card = ScoreCard::with_rules(rules);
    for throw in throws {
        card.record(*throw);
    }
    card.finish()
}
