//! Ten-pin bowling scores from a compact throw line.
//!
//! A line has one symbol per throw: `X` strike, `/` spare, `-` miss and a
//! digit for pins knocked down without clearing the rack. Strikes earn the
//! next two throws as a bonus and spares the next one.

pub mod error;
pub mod regression;
pub mod rules;
pub mod scoring;
pub mod throw;

pub use error::{InvalidThrowError, Result};
pub use rules::ScoringRules;
pub use scoring::{score, score_sheet, score_sheet_with_rules, ScoreCard, ScoreSheet};
pub use throw::{parse_throws, Throw};

/// Parse and score a throw line.
pub fn score_line(line: &str) -> Result<u32> {
    Ok(score(&parse_throws(line)?))
}

/// Parse a throw line and return its full score sheet.
pub fn score_line_sheet(line: &str) -> Result<ScoreSheet> {
    Ok(score_sheet(&parse_throws(line)?))
}
