//! Throw symbols and the line parser.

use std::fmt;

use serde::Serialize;

use crate::error::{InvalidThrowError, Result};

pub const SYMBOL_STRIKE: char = 'X';
pub const SYMBOL_SPARE: char = '/';
pub const SYMBOL_MISS: char = '-';

/// A single ball rolled down the lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Throw {
    /// Every pin down on the first ball of a frame.
    Strike,
    /// The pins left standing cleared by the second ball.
    Spare,
    /// No pins down.
    Miss,
    /// Pins knocked down without clearing the rack.
    Pins(u8),
}

impl Throw {
    /// Interpret one symbol of a throw line at `position`.
    ///
    /// A spare is priced from the throw before it, so one cannot open the
    /// line.
    pub fn from_symbol(symbol: char, position: usize) -> Result<Self> {
        match symbol {
            SYMBOL_STRIKE => Ok(Throw::Strike),
            SYMBOL_SPARE if position > 0 => Ok(Throw::Spare),
            SYMBOL_MISS => Ok(Throw::Miss),
            SYMBOL_SPARE => Err(InvalidThrowError { symbol, position }),
            _ => symbol
                .to_digit(10)
                .map(|pins| Throw::Pins(pins as u8))
                .ok_or(InvalidThrowError { symbol, position }),
        }
    }

    /// The character this throw is written as in a line.
    pub fn symbol(&self) -> char {
        match self {
            Throw::Strike => SYMBOL_STRIKE,
            Throw::Spare => SYMBOL_SPARE,
            Throw::Miss => SYMBOL_MISS,
            Throw::Pins(pins) => char::from_digit(u32::from(*pins), 10).unwrap_or('?'),
        }
    }

    /// Strikes and spares end their frame and earn a bonus.
    pub fn clears_rack(&self) -> bool {
        matches!(self, Throw::Strike | Throw::Spare)
    }
}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parse a whole throw line, stopping at the first unrecognised symbol.
pub fn parse_throws(line: &str) -> Result<Vec<Throw>> {
    line.chars()
        .enumerate()
        .map(|(position, symbol)| Throw::from_symbol(symbol, position))
        .collect()
}
