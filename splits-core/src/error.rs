use thiserror::Error;

/// A symbol in a throw line that is not a strike, spare, miss or digit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid throw symbol {symbol:?} at position {position}")]
pub struct InvalidThrowError {
    pub symbol: char,
    pub position: usize,
}

pub type Result<T> = std::result::Result<T, InvalidThrowError>;
