#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumeralError {
    #[error("numeral must have at least one symbol")]
    Empty,
    #[error("\"{symbol}\" is not a valid symbol (position {position})")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("\"{pair}\" is not a canonical subtractive pair (position {position})")]
    IllegalSubtraction { pair: String, position: usize },
    #[error("numeral value does not fit in 32 bits")]
    Overflow,
    #[error("expected a number, got NaN")]
    NotANumber,
    #[error("integer must be greater than zero, got {0}")]
    NotPositive(f64),
    #[error("cannot convert numbers greater than 3999, got {0}")]
    TooLarge(f64),
}
