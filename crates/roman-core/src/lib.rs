//! Conversion between Roman numerals and integers.

pub mod error;
pub mod format;
pub mod numeral;
pub mod parse;
pub mod settings;
pub mod symbol;


pub use error::NumeralError;
pub use format::{to_numeral, to_numeral_with, LetterCase, MAX_VALUE};
pub use numeral::RomanNumeral;
pub use parse::{parse, parse_with, SubtractiveRule};
pub use symbol::{Symbol, SymbolTable, SYMBOLS};
