//! Integer to Roman numeral conversion.

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::error::NumeralError;
use crate::settings::settings;
use crate::symbol::{Symbol, SymbolTable};

/// Largest value with a standard representation.
pub const MAX_VALUE: u32 = 3999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterCase {
    #[default]
    Upper,
    Lower,
}

impl LetterCase {
    pub fn as_str(self) -> &'static str {
        match self {
            LetterCase::Upper => "upper",
            LetterCase::Lower => "lower",
        }
    }
}

/// Format a number using the letter case from the global settings.
///
/// The value is rounded to the nearest integer first, so `3.6` formats as
/// `"IV"` and `0.6` as `"I"`.
pub fn to_numeral(value: impl Into<f64>) -> Result<String, NumeralError> {
    to_numeral_with(value, settings().formatter.case)
}

pub fn to_numeral_with(value: impl Into<f64>, case: LetterCase) -> Result<String, NumeralError> {
    let value = value.into();
    let _span = debug_span!("to_numeral", value, ?case).entered();

    let n = round_checked(value)?;
    let mut numeral: String = decompose(n).into_iter().map(Symbol::name).collect();
    if case == LetterCase::Lower {
        numeral.make_ascii_lowercase();
    }

    debug!(n, numeral = numeral.as_str());
    Ok(numeral)
}

fn round_checked(value: f64) -> Result<u32, NumeralError> {
    if value.is_nan() {
        return Err(NumeralError::NotANumber);
    }
    if value < 0.5 {
        return Err(NumeralError::NotPositive(value));
    }
    let rounded = value.round();
    if rounded > f64::from(MAX_VALUE) {
        return Err(NumeralError::TooLarge(value));
    }
    Ok(rounded as u32)
}

/// Greedy largest-first decomposition. Every step rescans from M.
pub(crate) fn decompose(mut n: u32) -> Vec<Symbol> {
    let table = SymbolTable::global();
    let mut symbols = Vec::new();

    while n > 0 {
        let Some(symbol) = table.descending().find(|s| n / s.value() >= 1) else {
            break;
        };
        n -= symbol.value();
        symbols.push(symbol);
    }

    symbols
}
