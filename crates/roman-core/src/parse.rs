//! Roman numeral to integer conversion.
//!
//! Each letter is first recorded as an increment. When a letter turns out
//! to be larger than the increment before it, that earlier increment is
//! corrected retroactively with a decrement of twice its amount: once to
//! cancel the addition and once to apply it as a subtraction.

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::error::NumeralError;
use crate::settings::settings;
use crate::symbol::{Symbol, SymbolTable};

/// Which smaller-before-larger letter pairs are read as subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtractiveRule {
    /// Any smaller letter directly before a larger one subtracts ("IL" = 49).
    #[default]
    Permissive,
    /// Only IV, IX, XL, XC, CD and CM subtract.
    Canonical,
}

impl SubtractiveRule {
    pub fn as_str(self) -> &'static str {
        match self {
            SubtractiveRule::Permissive => "permissive",
            SubtractiveRule::Canonical => "canonical",
        }
    }
}

/// Pending contribution to the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Increment(u32),
    Decrement(u32),
}

/// Parse a numeral using the subtractive rule from the global settings.
///
/// Letters are case-insensitive.
pub fn parse(numeral: &str) -> Result<u32, NumeralError> {
    parse_with(numeral, settings().parser.subtractive)
}

/// Parse a numeral with an explicit subtractive rule.
pub fn parse_with(numeral: &str, rule: SubtractiveRule) -> Result<u32, NumeralError> {
    let _span = debug_span!("parse", numeral, ?rule).entered();

    if numeral.is_empty() {
        return Err(NumeralError::Empty);
    }

    let ops = operations(numeral, rule)?;
    let total = fold(&ops)?;
    debug!(ops = ops.len(), total);
    Ok(total)
}

fn operations(numeral: &str, rule: SubtractiveRule) -> Result<Vec<Operation>, NumeralError> {
    let table = SymbolTable::global();
    let mut ops = Vec::with_capacity(numeral.len() * 2);
    let mut prev: Option<Symbol> = None;

    for (position, c) in numeral.chars().enumerate() {
        let symbol = table
            .letter(c.to_ascii_uppercase())
            .ok_or(NumeralError::InvalidSymbol {
                symbol: c,
                position,
            })?;
        let amount = symbol.value();

        match ops.last() {
            None => ops.push(Operation::Increment(amount)),
            Some(&Operation::Increment(last)) if last < amount => {
                if rule == SubtractiveRule::Canonical {
                    // prev is always set once ops is non-empty
                    if let Some(prev) = prev {
                        check_pair(table, prev, symbol, position - 1)?;
                    }
                }
                ops.push(Operation::Decrement(last * 2));
                ops.push(Operation::Increment(amount));
            }
            Some(Operation::Increment(_)) | Some(Operation::Decrement(_)) => {
                ops.push(Operation::Increment(amount));
            }
        }
        prev = Some(symbol);
    }

    Ok(ops)
}

/// The inferred pair must itself be a two-letter symbol of the table.
fn check_pair(
    table: &SymbolTable,
    first: Symbol,
    second: Symbol,
    position: usize,
) -> Result<(), NumeralError> {
    let pair = format!("{first}{second}");
    match table.lookup(&pair) {
        Some(symbol) if symbol.is_subtractive() => Ok(()),
        _ => Err(NumeralError::IllegalSubtraction { pair, position }),
    }
}

fn fold(ops: &[Operation]) -> Result<u32, NumeralError> {
    let total = ops.iter().fold(0i64, |acc, op| match *op {
        Operation::Increment(amount) => acc + i64::from(amount),
        Operation::Decrement(amount) => acc - i64::from(amount),
    });
    u32::try_from(total).map_err(|_| NumeralError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Operation::{Decrement, Increment};

    #[test]
    fn test_known_values() {
        assert_eq!(parse("I"), Ok(1));
        assert_eq!(parse("IV"), Ok(4));
        assert_eq!(parse("IX"), Ok(9));
        assert_eq!(parse("XIV"), Ok(14));
        assert_eq!(parse("XL"), Ok(40));
        assert_eq!(parse("XC"), Ok(90));
        assert_eq!(parse("CD"), Ok(400));
        assert_eq!(parse("CM"), Ok(900));
        assert_eq!(parse("MCMXCIV"), Ok(1994));
        assert_eq!(parse("MMXXVI"), Ok(2026));
        assert_eq!(parse("MMMCMXCIX"), Ok(3999));
    }

    #[test]
    fn test_operation_trace() {
        let ops = operations("MCMXCIV", SubtractiveRule::Permissive).unwrap();
        assert_eq!(
            ops,
            vec![
                Increment(1000),
                Increment(100),
                Decrement(200),
                Increment(1000),
                Increment(10),
                Decrement(20),
                Increment(100),
                Increment(1),
                Decrement(2),
                Increment(5),
            ]
        );
        assert_eq!(fold(&ops), Ok(1994));
    }

    #[test]
    fn test_no_correction_after_decrement() {
        // "IVX": after I,V the last op is Increment(5), so X corrects V, not I.
        let ops = operations("IVX", SubtractiveRule::Permissive).unwrap();
        assert_eq!(
            ops,
            vec![
                Increment(1),
                Decrement(2),
                Increment(5),
                Decrement(10),
                Increment(10),
            ]
        );
        assert_eq!(fold(&ops), Ok(4));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(parse("xiv"), Ok(14));
        assert_eq!(parse("XIV"), Ok(14));
        assert_eq!(parse("mCmXcIv"), Ok(1994));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse(""), Err(NumeralError::Empty));
        assert_eq!(
            parse_with("", SubtractiveRule::Canonical),
            Err(NumeralError::Empty)
        );
    }

    #[test]
    fn test_invalid_symbol_reports_first_offender() {
        assert_eq!(
            parse("ABC"),
            Err(NumeralError::InvalidSymbol {
                symbol: 'A',
                position: 0
            })
        );
        assert_eq!(
            parse("XIz"),
            Err(NumeralError::InvalidSymbol {
                symbol: 'z',
                position: 2
            })
        );
        assert_eq!(
            parse(" X"),
            Err(NumeralError::InvalidSymbol {
                symbol: ' ',
                position: 0
            })
        );
        assert_eq!(
            parse("XⅣ"),
            Err(NumeralError::InvalidSymbol {
                symbol: 'Ⅳ',
                position: 1
            })
        );
    }

    #[test]
    fn test_error_message_names_symbol() {
        let err = parse("MQ").unwrap_err();
        assert_eq!(err.to_string(), "\"Q\" is not a valid symbol (position 1)");
    }

    #[test]
    fn test_permissive_accepts_any_smaller_before_larger() {
        assert_eq!(parse_with("IL", SubtractiveRule::Permissive), Ok(49));
        assert_eq!(parse_with("IM", SubtractiveRule::Permissive), Ok(999));
        assert_eq!(parse_with("VX", SubtractiveRule::Permissive), Ok(5));
        assert_eq!(parse_with("IIII", SubtractiveRule::Permissive), Ok(4));
    }

    #[test]
    fn test_canonical_rejects_illegal_pairs() {
        assert_eq!(
            parse_with("IL", SubtractiveRule::Canonical),
            Err(NumeralError::IllegalSubtraction {
                pair: "IL".into(),
                position: 0
            })
        );
        assert_eq!(
            parse_with("mvx", SubtractiveRule::Canonical),
            Err(NumeralError::IllegalSubtraction {
                pair: "VX".into(),
                position: 1
            })
        );
    }

    #[test]
    fn test_canonical_accepts_canonical_pairs() {
        for (numeral, value) in [
            ("IV", 4),
            ("IX", 9),
            ("XL", 40),
            ("XC", 90),
            ("CD", 400),
            ("CM", 900),
            ("MCMXCIV", 1994),
            ("MMMDCCCLXXXVIII", 3888),
        ] {
            assert_eq!(
                parse_with(numeral, SubtractiveRule::Canonical),
                Ok(value),
                "{numeral}"
            );
        }
    }

    #[test]
    fn test_values_beyond_formatter_range() {
        assert_eq!(parse("MMMM"), Ok(4000));
    }

    #[test]
    fn test_overflow() {
        let numeral = "M".repeat(5_000_000);
        assert_eq!(parse(&numeral), Err(NumeralError::Overflow));
    }
}
