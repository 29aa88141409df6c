use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::NumeralError;
use crate::format::{decompose, MAX_VALUE};
use crate::parse::parse;
use crate::symbol::Symbol;

/// A value in `1..=3999`, displayed in canonical uppercase form.
///
/// Serializes as its numeral string; deserializes from either a numeral
/// string or an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RomanNumeral(u16);

impl RomanNumeral {
    pub const MIN: RomanNumeral = RomanNumeral(1);
    pub const MAX: RomanNumeral = RomanNumeral(MAX_VALUE as u16);

    pub fn new(value: u16) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&value)
            .then_some(RomanNumeral(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// Canonical symbols, largest first.
    pub fn symbols(self) -> Vec<Symbol> {
        decompose(u32::from(self.0))
    }
}

impl TryFrom<u32> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(NumeralError::NotPositive(0.0));
        }
        if value > MAX_VALUE {
            return Err(NumeralError::TooLarge(f64::from(value)));
        }
        // value <= 3999 fits in u16
        Ok(RomanNumeral(value as u16))
    }
}

impl TryFrom<u16> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        RomanNumeral::try_from(u32::from(value))
    }
}

impl From<RomanNumeral> for u32 {
    fn from(n: RomanNumeral) -> u32 {
        u32::from(n.0)
    }
}

impl FromStr for RomanNumeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RomanNumeral::try_from(parse(s)?)
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            f.write_str(symbol.name())?;
        }
        Ok(())
    }
}

impl Serialize for RomanNumeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RomanNumeral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Value(u32),
        }

        let parsed = match Repr::deserialize(deserializer)? {
            Repr::Text(s) => s.parse(),
            Repr::Value(v) => RomanNumeral::try_from(v),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
