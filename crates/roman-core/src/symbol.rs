//! Canonical Roman numeral symbols.
//!
//! `SYMBOLS` is the single source list, ordered from largest to smallest
//! value. `SymbolTable` derives its by-name index from that list on first
//! use, so the ordered walk used by the formatter and the lookup used by
//! the parser can never disagree.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    M,
    CM,
    D,
    CD,
    C,
    XC,
    L,
    XL,
    X,
    IX,
    V,
    IV,
    I,
}

/// All symbols, largest value first.
pub const SYMBOLS: [Symbol; 13] = [
    Symbol::M,
    Symbol::CM,
    Symbol::D,
    Symbol::CD,
    Symbol::C,
    Symbol::XC,
    Symbol::L,
    Symbol::XL,
    Symbol::X,
    Symbol::IX,
    Symbol::V,
    Symbol::IV,
    Symbol::I,
];

impl Symbol {
    pub const fn value(self) -> u32 {
        match self {
            Symbol::M => 1000,
            Symbol::CM => 900,
            Symbol::D => 500,
            Symbol::CD => 400,
            Symbol::C => 100,
            Symbol::XC => 90,
            Symbol::L => 50,
            Symbol::XL => 40,
            Symbol::X => 10,
            Symbol::IX => 9,
            Symbol::V => 5,
            Symbol::IV => 4,
            Symbol::I => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Symbol::M => "M",
            Symbol::CM => "CM",
            Symbol::D => "D",
            Symbol::CD => "CD",
            Symbol::C => "C",
            Symbol::XC => "XC",
            Symbol::L => "L",
            Symbol::XL => "XL",
            Symbol::X => "X",
            Symbol::IX => "IX",
            Symbol::V => "V",
            Symbol::IV => "IV",
            Symbol::I => "I",
        }
    }

    /// Two-letter symbols written as a smaller letter before a larger one.
    pub const fn is_subtractive(self) -> bool {
        matches!(
            self,
            Symbol::CM | Symbol::CD | Symbol::XC | Symbol::XL | Symbol::IX | Symbol::IV
        )
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct SymbolTable {
    ordered: &'static [Symbol],
    by_name: HashMap<&'static str, Symbol>,
}

impl SymbolTable {
    /// Get or initialize the global table.
    pub fn global() -> &'static SymbolTable {
        static INSTANCE: OnceLock<SymbolTable> = OnceLock::new();
        INSTANCE.get_or_init(|| SymbolTable::build(&SYMBOLS))
    }

    fn build(ordered: &'static [Symbol]) -> Self {
        let by_name = ordered.iter().map(|&s| (s.name(), s)).collect();
        SymbolTable { ordered, by_name }
    }

    /// Look up a symbol by its exact (uppercase) name, e.g. `"X"` or `"XC"`.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    /// Look up a single-letter symbol. Case-sensitive; callers normalize.
    pub fn letter(&self, c: char) -> Option<Symbol> {
        let mut buf = [0u8; 4];
        self.lookup(c.encode_utf8(&mut buf))
    }

    /// Walk the table from M down to I.
    pub fn descending(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.ordered.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
