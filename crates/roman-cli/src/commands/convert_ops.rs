use roman_core::{parse, parse_with, to_numeral, to_numeral_with, LetterCase, SubtractiveRule};
use serde::Serialize;

use super::CommandError;

#[derive(Debug, Serialize)]
struct ParseRecord<'a> {
    numeral: &'a str,
    value: u32,
}

#[derive(Debug, Serialize)]
struct FormatRecord {
    value: f64,
    numeral: String,
}

/// Parse each numeral. `rule` overrides the configured subtractive rule.
pub fn parse_cmd(
    numerals: &[String],
    rule: Option<SubtractiveRule>,
    json: bool,
) -> Result<String, CommandError> {
    let mut records = Vec::with_capacity(numerals.len());
    for numeral in numerals {
        let value = match rule {
            Some(rule) => parse_with(numeral, rule),
            None => parse(numeral),
        }
        .map_err(|source| CommandError::Numeral {
            input: numeral.clone(),
            source,
        })?;
        records.push(ParseRecord { numeral, value });
    }

    if json {
        return Ok(serde_json::to_string_pretty(&records)?);
    }
    Ok(records
        .iter()
        .map(|r| format!("{}\t{}", r.numeral, r.value))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Format each value. `case` overrides the configured letter case.
pub fn format_cmd(
    values: &[f64],
    case: Option<LetterCase>,
    json: bool,
) -> Result<String, CommandError> {
    let mut records = Vec::with_capacity(values.len());
    for &value in values {
        let numeral = match case {
            Some(case) => to_numeral_with(value, case),
            None => to_numeral(value),
        }
        .map_err(|source| CommandError::Numeral {
            input: value.to_string(),
            source,
        })?;
        records.push(FormatRecord { value, numeral });
    }

    if json {
        return Ok(serde_json::to_string_pretty(&records)?);
    }
    Ok(records
        .iter()
        .map(|r| format!("{}\t{}", r.value, r.numeral))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// One line per value in `from..=to`: the value right-aligned, then its numeral.
pub fn table_cmd(from: u32, to: u32) -> Result<String, CommandError> {
    if from > to {
        return Err(CommandError::EmptyRange { from, to });
    }
    let mut lines = Vec::new();
    for n in from..=to {
        let numeral = to_numeral(n).map_err(|source| CommandError::Numeral {
            input: n.to_string(),
            source,
        })?;
        lines.push(format!("{n:>4}  {numeral}"));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_text() {
        let out = parse_cmd(&strings(&["XIV", "mcmxciv"]), None, false).unwrap();
        assert_eq!(out, "XIV\t14\nmcmxciv\t1994");
    }

    #[test]
    fn parse_json() {
        let out = parse_cmd(&strings(&["IX"]), None, true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v[0]["numeral"], "IX");
        assert_eq!(v[0]["value"], 9);
    }

    #[test]
    fn parse_rule_override() {
        assert_eq!(
            parse_cmd(&strings(&["IL"]), Some(SubtractiveRule::Permissive), false).unwrap(),
            "IL\t49"
        );
        let err = parse_cmd(&strings(&["IL"]), Some(SubtractiveRule::Canonical), false)
            .unwrap_err();
        assert!(err.to_string().contains("\"IL\""), "{err}");
    }

    #[test]
    fn parse_stops_at_first_error() {
        let err = parse_cmd(&strings(&["X", "ABC", ""]), None, false).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Numeral {
                ref input,
                source: roman_core::NumeralError::InvalidSymbol { symbol: 'A', position: 0 },
            } if input == "ABC"
        ));
    }

    #[test]
    fn format_text() {
        let out = format_cmd(&[1994.0, 3.6], None, false).unwrap();
        assert_eq!(out, "1994\tMCMXCIV\n3.6\tIV");
    }

    #[test]
    fn format_lower_json() {
        let out = format_cmd(&[14.0], Some(LetterCase::Lower), true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v[0]["numeral"], "xiv");
        assert_eq!(v[0]["value"], 14.0);
    }

    #[test]
    fn format_out_of_range() {
        let err = format_cmd(&[4000.0], None, false).unwrap_err();
        assert!(err.to_string().contains("greater than 3999"), "{err}");
        assert!(format_cmd(&[0.4], None, false).is_err());
    }

    #[test]
    fn table() {
        let out = table_cmd(8, 10).unwrap();
        assert_eq!(out, "   8  VIII\n   9  IX\n  10  X");
    }

    #[test]
    fn table_range_errors() {
        assert!(matches!(
            table_cmd(5, 4),
            Err(CommandError::EmptyRange { from: 5, to: 4 })
        ));
        assert!(matches!(
            table_cmd(3998, 4000),
            Err(CommandError::Numeral { .. })
        ));
        assert!(matches!(table_cmd(0, 1), Err(CommandError::Numeral { .. })));
    }
}
