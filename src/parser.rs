/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use nom::{
    branch::alt,
    character::complete::{char, digit1},
    combinator::{map, opt, value},
    sequence::tuple,
    IResult,
};
use serde::{Deserialize, Serialize};

use super::error::UnitError;
use super::prefix::{BinaryPrefix, MetricPrefix, Prefix};
use super::units;

/// A single unit token as it appeared in a compound unit string: an
/// optional prefix, the bare unit name it applies to (or a `_name`
/// custom dimension token), and the signed power it was raised to.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ParsedUnit {
    pub prefix: Option<Prefix>,
    pub unit: String,
    pub power: i32,
}

/// Parse a compound unit string such as `"kg⋅m/s^2"` into its
/// constituent tokens. An empty string parses to an empty list (the
/// dimensionless unit).
pub fn parse(input: &str) -> Result<Vec<ParsedUnit>, UnitError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    if input.matches('/').count() > 1 {
        return Err(UnitError::InvalidUnitString(format!(
            "more than one '/' in unit string: {input}"
        )));
    }

    let (numerator, denominator) = match input.split_once('/') {
        Some((n, d)) => (n, Some(d)),
        None => (input, None),
    };

    // A bare "1" numerator is the conventional way to write a purely
    // reciprocal compound unit, e.g. "1/s".
    let numerator = if numerator.trim() == "1" { "" } else { numerator };

    let mut tokens = parse_side(numerator, 1)?;
    if let Some(d) = denominator {
        tokens.extend(parse_side(d, -1)?);
    }
    Ok(tokens)
}

/// Split one side of a `/` into its sub-unit tokens and parse each,
/// applying `sign` to every resulting power.
///
/// A run of whitespace is a single separator (any number of spaces
/// collapses to one), but `⋅` is a discrete separator: two of them in
/// a row, or one at either end of a non-empty side, denote an empty
/// sub-unit and are rejected rather than silently skipped.
fn parse_side(side: &str, sign: i32) -> Result<Vec<ParsedUnit>, UnitError> {
    let side = side.trim();
    if side.is_empty() {
        return Ok(Vec::new());
    }

    let mut tokens = Vec::new();
    for segment in side.split('\u{22c5}') {
        let segment = segment.trim();
        if segment.is_empty() {
            return Err(UnitError::InvalidUnitString(format!(
                "empty sub-unit in unit string: {side}"
            )));
        }
        for tok in segment.split_whitespace() {
            tokens.push(parse_token(tok, sign)?);
        }
    }
    Ok(tokens)
}

fn parse_token(tok: &str, sign: i32) -> Result<ParsedUnit, UnitError> {
    let (name, power) = match tok.find('^') {
        Some(idx) => (&tok[..idx], parse_exponent(&tok[idx + 1..])?),
        None => (tok, 1),
    };

    let (prefix, unit) = resolve_unit_name(name)?;
    Ok(ParsedUnit {
        prefix,
        unit,
        power: sign * power,
    })
}

fn parse_exponent(input: &str) -> Result<i32, UnitError> {
    match exponent_literal(input) {
        Ok(("", n)) if n != 0 => Ok(n),
        _ => Err(UnitError::InvalidExponent(input.to_string())),
    }
}

fn exponent_literal(input: &str) -> IResult<&str, i32> {
    map(tuple((opt(sign), digit1)), |(s, digits): (Option<i32>, &str)| {
        s.unwrap_or(1) * digits.parse::<i32>().unwrap_or(0)
    })(input)
}

fn sign(input: &str) -> IResult<&str, i32> {
    alt((value(-1, char('-')), value(1, char('+'))))(input)
}

/// Resolve a bare (unexponentiated) unit name to its prefix (if any)
/// and the table-recognised unit name it names.
///
/// Tried in order: a `_name` custom dimension token, an exact table
/// match, a one-character metric prefix plus a prefixable unit, a
/// two-character binary prefix plus a binary-prefixable unit.
fn resolve_unit_name(name: &str) -> Result<(Option<Prefix>, String), UnitError> {
    if let Some(custom) = name.strip_prefix('_') {
        if custom.is_empty() {
            return Err(UnitError::InvalidUnitString(format!(
                "empty custom dimension name: {name}"
            )));
        }
        return Ok((None, name.to_string()));
    }

    if units::lookup(name).is_some() {
        return Ok((None, name.to_string()));
    }

    if let Some(c) = name.chars().next() {
        if let Some(prefix) = MetricPrefix::from_char(c) {
            let rest = &name[c.len_utf8()..];
            if let Some(desc) = units::lookup(rest) {
                if desc.prefixable {
                    return Ok((Some(Prefix::Metric(prefix)), rest.to_string()));
                }
            }
        }
    }

    if let Some((prefix, rest)) = BinaryPrefix::parse(name) {
        if let Some(desc) = units::lookup(rest) {
            if desc.binary_prefixable {
                return Ok((Some(Prefix::Binary(prefix)), rest.to_string()));
            }
        }
    }

    Err(UnitError::UnknownUnit(name.to_string()))
}
