/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::Write as _;

use super::parser::ParsedUnit;

/// Render a list of parsed unit tokens as a canonical unit string.
///
/// Tokens are partitioned by the sign of their power into a numerator
/// (power > 0) and a denominator (power < 0). When both are
/// non-empty they are joined as `numerator/denominator`, with
/// denominator powers written as their absolute value. When only the
/// denominator is non-empty (no positive-power token at all), each
/// entry is written with its original, explicit negative power
/// instead — there is no leading `1/`. A power of magnitude 1 is
/// never written, except in that denominator-only case.
pub fn format(units: &[ParsedUnit]) -> String {
    let positive: Vec<&ParsedUnit> = units.iter().filter(|u| u.power > 0).collect();
    let negative: Vec<&ParsedUnit> = units.iter().filter(|u| u.power < 0).collect();

    if positive.is_empty() && negative.is_empty() {
        return String::new();
    }

    if positive.is_empty() {
        return join(&negative, |power| power);
    }

    let numerator = join(&positive, |power| power);
    if negative.is_empty() {
        return numerator;
    }
    let denominator = join(&negative, |power| -power);
    format!("{numerator}/{denominator}")
}

fn join(tokens: &[&ParsedUnit], power_to_render: impl Fn(i32) -> i32) -> String {
    let mut out = String::new();
    for unit in tokens {
        if !out.is_empty() {
            out.push('\u{22c5}');
        }
        if let Some(prefix) = &unit.prefix {
            out.push_str(prefix.symbol());
        }
        out.push_str(&unit.unit);
        let power = power_to_render(unit.power);
        if power != 1 {
            let _ = write!(out, "^{power}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::{MetricPrefix, Prefix};

    #[test]
    fn formats_single_unit() {
        let units = vec![ParsedUnit {
            prefix: None,
            unit: "kg".to_string(),
            power: 1,
        }];
        assert_eq!(format(&units), "kg");
    }

    #[test]
    fn formats_numerator_and_denominator() {
        let units = vec![
            ParsedUnit {
                prefix: None,
                unit: "kg".to_string(),
                power: 1,
            },
            ParsedUnit {
                prefix: None,
                unit: "m".to_string(),
                power: 1,
            },
            ParsedUnit {
                prefix: None,
                unit: "s".to_string(),
                power: -2,
            },
        ];
        assert_eq!(format(&units), "kg\u{22c5}m/s^2");
    }

    #[test]
    fn omits_power_of_one() {
        let units = vec![ParsedUnit {
            prefix: Some(Prefix::Metric(MetricPrefix::Kilo)),
            unit: "m".to_string(),
            power: 1,
        }];
        assert_eq!(format(&units), "km");
    }

    #[test]
    fn denominator_only_shows_explicit_negative_power() {
        let units = vec![ParsedUnit {
            prefix: None,
            unit: "s".to_string(),
            power: -1,
        }];
        assert_eq!(format(&units), "s^-1");
    }

    #[test]
    fn denominator_only_with_two_terms() {
        let units = vec![
            ParsedUnit {
                prefix: None,
                unit: "kg".to_string(),
                power: -1,
            },
            ParsedUnit {
                prefix: None,
                unit: "s".to_string(),
                power: -2,
            },
        ];
        assert_eq!(format(&units), "kg^-1\u{22c5}s^-2");
    }
}
