/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A single-character, decimal-scaled SI prefix, `q` (1e-30) through
/// `Q` (1e+30). `da` (deca) is deliberately not part of this table:
/// it is the one standard SI prefix that is two characters, and
/// admitting it would break the parser's "metric prefixes are
/// exactly one character" invariant.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
pub enum MetricPrefix {
    Quecto,
    Ronto,
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
    Ronna,
    Quetta,
}

impl MetricPrefix {
    /// Every metric prefix, ordered by its exponent.
    pub const ALL: &'static [MetricPrefix] = &[
        MetricPrefix::Quecto,
        MetricPrefix::Ronto,
        MetricPrefix::Yocto,
        MetricPrefix::Zepto,
        MetricPrefix::Atto,
        MetricPrefix::Femto,
        MetricPrefix::Pico,
        MetricPrefix::Nano,
        MetricPrefix::Micro,
        MetricPrefix::Milli,
        MetricPrefix::Centi,
        MetricPrefix::Deci,
        MetricPrefix::Hecto,
        MetricPrefix::Kilo,
        MetricPrefix::Mega,
        MetricPrefix::Giga,
        MetricPrefix::Tera,
        MetricPrefix::Peta,
        MetricPrefix::Exa,
        MetricPrefix::Zetta,
        MetricPrefix::Yotta,
        MetricPrefix::Ronna,
        MetricPrefix::Quetta,
    ];

    /// Parse a single character as a metric prefix symbol. `u` and
    /// `µ` (U+00B5 and U+03BC) both denote micro.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'q' => MetricPrefix::Quecto,
            'r' => MetricPrefix::Ronto,
            'y' => MetricPrefix::Yocto,
            'z' => MetricPrefix::Zepto,
            'a' => MetricPrefix::Atto,
            'f' => MetricPrefix::Femto,
            'p' => MetricPrefix::Pico,
            'n' => MetricPrefix::Nano,
            'u' | '\u{00b5}' | '\u{03bc}' => MetricPrefix::Micro,
            'm' => MetricPrefix::Milli,
            'c' => MetricPrefix::Centi,
            'd' => MetricPrefix::Deci,
            'h' => MetricPrefix::Hecto,
            'k' => MetricPrefix::Kilo,
            'M' => MetricPrefix::Mega,
            'G' => MetricPrefix::Giga,
            'T' => MetricPrefix::Tera,
            'P' => MetricPrefix::Peta,
            'E' => MetricPrefix::Exa,
            'Z' => MetricPrefix::Zetta,
            'Y' => MetricPrefix::Yotta,
            'R' => MetricPrefix::Ronna,
            'Q' => MetricPrefix::Quetta,
            _ => return None,
        })
    }

    pub fn exponent(&self) -> i32 {
        match self {
            MetricPrefix::Quecto => -30,
            MetricPrefix::Ronto => -27,
            MetricPrefix::Yocto => -24,
            MetricPrefix::Zepto => -21,
            MetricPrefix::Atto => -18,
            MetricPrefix::Femto => -15,
            MetricPrefix::Pico => -12,
            MetricPrefix::Nano => -9,
            MetricPrefix::Micro => -6,
            MetricPrefix::Milli => -3,
            MetricPrefix::Centi => -2,
            MetricPrefix::Deci => -1,
            MetricPrefix::Hecto => 2,
            MetricPrefix::Kilo => 3,
            MetricPrefix::Mega => 6,
            MetricPrefix::Giga => 9,
            MetricPrefix::Tera => 12,
            MetricPrefix::Peta => 15,
            MetricPrefix::Exa => 18,
            MetricPrefix::Zetta => 21,
            MetricPrefix::Yotta => 24,
            MetricPrefix::Ronna => 27,
            MetricPrefix::Quetta => 30,
        }
    }

    pub fn factor(&self) -> f64 {
        10f64.powi(self.exponent())
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MetricPrefix::Quecto => "q",
            MetricPrefix::Ronto => "r",
            MetricPrefix::Yocto => "y",
            MetricPrefix::Zepto => "z",
            MetricPrefix::Atto => "a",
            MetricPrefix::Femto => "f",
            MetricPrefix::Pico => "p",
            MetricPrefix::Nano => "n",
            MetricPrefix::Micro => "\u{00b5}",
            MetricPrefix::Milli => "m",
            MetricPrefix::Centi => "c",
            MetricPrefix::Deci => "d",
            MetricPrefix::Hecto => "h",
            MetricPrefix::Kilo => "k",
            MetricPrefix::Mega => "M",
            MetricPrefix::Giga => "G",
            MetricPrefix::Tera => "T",
            MetricPrefix::Peta => "P",
            MetricPrefix::Exa => "E",
            MetricPrefix::Zetta => "Z",
            MetricPrefix::Yotta => "Y",
            MetricPrefix::Ronna => "R",
            MetricPrefix::Quetta => "Q",
        }
    }
}

impl Display for MetricPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_deca() {
        assert!(MetricPrefix::from_char('d').is_some());
        // "da" is two characters and must never parse as a single-char prefix.
        assert_eq!(MetricPrefix::from_char('a'), Some(MetricPrefix::Atto));
    }

    #[test]
    fn micro_has_two_spellings() {
        assert_eq!(
            MetricPrefix::from_char('u'),
            MetricPrefix::from_char('\u{00b5}')
        );
    }

    #[test]
    fn kilo_factor() {
        assert_eq!(MetricPrefix::Kilo.factor(), 1000.0);
    }
}
