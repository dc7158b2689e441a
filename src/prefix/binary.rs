/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A two-character, power-of-two-scaled binary prefix, `Ki` (2^10)
/// through `Yi` (2^80).
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
pub enum BinaryPrefix {
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

impl BinaryPrefix {
    pub const ALL: &'static [BinaryPrefix] = &[
        BinaryPrefix::Kibi,
        BinaryPrefix::Mebi,
        BinaryPrefix::Gibi,
        BinaryPrefix::Tebi,
        BinaryPrefix::Pebi,
        BinaryPrefix::Exbi,
        BinaryPrefix::Zebi,
        BinaryPrefix::Yobi,
    ];

    /// Parse the first two characters of `input` as a binary prefix
    /// symbol, returning the prefix and the remainder of the string.
    pub fn parse(input: &str) -> Option<(Self, &str)> {
        let prefix = match input.get(..2)? {
            "Ki" => BinaryPrefix::Kibi,
            "Mi" => BinaryPrefix::Mebi,
            "Gi" => BinaryPrefix::Gibi,
            "Ti" => BinaryPrefix::Tebi,
            "Pi" => BinaryPrefix::Pebi,
            "Ei" => BinaryPrefix::Exbi,
            "Zi" => BinaryPrefix::Zebi,
            "Yi" => BinaryPrefix::Yobi,
            _ => return None,
        };
        Some((prefix, &input[2..]))
    }

    pub fn exponent(&self) -> u32 {
        match self {
            BinaryPrefix::Kibi => 10,
            BinaryPrefix::Mebi => 20,
            BinaryPrefix::Gibi => 30,
            BinaryPrefix::Tebi => 40,
            BinaryPrefix::Pebi => 50,
            BinaryPrefix::Exbi => 60,
            BinaryPrefix::Zebi => 70,
            BinaryPrefix::Yobi => 80,
        }
    }

    pub fn factor(&self) -> f64 {
        2f64.powi(self.exponent() as i32)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryPrefix::Kibi => "Ki",
            BinaryPrefix::Mebi => "Mi",
            BinaryPrefix::Gibi => "Gi",
            BinaryPrefix::Tebi => "Ti",
            BinaryPrefix::Pebi => "Pi",
            BinaryPrefix::Exbi => "Ei",
            BinaryPrefix::Zebi => "Zi",
            BinaryPrefix::Yobi => "Yi",
        }
    }
}

impl Display for BinaryPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gibi_factor() {
        assert_eq!(BinaryPrefix::Gibi.factor(), 1073741824.0);
    }

    #[test]
    fn parse_splits_remainder() {
        assert_eq!(BinaryPrefix::parse("GiB"), Some((BinaryPrefix::Gibi, "B")));
        assert_eq!(BinaryPrefix::parse("g"), None);
    }
}
