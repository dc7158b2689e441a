/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::error::UnitError;

/// Number of SI base dimensions every [`Dimensions`] vector carries:
/// mass, length, time, temperature, current, substance, luminosity,
/// information, in that order.
pub const BASIC_DIMENSIONS: usize = 8;

/// Upper bound on the number of custom (user-named) dimension slots.
pub const MAX_CUSTOM_DIMENSIONS: usize = 4;

pub(crate) const MASS: usize = 0;
pub(crate) const LENGTH: usize = 1;
pub(crate) const TIME: usize = 2;
pub(crate) const TEMPERATURE: usize = 3;
pub(crate) const CURRENT: usize = 4;
pub(crate) const SUBSTANCE: usize = 5;
pub(crate) const LUMINOSITY: usize = 6;
pub(crate) const INFORMATION: usize = 7;

const BASIC_SYMBOLS: [&str; BASIC_DIMENSIONS] =
    ["kg", "m", "s", "K", "A", "mol", "cd", "b"];

/// A physical dimension: an integer-exponent vector over the eight SI
/// base dimensions plus up to four named custom dimensions, and an
/// optional affine offset.
///
/// Two `Dimensions` are equal iff their basic exponents, their custom
/// dimension lists (name and exponent) and their offsets all match.
/// [`Dimensions::compatible_with`] ignores the offset, which is what
/// the conversion engine uses to decide whether two units can be
/// converted between.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct Dimensions {
    basic: [i32; BASIC_DIMENSIONS],
    /// Sorted (by name), deduplicated, zero-exponents dropped.
    custom: Vec<(String, i32)>,
    offset: f64,
}

impl Dimensions {
    /// The dimensionless quantity: all exponents zero, no offset.
    pub const fn dimensionless() -> Self {
        Dimensions {
            basic: [0; BASIC_DIMENSIONS],
            custom: Vec::new(),
            offset: 0.0,
        }
    }

    /// Build a `Dimensions` from an explicit basic-exponent vector, a
    /// list of (name, exponent) custom dimensions and an offset.
    ///
    /// Fails with [`UnitError::InvalidDimensions`] if the custom names
    /// are not strictly ascending and free of duplicates, or if a
    /// zero exponent is given for a named custom dimension.
    pub fn new(
        basic: [i32; BASIC_DIMENSIONS],
        custom: Vec<(String, i32)>,
        offset: f64,
    ) -> Result<Self, UnitError> {
        if custom.len() > MAX_CUSTOM_DIMENSIONS {
            return Err(UnitError::InvalidDimensions(format!(
                "too many custom dimensions ({}, max {})",
                custom.len(),
                MAX_CUSTOM_DIMENSIONS
            )));
        }
        for pair in custom.windows(2) {
            if pair[0].0 >= pair[1].0 {
                return Err(UnitError::InvalidDimensions(format!(
                    "custom dimension names not strictly ascending: {} >= {}",
                    pair[0].0, pair[1].0
                )));
            }
        }
        if custom.iter().any(|(_, n)| *n == 0) {
            return Err(UnitError::InvalidDimensions(
                "custom dimension with zero exponent".to_string(),
            ));
        }
        Ok(Dimensions {
            basic,
            custom,
            offset,
        })
    }

    pub(crate) fn basic_dim(idx: usize, exp: i32) -> Self {
        let mut basic = [0; BASIC_DIMENSIONS];
        basic[idx] = exp;
        Dimensions {
            basic,
            custom: Vec::new(),
            offset: 0.0,
        }
    }

    pub(crate) fn custom_dim(name: &str, exp: i32) -> Self {
        Dimensions {
            basic: [0; BASIC_DIMENSIONS],
            custom: vec![(name.to_string(), exp)],
            offset: 0.0,
        }
    }

    pub(crate) fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn basic_exponents(&self) -> &[i32; BASIC_DIMENSIONS] {
        &self.basic
    }

    pub fn custom_exponents(&self) -> &[(String, i32)] {
        &self.custom
    }

    pub fn is_dimensionless(&self) -> bool {
        self.basic.iter().all(|e| *e == 0)
            && self.custom.is_empty()
            && self.offset == 0.0
    }

    /// Equality that ignores any affine offset, used by the
    /// conversion engine to decide whether two units are compatible.
    pub fn compatible_with(&self, other: &Self) -> bool {
        self.basic == other.basic && self.custom == other.custom
    }

    /// Multiply every exponent (basic and custom) by `power`. The
    /// result never carries an offset.
    pub fn scaled(&self, power: i32) -> Self {
        let mut basic = self.basic;
        for e in basic.iter_mut() {
            *e *= power;
        }
        let custom = self
            .custom
            .iter()
            .map(|(name, exp)| (name.clone(), exp * power))
            .collect();
        Dimensions {
            basic,
            custom,
            offset: 0.0,
        }
    }

    /// Compose `self` with `sign * rhs`, merging custom dimension
    /// lists by name and dropping any that cancel to zero. The
    /// result never carries an offset: a composite unit is never
    /// affine (see the conversion engine's offset handling).
    pub fn combine(&self, rhs: &Self, sign: i32) -> Self {
        let mut basic = self.basic;
        for (l, r) in basic.iter_mut().zip(rhs.basic.iter()) {
            *l += sign * r;
        }

        let mut custom = Vec::with_capacity(self.custom.len() + rhs.custom.len());
        let (mut li, mut ri) = (0, 0);
        while li < self.custom.len() || ri < rhs.custom.len() {
            match (self.custom.get(li), rhs.custom.get(ri)) {
                (Some((ln, le)), Some((rn, re))) if ln == rn => {
                    let exp = le + sign * re;
                    if exp != 0 {
                        custom.push((ln.clone(), exp));
                    }
                    li += 1;
                    ri += 1;
                }
                (Some((ln, le)), Some((rn, _))) if ln < rn => {
                    custom.push((ln.clone(), *le));
                    li += 1;
                }
                (Some(_), Some((rn, re))) => {
                    custom.push((rn.clone(), sign * re));
                    ri += 1;
                }
                (Some((ln, le)), None) => {
                    custom.push((ln.clone(), *le));
                    li += 1;
                }
                (None, Some((rn, re))) => {
                    custom.push((rn.clone(), sign * re));
                    ri += 1;
                }
                (None, None) => unreachable!(),
            }
        }

        Dimensions {
            basic,
            custom,
            offset: 0.0,
        }
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut wrote = false;
        for (sym, exp) in BASIC_SYMBOLS.iter().zip(self.basic.iter()) {
            if *exp != 0 {
                if wrote {
                    write!(f, "\u{22c5}")?;
                }
                write!(f, "{sym}")?;
                if *exp != 1 {
                    write!(f, "^{exp}")?;
                }
                wrote = true;
            }
        }
        for (name, exp) in &self.custom {
            if wrote {
                write!(f, "\u{22c5}")?;
            }
            write!(f, "_{name}")?;
            if *exp != 1 {
                write!(f, "^{exp}")?;
            }
            wrote = true;
        }
        if !wrote {
            write!(f, "1")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensionless_is_empty() {
        assert!(Dimensions::dimensionless().is_dimensionless());
    }

    #[test]
    fn combine_adds_and_subtracts() {
        let mass = Dimensions::basic_dim(MASS, 1);
        let length = Dimensions::basic_dim(LENGTH, 1);
        let time = Dimensions::basic_dim(TIME, 1);
        // force = kg * m / s^2
        let force = mass
            .combine(&length, 1)
            .combine(&time.scaled(2), -1);
        assert_eq!(force.basic_exponents(), &[1, 1, -2, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn combine_merges_custom_dimensions() {
        let a = Dimensions::custom_dim("pax", 1);
        let b = Dimensions::custom_dim("pax", -1);
        let merged = a.combine(&b, 1);
        assert!(merged.custom_exponents().is_empty());
    }

    #[test]
    fn combine_keeps_distinct_custom_names_sorted() {
        let dir = Dimensions::custom_dim("dir", -1);
        let pax = Dimensions::custom_dim("pax", 1);
        let merged = dir.combine(&pax, 1);
        assert_eq!(
            merged.custom_exponents(),
            &[("dir".to_string(), -1), ("pax".to_string(), 1)]
        );
    }

    #[test]
    fn rejects_unsorted_custom_names() {
        let err = Dimensions::new(
            [0; BASIC_DIMENSIONS],
            vec![("pax".to_string(), 1), ("dir".to_string(), 1)],
            0.0,
        );
        assert!(matches!(err, Err(UnitError::InvalidDimensions(_))));
    }

    #[test]
    fn compatible_with_ignores_offset() {
        let a = Dimensions::basic_dim(TEMPERATURE, 1);
        let b = a.clone().with_offset(273.15);
        assert!(a.compatible_with(&b));
        assert_ne!(a, b);
    }
}
