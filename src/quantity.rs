/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};

use super::composite::{self, Composite};
use super::dimension::Dimensions;
use super::error::UnitError;
use super::formatter;
use super::parser::{self, ParsedUnit};

/// A magnitude together with the units it should be reported back in.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ExportedResult {
    pub magnitude: f64,
    pub units: String,
}

/// A physical quantity: a magnitude stored internally in SI base
/// units, its dimensions, and the unit string it was originally
/// constructed with (used by [`Quantity::get`] to report back in the
/// caller's own units rather than always in canonical SI).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Quantity {
    magnitude: f64,
    dimensions: Dimensions,
    preferred_units: Vec<ParsedUnit>,
}

impl Quantity {
    /// Parse `units` and store `magnitude` (given in that unit) as SI
    /// base internally.
    pub fn new(magnitude: f64, units: &str) -> Result<Self, UnitError> {
        let preferred_units = parser::parse(units)?;
        let composite = Composite::reduce(&preferred_units)?;
        Ok(Quantity {
            magnitude: composite.to_base(magnitude),
            dimensions: composite.dims,
            preferred_units,
        })
    }

    /// This quantity's dimensions.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Convert to an arbitrary target unit string, reporting back in
    /// that unit string's own canonical (re-rendered) form.
    pub fn convert(&self, target: &str) -> Result<ExportedResult, UnitError> {
        let parsed = parser::parse(target)?;
        let composite = Composite::reduce(&parsed)?;
        self.convert_to(&composite, &parsed)
    }

    /// Convert to an arbitrary target unit string, reporting back the
    /// target string exactly as the caller passed it rather than in
    /// its re-rendered canonical form.
    pub fn convert_legacy(&self, target: &str) -> Result<ExportedResult, UnitError> {
        let parsed = parser::parse(target)?;
        let composite = Composite::reduce(&parsed)?;
        if !self.dimensions.compatible_with(&composite.dims) {
            return Err(UnitError::conversion(
                self.dimensions.clone(),
                composite.dims,
            ));
        }
        Ok(ExportedResult {
            magnitude: composite.from_base(self.magnitude),
            units: target.to_string(),
        })
    }

    /// Report this quantity back in the units it was originally
    /// constructed with.
    pub fn get(&self) -> Result<ExportedResult, UnitError> {
        let composite = Composite::reduce(&self.preferred_units)?;
        self.convert_to(&composite, &self.preferred_units)
    }

    /// Report this quantity in a canonically re-synthesised SI
    /// representation, independent of the units it was constructed
    /// with.
    pub fn get_si(&self) -> ExportedResult {
        let si_units = composite::get_si(&self.dimensions);
        ExportedResult {
            magnitude: self.magnitude,
            units: formatter::format(&si_units),
        }
    }

    fn convert_to(
        &self,
        composite: &Composite,
        parsed: &[ParsedUnit],
    ) -> Result<ExportedResult, UnitError> {
        if !self.dimensions.compatible_with(&composite.dims) {
            return Err(UnitError::conversion(
                self.dimensions.clone(),
                composite.dims.clone(),
            ));
        }
        Ok(ExportedResult {
            magnitude: composite.from_base(self.magnitude),
            units: formatter::format(parsed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_si_base() {
        let q = Quantity::new(1.0, "kg").unwrap();
        let result = q.get().unwrap();
        assert_eq!(result.magnitude, 1.0);
        assert_eq!(result.units, "kg");
    }

    #[test]
    fn converts_kwh_to_mj() {
        let q = Quantity::new(1.0, "kWh").unwrap();
        let result = q.convert("MJ").unwrap();
        assert!((result.magnitude - 3.6).abs() < 1e-9);
        assert_eq!(result.units, "MJ");
    }

    #[test]
    fn rejects_incompatible_conversion() {
        let q = Quantity::new(1.0, "kg").unwrap();
        assert!(matches!(
            q.convert("m"),
            Err(UnitError::InvalidConversion(_, _))
        ));
    }

    #[test]
    fn legacy_accessor_echoes_caller_string() {
        let q = Quantity::new(1.0, "kg").unwrap();
        let result = q.convert_legacy("  g").unwrap();
        assert_eq!(result.units, "  g");
    }

    #[test]
    fn get_si_resynthesises_newtons() {
        let q = Quantity::new(1.0, "kg\u{22c5}m/s^2").unwrap();
        assert_eq!(q.get_si().units, "N");
    }

    #[test]
    fn degc_to_degf() {
        let q = Quantity::new(0.0, "degC").unwrap();
        let result = q.convert("degF").unwrap();
        assert!((result.magnitude - 32.0).abs() < 1e-9);
    }
}
